//! Theme management with persisted light/dark preference.
//!
//! [`ThemePreferenceStore`] owns the active [`ThemeMode`] and keeps two
//! collaborators in step with it: a [`PreferenceStorage`] for persistence
//! and a [`ThemePresenter`] for the visual state.

mod storage;

pub use storage::{MemoryStorage, PreferenceStorage, StorageError, THEME_STORAGE_KEY};

use serde::{Deserialize, Serialize};

/// Body class present while the dark theme is active
pub const DARK_THEME_CLASS: &str = "dark-theme";

/// Theme options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Only `"dark"` selects the dark theme; anything else is light.
    pub fn parse(s: &str) -> Self {
        match s {
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    /// Glyph shown on the toggle button (offers the other mode)
    pub fn indicator(&self) -> &'static str {
        match self {
            ThemeMode::Light => "🌙",
            ThemeMode::Dark => "☀️",
        }
    }
}

/// Applies a theme to whatever is on screen.
pub trait ThemePresenter {
    fn apply_dark(&mut self);

    fn apply_light(&mut self);
}

/// Current theme plus the storage and presenter it is mirrored into.
///
/// One instance per page session; constructed at startup and handed to the
/// toggle handler.
pub struct ThemePreferenceStore<S, P> {
    mode: ThemeMode,
    storage: S,
    presenter: P,
}

impl<S: PreferenceStorage, P: ThemePresenter> ThemePreferenceStore<S, P> {
    pub fn new(storage: S, presenter: P) -> Self {
        Self {
            mode: ThemeMode::default(),
            storage,
            presenter,
        }
    }

    /// Load the saved theme and apply it.
    ///
    /// Light is the page's default styling, so only a saved dark theme
    /// touches the presenter. Unreadable storage counts as no preference.
    pub fn initialize(&mut self) -> ThemeMode {
        let saved = match self.storage.get(THEME_STORAGE_KEY) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!("Theme preference unreadable, using light: {}", e);
                None
            }
        };

        self.mode = saved
            .as_deref()
            .map(ThemeMode::parse)
            .unwrap_or_default();

        if self.mode.is_dark() {
            self.presenter.apply_dark();
        }
        self.mode
    }

    /// Flip the theme, apply it and persist it.
    ///
    /// A failed write is logged; the new theme stays applied for this session.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();

        match self.mode {
            ThemeMode::Dark => self.presenter.apply_dark(),
            ThemeMode::Light => self.presenter.apply_light(),
        }

        if let Err(e) = self.storage.set(THEME_STORAGE_KEY, self.mode.as_str()) {
            tracing::warn!("Failed to persist theme {}: {}", self.mode.as_str(), e);
        }
        self.mode
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records presenter calls and the resulting on-screen state
    #[derive(Debug, Default)]
    struct FakePresenter {
        dark_class: bool,
        indicator: &'static str,
        calls: Vec<&'static str>,
    }

    impl ThemePresenter for FakePresenter {
        fn apply_dark(&mut self) {
            self.dark_class = true;
            self.indicator = ThemeMode::Dark.indicator();
            self.calls.push("dark");
        }

        fn apply_light(&mut self) {
            self.dark_class = false;
            self.indicator = ThemeMode::Light.indicator();
            self.calls.push("light");
        }
    }

    fn store(storage: MemoryStorage) -> ThemePreferenceStore<MemoryStorage, FakePresenter> {
        ThemePreferenceStore::new(storage, FakePresenter::default())
    }

    #[test]
    fn parse_treats_unknown_values_as_light() {
        assert_eq!(ThemeMode::parse("dark"), ThemeMode::Dark);
        assert_eq!(ThemeMode::parse("light"), ThemeMode::Light);
        assert_eq!(ThemeMode::parse("Dark"), ThemeMode::Light);
        assert_eq!(ThemeMode::parse(""), ThemeMode::Light);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
        let mode: ThemeMode = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(mode, ThemeMode::Light);
    }

    #[test]
    fn initialize_with_empty_storage_is_light_without_effects() {
        let mut store = store(MemoryStorage::new());
        assert_eq!(store.initialize(), ThemeMode::Light);
        assert!(store.presenter().calls.is_empty());
        assert!(!store.presenter().dark_class);
    }

    #[test]
    fn initialize_with_saved_dark_applies_dark() {
        let mut store = store(MemoryStorage::with_value(THEME_STORAGE_KEY, "dark"));
        assert_eq!(store.initialize(), ThemeMode::Dark);
        assert_eq!(store.presenter().calls, vec!["dark"]);
        assert_eq!(store.presenter().indicator, "☀️");
    }

    #[test]
    fn initialize_with_saved_light_applies_nothing() {
        let mut store = store(MemoryStorage::with_value(THEME_STORAGE_KEY, "light"));
        assert_eq!(store.initialize(), ThemeMode::Light);
        assert!(store.presenter().calls.is_empty());
    }

    #[test]
    fn initialize_with_unavailable_storage_is_light() {
        let mut store = store(MemoryStorage::unavailable());
        assert_eq!(store.initialize(), ThemeMode::Light);
        assert!(store.presenter().calls.is_empty());
    }

    #[test]
    fn toggle_from_light_persists_dark() {
        let mut store = store(MemoryStorage::new());
        store.initialize();

        assert_eq!(store.toggle(), ThemeMode::Dark);
        assert_eq!(store.storage().peek(THEME_STORAGE_KEY), Some("dark"));
        assert!(store.presenter().dark_class);
        assert_eq!(store.presenter().indicator, "☀️");
    }

    #[test]
    fn toggle_from_dark_persists_light() {
        let mut store = store(MemoryStorage::with_value(THEME_STORAGE_KEY, "dark"));
        store.initialize();

        assert_eq!(store.toggle(), ThemeMode::Light);
        assert_eq!(store.storage().peek(THEME_STORAGE_KEY), Some("light"));
        assert!(!store.presenter().dark_class);
        assert_eq!(store.presenter().indicator, "🌙");
    }

    #[test]
    fn double_toggle_restores_mode() {
        for saved in [None, Some("dark"), Some("light")] {
            let storage = match saved {
                Some(v) => MemoryStorage::with_value(THEME_STORAGE_KEY, v),
                None => MemoryStorage::new(),
            };
            let mut store = store(storage);
            let initial = store.initialize();

            store.toggle();
            store.toggle();

            assert_eq!(store.mode(), initial);
            assert_eq!(store.presenter().dark_class, initial.is_dark());
        }
    }

    #[test]
    fn toggle_survives_failed_write() {
        let mut store = store(MemoryStorage::unavailable());
        store.initialize();

        assert_eq!(store.toggle(), ThemeMode::Dark);
        assert!(store.presenter().dark_class);
        assert_eq!(store.mode(), ThemeMode::Dark);
    }
}
