//! Persistence port for the theme preference.
//!
//! In the browser this is `localStorage`; tests use [`MemoryStorage`].

use std::collections::HashMap;

use thiserror::Error;

/// Key under which the theme preference is stored
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("persistence unavailable: {0}")]
    Unavailable(String),
}

/// Durable key-value store surviving across sessions.
pub trait PreferenceStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process storage, optionally simulating an unavailable backend.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
    unavailable: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with a single value
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut values = HashMap::new();
        values.insert(key.to_string(), value.to_string());
        Self {
            values,
            unavailable: false,
        }
    }

    /// Storage where every read and write fails (private browsing, quota, etc.)
    pub fn unavailable() -> Self {
        Self {
            values: HashMap::new(),
            unavailable: true,
        }
    }

    /// Raw stored value, bypassing the availability flag
    pub fn peek(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable("storage disabled".into()));
        }
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable("storage disabled".into()));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_round_trips_values() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get(THEME_STORAGE_KEY), Ok(None));

        storage.set(THEME_STORAGE_KEY, "dark").unwrap();
        assert_eq!(storage.get(THEME_STORAGE_KEY), Ok(Some("dark".to_string())));
        assert_eq!(storage.peek(THEME_STORAGE_KEY), Some("dark"));
    }

    #[test]
    fn unavailable_storage_fails_both_ways() {
        let mut storage = MemoryStorage::unavailable();
        assert!(matches!(
            storage.get(THEME_STORAGE_KEY),
            Err(StorageError::Unavailable(_))
        ));
        assert!(storage.set(THEME_STORAGE_KEY, "dark").is_err());
        assert_eq!(storage.peek(THEME_STORAGE_KEY), None);
    }
}
