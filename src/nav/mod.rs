//! Header navigation: collapsible mobile menu and in-page smooth scrolling.

/// Class toggled on the menu button and the nav while the menu is open
pub const ACTIVE_CLASS: &str = "active";

/// Shows or hides the mobile menu.
pub trait MenuPresenter {
    fn set_open(&mut self, open: bool);
}

/// Mobile menu state, closed at startup.
pub struct MobileMenu<P> {
    open: bool,
    presenter: P,
}

impl<P: MenuPresenter> MobileMenu<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            open: false,
            presenter,
        }
    }

    /// Menu button clicked
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.presenter.set_open(self.open);
        self.open
    }

    /// A nav link was followed
    pub fn close(&mut self) {
        self.open = false;
        self.presenter.set_open(false);
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }
}

/// Scrolls the page to an element by id.
pub trait ScrollPort {
    /// Smooth-scroll the element into view. Returns false if no such element.
    fn scroll_into_view(&mut self, id: &str) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollOutcome {
    Scrolled,
    MissingTarget,
    NotAnAnchor,
}

/// Fragment id of an in-page link (`"#about"` -> `"about"`).
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Handle a click on an in-page link.
///
/// Callers suppress the browser's jump for every `#` link, including ones
/// whose target is missing.
pub fn smooth_scroll<S: ScrollPort>(port: &mut S, href: &str) -> ScrollOutcome {
    let Some(id) = anchor_target(href) else {
        return ScrollOutcome::NotAnAnchor;
    };

    if port.scroll_into_view(id) {
        ScrollOutcome::Scrolled
    } else {
        tracing::debug!("No scroll target for {}", href);
        ScrollOutcome::MissingTarget
    }
}
