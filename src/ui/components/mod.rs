//! Shared UI components for the server-rendered page.

pub mod layout;
pub mod nav;
pub mod theme;

pub use layout::Layout;
pub use nav::Header;
pub use theme::ThemeToggle;
