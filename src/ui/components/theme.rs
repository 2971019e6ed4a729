//! Dark mode toggle button.

use dioxus::prelude::*;

use crate::selectors::THEME_TOGGLE_ID;
use crate::theme::ThemeMode;

/// Toggle button rendered in the light state; the browser layer switches it
/// to dark on load when a dark preference is saved.
#[component]
pub fn ThemeToggle() -> Element {
    let indicator = ThemeMode::default().indicator();

    rsx! {
        button {
            id: THEME_TOGGLE_ID,
            r#type: "button",
            "aria-label": "Toggle dark mode",
            "{indicator}"
        }
    }
}
