//! Site header with section links, theme toggle and mobile menu button.

use dioxus::prelude::*;

use super::theme::ThemeToggle;
use crate::selectors::{MENU_TOGGLE_CLASS, NAV_LINKS};

#[derive(Props, Clone, PartialEq)]
pub struct HeaderProps {
    /// Site name shown at the left
    pub brand: String,
}

#[component]
pub fn Header(props: HeaderProps) -> Element {
    rsx! {
        header { class: "site-header",
            div { class: "container",
                a { class: "brand", href: "#top", "{props.brand}" }
                nav {
                    ul {
                        for (href, label) in NAV_LINKS.iter() {
                            li {
                                a { href: "{href}", "{label}" }
                            }
                        }
                    }
                }
                ThemeToggle {}
                // Hamburger bars, visible on narrow screens only
                button {
                    class: MENU_TOGGLE_CLASS,
                    r#type: "button",
                    "aria-label": "Toggle navigation",
                    span {}
                    span {}
                    span {}
                }
            }
        }
    }
}
