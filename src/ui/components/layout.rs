//! Layout component wrapping the page with head, header and footer.

use dioxus::prelude::*;

use super::nav::Header;

/// Loads the wasm behavior layer built into /pkg.
const WASM_BOOTSTRAP: &str = r#"
import init from '/pkg/portfolio_site.js';
init().catch((e) => console.error('Failed to start site scripts:', e));
"#;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Site owner, used for the header brand and footer
    pub owner: String,
    /// Page content
    pub children: Element,
}

/// Main layout component wrapping the page.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = env!("PORTFOLIO_VERSION");

    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{props.title} - {props.owner}" }
            link { rel: "stylesheet", href: "/assets/site.css" }
        }
        body {
            Header { brand: props.owner.clone() }
            main {
                {props.children}
            }
            footer { class: "site-footer",
                div { class: "container",
                    small { "© {props.owner} · v{version}" }
                }
            }
            script { r#type: "module", dangerous_inner_html: WASM_BOOTSTRAP }
        }
    }
}
