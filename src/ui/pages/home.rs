//! Single-page portfolio: hero, about, projects and contact sections.

use dioxus::prelude::*;

use crate::config::{ProjectConfig, SiteConfig};
use crate::selectors::{CONTACT_FORM_ID, COPY_EMAIL_ID, FORM_STATUS_ID};
use crate::ui::components::Layout;

#[derive(Props, Clone, PartialEq)]
pub struct HomePageProps {
    pub site: SiteConfig,
}

#[component]
pub fn HomePage(props: HomePageProps) -> Element {
    let site = props.site;

    rsx! {
        Layout {
            title: site.title.clone(),
            owner: site.owner.clone(),

            section { id: "top", class: "hero container",
                h1 { "{site.owner}" }
                p { "{site.tagline}" }
            }

            section { id: "about", class: "container",
                h2 { "About" }
                p { "{site.about}" }
            }

            section { id: "projects", class: "container",
                h2 { "Projects" }
                if site.projects.is_empty() {
                    p { "Projects coming soon." }
                } else {
                    ul { class: "project-grid",
                        for project in site.projects.iter() {
                            ProjectCard { key: "{project.name}", project: project.clone() }
                        }
                    }
                }
            }

            ContactSection { email: site.email.clone() }
        }
    }
}

#[component]
fn ProjectCard(project: ProjectConfig) -> Element {
    rsx! {
        li { class: "project-card",
            h3 { "{project.name}" }
            p { "{project.description}" }
            if let Some(url) = &project.url {
                a { href: "{url}", target: "_blank", rel: "noopener", "View project" }
            }
        }
    }
}

#[component]
fn ContactSection(email: String) -> Element {
    rsx! {
        section { id: "contact", class: "container",
            h2 { "Contact" }
            div { class: "email-row",
                a { href: "mailto:{email}", "{email}" }
                button {
                    id: COPY_EMAIL_ID,
                    r#type: "button",
                    "data-email": "{email}",
                    "Copy email"
                }
            }

            form { id: CONTACT_FORM_ID,
                input { r#type: "text", name: "name", placeholder: "Your name", required: true }
                input { r#type: "email", name: "email", placeholder: "Your email", required: true }
                input { r#type: "text", name: "subject", placeholder: "Subject", required: true }
                textarea { name: "message", rows: "6", placeholder: "Message", required: true }
                button { r#type: "submit", "Send message" }
                p { id: FORM_STATUS_ID, class: "form-status", "aria-live": "polite" }
            }
        }
    }
}
