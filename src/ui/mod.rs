//! Web UI handlers - the portfolio page, rendered with Dioxus SSR.
//!
//! - components/ - Shared Dioxus components (layout, header, theme toggle)
//! - pages/ - Page components
//!
//! Interactive behavior (theme, menu, copy, form) is attached in the
//! browser by the wasm build of this crate.

pub mod components;
pub mod pages;

use axum::{
    extract::State,
    response::{Html, IntoResponse},
};
use dioxus::prelude::*;

use crate::api::AppState;
use crate::config::SiteConfig;
use pages::HomePage;

/// Render the full home page document
pub fn render_home(site: &SiteConfig) -> String {
    let site = site.clone();
    let html = dioxus::ssr::render_element(rsx! { HomePage { site } });
    format!("<!DOCTYPE html>\n<html lang=\"en\">\n{}</html>", html)
}

/// GET / - Portfolio home page
pub async fn home_page(State(state): State<AppState>) -> impl IntoResponse {
    Html(render_home(&state.site))
}
