//! Portfolio Site
//!
//! Personal portfolio website: a server-rendered single page plus the
//! browser behavior layer that runs on it.
//!
//! This library provides:
//! - Light/dark theme preference, persisted across visits
//! - Mobile navigation menu and smooth in-page scrolling
//! - Copy-to-clipboard for the contact address
//! - Contact form submission through a hosted form relay
//! - HTTP server and Dioxus SSR page (`server` feature)
//! - web-sys adapters wiring it all to the DOM (wasm32 only)

pub mod contact;
pub mod nav;
pub mod selectors;
pub mod theme;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod ui;

#[cfg(target_arch = "wasm32")]
pub mod web;
