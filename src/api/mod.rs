//! HTTP API handlers

use crate::config::SiteConfig;
use crate::contact::{
    ContactError, ContactSubmission, RelayResponse, Web3FormsRelay, CONTACT_ROUTE,
};
use crate::ui;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};

/// Stylesheet served at /assets/site.css
pub const SITE_CSS: &str = include_str!("../../assets/site.css");

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub site: Arc<SiteConfig>,
    /// None when no relay access key is configured
    pub relay: Option<Arc<Web3FormsRelay>>,
    pub started: Instant,
}

impl AppState {
    pub fn new(site: SiteConfig, relay: Option<Web3FormsRelay>) -> Self {
        Self {
            site: Arc::new(site),
            relay: relay.map(Arc::new),
            started: Instant::now(),
        }
    }
}

/// Build the site router; `pkg_dir` holds the wasm bundle served at /pkg
pub fn router(state: AppState, pkg_dir: PathBuf) -> Router {
    Router::new()
        // Page
        .route("/", get(ui::home_page))
        // Health check
        .route("/status", get(status_handler))
        // Assets
        .route("/assets/site.css", get(stylesheet_handler))
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        // Contact form relay
        .route(CONTACT_ROUTE, post(contact_handler))
        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub version: &'static str,
    pub git_sha: &'static str,
    pub uptime_secs: u64,
    pub contact_enabled: bool,
}

/// GET /status - Health check
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        version: env!("PORTFOLIO_VERSION"),
        git_sha: env!("PORTFOLIO_GIT_SHA"),
        uptime_secs: state.started.elapsed().as_secs(),
        contact_enabled: state.relay.is_some(),
    })
}

/// GET /assets/site.css
pub async fn stylesheet_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        SITE_CSS,
    )
}

/// POST /contact - Forward a contact form submission to the relay
pub async fn contact_handler(
    State(state): State<AppState>,
    Json(submission): Json<ContactSubmission>,
) -> (StatusCode, Json<RelayResponse>) {
    if let Err(e) = submission.validate() {
        return (StatusCode::BAD_REQUEST, Json(RelayResponse::failure(e.to_string())));
    }

    let Some(relay) = state.relay.as_ref() else {
        tracing::warn!("Contact submission received but no relay access key is configured");
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(RelayResponse::failure(ContactError::NotConfigured.to_string())),
        );
    };

    match relay.forward(&submission).await {
        Ok(reply) => {
            if reply.success {
                tracing::debug!("Contact message relayed");
            } else {
                tracing::warn!("Relay declined contact message: {:?}", reply.message);
            }
            (StatusCode::OK, Json(reply))
        }
        Err(e) => {
            tracing::error!("Contact relay failed: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(RelayResponse::failure(e.user_message())),
            )
        }
    }
}
