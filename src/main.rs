//! Portfolio Site - HTTP server
//!
//! Serves the rendered portfolio page, its stylesheet and wasm bundle, and
//! relays contact form submissions.

use portfolio_site::{api, config, contact};

use anyhow::Result;
use std::net::SocketAddr;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_site=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Starting Portfolio Site v{} ({})",
        env!("PORTFOLIO_VERSION"),
        env!("PORTFOLIO_GIT_SHA")
    );

    // Load configuration
    let config = config::load_config()?;
    tracing::info!("Configuration loaded, port: {}", config.port);

    // Contact relay is optional: without an access key the form answers 503
    let relay = match config.contact.access_key() {
        Some(key) => {
            let relay = contact::Web3FormsRelay::new(config.contact.endpoint.clone(), key)?;
            tracing::info!("Contact relay configured for {}", relay.endpoint());
            Some(relay)
        }
        None => {
            tracing::warn!("No contact access key set; contact form disabled");
            None
        }
    };

    let pkg_dir = config.assets.pkg_dir.clone();
    if !pkg_dir.exists() {
        tracing::warn!(
            "wasm bundle directory {} not found; page will render without scripts",
            pkg_dir.display()
        );
    }

    let state = api::AppState::new(config.site.clone(), relay);

    let app = api::router(state, pkg_dir);

    // Start server with graceful shutdown
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
