#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Mock form relay
//!
//! Accepts JSON posts on /submit and answers like the hosted relay:
//! `{"success": bool, "message": "..."}`. /broken answers 500 with plain text.

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

#[derive(Clone)]
struct MockState {
    access_key: &'static str,
    received: Arc<Mutex<Vec<Value>>>,
}

/// Mock relay server
pub struct MockRelay {
    addr: SocketAddr,
    received: Arc<Mutex<Vec<Value>>>,
    handle: JoinHandle<()>,
}

impl MockRelay {
    /// Start a mock relay on a random port that accepts `access_key`
    pub async fn start(access_key: &'static str) -> Self {
        let received = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            access_key,
            received: received.clone(),
        };

        let app = Router::new()
            .route("/submit", post(handle_submit))
            .route(
                "/broken",
                post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded") }),
            )
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            received,
            handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Bodies received on /submit so far
    pub async fn received(&self) -> Vec<Value> {
        self.received.lock().await.clone()
    }
}

impl Drop for MockRelay {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn handle_submit(
    State(state): State<MockState>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.received.lock().await.push(body.clone());

    if body["access_key"] != state.access_key {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "success": false, "message": "Invalid access key" })),
        );
    }

    (
        StatusCode::OK,
        Json(json!({ "success": true, "message": "Email sent successfully!" })),
    )
}
