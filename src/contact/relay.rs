//! Server-side client for the hosted form relay.
//!
//! The access key lives in server config and is added here, so the browser
//! only ever talks to this site's own `/contact` route.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;

use super::form::{ContactError, ContactSubmission, FormRelay, RelayRequest, RelayResponse};

const RELAY_TIMEOUT: Duration = Duration::from_secs(10);

pub struct Web3FormsRelay {
    client: Client,
    endpoint: String,
    access_key: String,
}

impl Web3FormsRelay {
    pub fn new(endpoint: impl Into<String>, access_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(RELAY_TIMEOUT).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            access_key: access_key.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST the submission plus access key and decode the relay's verdict.
    pub async fn forward(
        &self,
        submission: &ContactSubmission,
    ) -> Result<RelayResponse, ContactError> {
        let body = RelayRequest {
            access_key: &self.access_key,
            submission,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ContactError::Network(e.to_string()))?;

        let status = response.status();
        match response.json::<RelayResponse>().await {
            Ok(reply) => {
                tracing::debug!(
                    "Relay answered {} (success: {})",
                    status,
                    reply.success
                );
                Ok(reply)
            }
            Err(e) if status.is_success() => Err(ContactError::Network(format!(
                "unreadable relay response: {e}"
            ))),
            Err(_) => Err(ContactError::Rejected(status.to_string())),
        }
    }
}

#[async_trait]
impl FormRelay for Web3FormsRelay {
    async fn submit(&self, submission: &ContactSubmission) -> Result<RelayResponse, ContactError> {
        self.forward(submission).await
    }
}
