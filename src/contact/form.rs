//! Contact form submission through a hosted form relay.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Hosted relay that turns form posts into email
pub const DEFAULT_RELAY_ENDPOINT: &str = "https://api.web3forms.com/submit";

/// Route on this site that forwards submissions to the relay
pub const CONTACT_ROUTE: &str = "/contact";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in the {0} field")]
    MissingField(&'static str),

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Contact form is not configured")]
    NotConfigured,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Relay rejected the submission: {0}")]
    Rejected(String),
}

impl ContactError {
    /// Text shown to the visitor. Relay and transport details stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            ContactError::Network(_) => NETWORK_FAILURE.into(),
            ContactError::Rejected(_) => GENERIC_FAILURE.into(),
            other => other.to_string(),
        }
    }
}

pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";
pub const NETWORK_FAILURE: &str = "Network error. Please try again later.";

/// `local@domain.tld` with no whitespace and a single `@`
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s.][^@\s]*\.[^@\s.]+$").expect("email pattern is valid")
});

/// Fields entered by the visitor
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    /// All fields are required; the email must look like `local@domain.tld`.
    pub fn validate(&self) -> Result<(), ContactError> {
        let fields = [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }

        if !looks_like_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }
}

fn looks_like_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// JSON body posted to the relay endpoint
#[derive(Debug, Serialize)]
pub struct RelayRequest<'a> {
    pub access_key: &'a str,
    #[serde(flatten)]
    pub submission: &'a ContactSubmission,
}

/// Relay reply; `message` is a human-readable explanation
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct RelayResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RelayResponse {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}

/// Delivers a submission somewhere that sends it on as email.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait FormRelay {
    async fn submit(&self, submission: &ContactSubmission) -> Result<RelayResponse, ContactError>;
}

/// Status line under the form
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(String),
}

impl FormStatus {
    pub fn message(&self) -> &str {
        match self {
            FormStatus::Idle => "",
            FormStatus::Sending => "Sending...",
            FormStatus::Sent => "Thank you! Your message has been sent.",
            FormStatus::Failed(reason) => reason,
        }
    }

    /// Class for styling the status line
    pub fn class(&self) -> &'static str {
        match self {
            FormStatus::Idle => "form-status",
            FormStatus::Sending => "form-status sending",
            FormStatus::Sent => "form-status success",
            FormStatus::Failed(_) => "form-status error",
        }
    }

    pub fn is_sending(&self) -> bool {
        matches!(self, FormStatus::Sending)
    }
}

/// Contact form driving a [`FormRelay`]; one attempt per submit, no retries.
pub struct ContactForm<R> {
    relay: R,
    status: FormStatus,
}

impl<R: FormRelay> ContactForm<R> {
    pub fn new(relay: R) -> Self {
        Self {
            relay,
            status: FormStatus::Idle,
        }
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// Mark the form busy before the async submit starts
    pub fn begin(&mut self) {
        self.status = FormStatus::Sending;
    }

    pub async fn submit(&mut self, submission: &ContactSubmission) -> &FormStatus {
        if let Err(e) = submission.validate() {
            self.status = FormStatus::Failed(e.to_string());
            return &self.status;
        }

        self.status = FormStatus::Sending;
        self.status = match self.relay.submit(submission).await {
            Ok(response) if response.success => FormStatus::Sent,
            Ok(response) => {
                tracing::warn!("Relay declined submission: {:?}", response.message);
                FormStatus::Failed(response.message.unwrap_or_else(|| GENERIC_FAILURE.into()))
            }
            Err(e) => {
                tracing::warn!("Contact submission failed: {}", e);
                FormStatus::Failed(e.user_message())
            }
        };
        &self.status
    }
}
