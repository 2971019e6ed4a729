//! Copy-email button.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// How long the copy feedback label stays before the button text returns
pub const FEEDBACK_DURATION: Duration = Duration::from_secs(2);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard API unavailable")]
    Unavailable,

    #[error("clipboard write rejected: {0}")]
    Rejected(String),

    #[error("copy command failed: {0}")]
    CommandFailed(String),
}

/// Asynchronous system clipboard (`navigator.clipboard` in browsers).
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait Clipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Copy by selecting text in a hidden element, for browsers without the
/// async clipboard.
pub trait FallbackCopy {
    fn copy_via_selection(&self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed,
}

impl CopyOutcome {
    /// Temporary button label
    pub fn label(&self) -> &'static str {
        match self {
            CopyOutcome::Copied => "✓ Copied!",
            CopyOutcome::Failed => "✗ Failed",
        }
    }

    /// Temporary button class, if any
    pub fn class(&self) -> Option<&'static str> {
        match self {
            CopyOutcome::Copied => Some("copied"),
            CopyOutcome::Failed => None,
        }
    }
}

/// Copies a fixed email address, preferring the async clipboard.
pub struct EmailCopier<C, F> {
    email: String,
    clipboard: Option<C>,
    fallback: F,
}

impl<C: Clipboard, F: FallbackCopy> EmailCopier<C, F> {
    pub fn new(email: impl Into<String>, clipboard: Option<C>, fallback: F) -> Self {
        Self {
            email: email.into(),
            clipboard,
            fallback,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub async fn copy(&self) -> CopyOutcome {
        if let Some(clipboard) = &self.clipboard {
            match clipboard.write_text(&self.email).await {
                Ok(()) => return CopyOutcome::Copied,
                Err(e) => tracing::debug!("Clipboard write failed, trying fallback: {}", e),
            }
        }

        match self.fallback.copy_via_selection(&self.email) {
            Ok(()) => CopyOutcome::Copied,
            Err(e) => {
                tracing::error!("Failed to copy email: {}", e);
                CopyOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct FakeClipboard {
        result: Result<(), ClipboardError>,
        written: Mutex<Vec<String>>,
    }

    impl FakeClipboard {
        fn new(result: Result<(), ClipboardError>) -> Self {
            Self {
                result,
                written: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Clipboard for FakeClipboard {
        async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            self.written.lock().unwrap().push(text.to_string());
            self.result.clone()
        }
    }

    struct FakeFallback {
        result: Result<(), ClipboardError>,
        used: Mutex<bool>,
    }

    impl FakeFallback {
        fn new(result: Result<(), ClipboardError>) -> Self {
            Self {
                result,
                used: Mutex::new(false),
            }
        }

        fn was_used(&self) -> bool {
            *self.used.lock().unwrap()
        }
    }

    impl FallbackCopy for FakeFallback {
        fn copy_via_selection(&self, _text: &str) -> Result<(), ClipboardError> {
            *self.used.lock().unwrap() = true;
            self.result.clone()
        }
    }

    const EMAIL: &str = "hello@example.com";

    #[test]
    fn clipboard_success_skips_fallback() {
        let copier = EmailCopier::new(
            EMAIL,
            Some(FakeClipboard::new(Ok(()))),
            FakeFallback::new(Ok(())),
        );

        let outcome = tokio_test::block_on(copier.copy());

        assert_eq!(outcome, CopyOutcome::Copied);
        assert!(!copier.fallback.was_used());
        let clipboard = copier.clipboard.as_ref().unwrap();
        assert_eq!(*clipboard.written.lock().unwrap(), vec![EMAIL.to_string()]);
    }

    #[test]
    fn rejected_clipboard_falls_back() {
        let copier = EmailCopier::new(
            EMAIL,
            Some(FakeClipboard::new(Err(ClipboardError::Rejected(
                "NotAllowedError".into(),
            )))),
            FakeFallback::new(Ok(())),
        );

        assert_eq!(tokio_test::block_on(copier.copy()), CopyOutcome::Copied);
        assert!(copier.fallback.was_used());
    }

    #[test]
    fn missing_clipboard_uses_fallback() {
        let copier: EmailCopier<FakeClipboard, _> =
            EmailCopier::new(EMAIL, None, FakeFallback::new(Ok(())));

        assert_eq!(tokio_test::block_on(copier.copy()), CopyOutcome::Copied);
        assert!(copier.fallback.was_used());
    }

    #[test]
    fn failing_fallback_reports_failure() {
        let copier: EmailCopier<FakeClipboard, _> = EmailCopier::new(
            EMAIL,
            None,
            FakeFallback::new(Err(ClipboardError::CommandFailed("denied".into()))),
        );

        let outcome = tokio_test::block_on(copier.copy());
        assert_eq!(outcome, CopyOutcome::Failed);
        assert_eq!(outcome.label(), "✗ Failed");
        assert_eq!(outcome.class(), None);
    }

    #[test]
    fn copied_feedback_adds_class() {
        assert_eq!(CopyOutcome::Copied.label(), "✓ Copied!");
        assert_eq!(CopyOutcome::Copied.class(), Some("copied"));
        assert_eq!(FEEDBACK_DURATION, Duration::from_millis(2000));
    }
}
