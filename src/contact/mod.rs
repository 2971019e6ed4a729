//! Contact section: copy-email button and the contact form.
//!
//! - `clipboard` - copy the owner's address, with a selection-based fallback
//! - `form` - validate and submit messages through a form relay
//! - `relay` - server-side client for the hosted relay API (server only)

pub mod clipboard;
pub mod form;
#[cfg(feature = "server")]
pub mod relay;

pub use clipboard::{
    Clipboard, ClipboardError, CopyOutcome, EmailCopier, FallbackCopy, FEEDBACK_DURATION,
};
pub use form::{
    ContactError, ContactForm, ContactSubmission, FormRelay, FormStatus, RelayRequest,
    RelayResponse, CONTACT_ROUTE, DEFAULT_RELAY_ENDPOINT, GENERIC_FAILURE, NETWORK_FAILURE,
};
#[cfg(feature = "server")]
pub use relay::Web3FormsRelay;
