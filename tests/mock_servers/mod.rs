//! Mock servers for integration testing
//!
//! These simulate external services so the relay client can be exercised
//! without network access.

pub mod relay;

pub use relay::MockRelay;
