//! # parrot_core
//!
//! Core domain logic for Parrot: the conversation model shared by the chat
//! client and the mock backend, the canned response pool, and rendering.

pub mod canned;
pub mod chat;
pub mod error;
pub mod message;
pub mod preference;
#[cfg(feature = "runtime")]
pub mod provider;
pub mod render;
pub mod store;

pub use chat::{ChatRequest, ChatResponse, ErrorBody, HealthStatus};
pub use error::ChatError;
pub use message::{Message, MessageFormat};
pub use store::{ChatTransport, MessageStore, SubmitOutcome};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_not_empty() {
        assert!(!version().is_empty());
    }
}
