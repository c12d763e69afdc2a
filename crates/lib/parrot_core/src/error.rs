//! Chat error taxonomy shared by the client and the backend.

use thiserror::Error;

/// Errors produced anywhere along the chat round trip.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    /// Bad or missing request field. User-correctable.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Unexpected server fault. `details` is diagnostic text for operators.
    #[error("{message}: {details}")]
    Internal { message: String, details: String },

    /// Client-side transport failure (connect, DNS, body decode).
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status and an error body.
    #[error("Server returned {status}: {message}")]
    Server { status: u16, message: String },
}

impl ChatError {
    /// Builds an [`ChatError::Internal`] from a generic message and detail.
    pub fn internal(message: impl Into<String>, details: impl Into<String>) -> Self {
        ChatError::Internal {
            message: message.into(),
            details: details.into(),
        }
    }
}
