//! Wire types for the chat round trip.

use serde::{Deserialize, Serialize};

use crate::error::ChatError;
use crate::message::MessageFormat;

/// Error text returned when a chat request carries no message.
pub const MESSAGE_REQUIRED: &str = "Message is required";

/// `POST /api/chat` request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// Returns the message if present and non-empty.
    ///
    /// Whitespace-only messages are accepted here; trimming is a client
    /// concern.
    pub fn validate(&self) -> Result<&str, ChatError> {
        match self.message.as_deref() {
            Some(message) if !message.is_empty() => Ok(message),
            _ => Err(ChatError::Validation(MESSAGE_REQUIRED.to_string())),
        }
    }
}

/// `POST /api/chat` success body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub format: MessageFormat,
}

impl ChatResponse {
    pub fn markdown(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            format: MessageFormat::Markdown,
        }
    }
}

/// JSON body of every non-success response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// `GET /health` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
