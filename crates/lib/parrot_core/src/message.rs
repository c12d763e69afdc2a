//! Conversation entries.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How a message body should be interpreted when rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageFormat {
    /// Verbatim text, whitespace preserved.
    #[default]
    Text,
    /// GFM-class markdown.
    Markdown,
}

impl MessageFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageFormat::Text => "text",
            MessageFormat::Markdown => "markdown",
        }
    }
}

impl std::str::FromStr for MessageFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(MessageFormat::Text),
            "markdown" => Ok(MessageFormat::Markdown),
            other => Err(format!("unknown message format: {other}")),
        }
    }
}

/// A single conversation entry. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    id: String,
    content: String,
    is_user: bool,
    /// Creation time, epoch milliseconds.
    timestamp: i64,
    format: MessageFormat,
}

impl Message {
    /// A message typed by the user. Always plain text.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(content.into(), true, MessageFormat::Text)
    }

    /// A reply from the backend, in the format the backend declared.
    pub fn bot(content: impl Into<String>, format: MessageFormat) -> Self {
        Self::new(content.into(), false, format)
    }

    fn new(content: String, is_user: bool, format: MessageFormat) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            content,
            is_user,
            timestamp: Utc::now().timestamp_millis(),
            format,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_user(&self) -> bool {
        self.is_user
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn format(&self) -> MessageFormat {
        self.format
    }
}
