//! Client-side conversation state.
//!
//! [`MessageStore`] owns the ordered message list and the awaiting-response
//! flag. It is append-only: entries are never reordered or removed.
//!
//! `submit` drives a full round trip. Front ends that need to redraw while
//! a request is outstanding use the two halves directly:
//!
//! ```ignore
//! if let Some(request) = store.begin(text) {
//!     draw_thinking_indicator();
//!     let result = store.transport().send(request).await;
//!     store.finish(result);
//! }
//! ```

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::chat::{ChatRequest, ChatResponse};
use crate::error::ChatError;
use crate::message::Message;

/// Sends one chat request and waits for its reply.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send(&self, request: ChatRequest) -> Result<ChatResponse, ChatError>;
}

#[async_trait]
impl<T: ChatTransport + ?Sized> ChatTransport for std::sync::Arc<T> {
    async fn send(&self, request: ChatRequest) -> Result<ChatResponse, ChatError> {
        (**self).send(request).await
    }
}

/// What a call to [`MessageStore::submit`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input; nothing appended, nothing sent.
    Ignored,
    /// The reply that was appended.
    Answered(Message),
    /// The request failed; only the user entry was appended.
    Failed(ChatError),
}

/// Ordered conversation plus the awaiting-response flag.
#[derive(Debug)]
pub struct MessageStore<T> {
    transport: T,
    messages: Vec<Message>,
    awaiting: bool,
    last_error: Option<ChatError>,
}

impl<T: ChatTransport> MessageStore<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            messages: Vec::new(),
            awaiting: false,
            last_error: None,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// True while a request issued by [`begin`](Self::begin) is outstanding.
    pub fn is_awaiting(&self) -> bool {
        self.awaiting
    }

    /// The most recent failed round trip, cleared by the next success.
    pub fn last_error(&self) -> Option<&ChatError> {
        self.last_error.as_ref()
    }

    /// Appends the user's entry, marks the store awaiting, and returns the
    /// request to send. Returns `None` for blank input.
    ///
    /// Calling `begin` again before [`finish`](Self::finish) is not
    /// prevented here; disabling input while awaiting is the front end's job.
    pub fn begin(&mut self, text: &str) -> Option<ChatRequest> {
        if text.trim().is_empty() {
            return None;
        }
        self.messages.push(Message::user(text));
        self.awaiting = true;
        Some(ChatRequest::new(text))
    }

    /// Records the outcome of the request returned by `begin`.
    pub fn finish(&mut self, result: Result<ChatResponse, ChatError>) -> SubmitOutcome {
        self.awaiting = false;
        match result {
            Ok(reply) => {
                let message = Message::bot(reply.response, reply.format);
                debug!(id = message.id(), "appending reply");
                self.messages.push(message.clone());
                self.last_error = None;
                SubmitOutcome::Answered(message)
            }
            Err(err) => {
                warn!(error = %err, "chat request failed");
                self.last_error = Some(err.clone());
                SubmitOutcome::Failed(err)
            }
        }
    }

    /// Full round trip: `begin`, one request through the transport, `finish`.
    pub async fn submit(&mut self, text: &str) -> SubmitOutcome {
        let Some(request) = self.begin(text) else {
            return SubmitOutcome::Ignored;
        };
        let result = self.transport.send(request).await;
        self.finish(result)
    }
}
