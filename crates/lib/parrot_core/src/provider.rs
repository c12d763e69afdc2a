//! Completion providers: where chat replies come from.
//!
//! The mock backend only ever uses [`CannedProvider`]. A real inference
//! client would implement [`CompletionProvider`] and be swapped in behind
//! the same handler.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::canned::CannedPool;
use crate::error::ChatError;

/// Default simulated processing time.
pub const DEFAULT_RESPONSE_DELAY: Duration = Duration::from_millis(500);

/// Produces a markdown reply for a prompt.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ChatError>;
}

/// Answers every prompt with a random canned document after a fixed delay.
#[derive(Debug, Clone)]
pub struct CannedProvider {
    pool: CannedPool,
    delay: Duration,
}

impl CannedProvider {
    pub fn new(pool: CannedPool, delay: Duration) -> Self {
        Self { pool, delay }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self::new(CannedPool::default(), delay)
    }

    pub fn pool(&self) -> &CannedPool {
        &self.pool
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for CannedProvider {
    fn default() -> Self {
        Self::with_delay(DEFAULT_RESPONSE_DELAY)
    }
}

#[async_trait]
impl CompletionProvider for CannedProvider {
    async fn generate(&self, prompt: &str) -> Result<String, ChatError> {
        // Pick before sleeping: the thread RNG must not live across an await.
        let document = self.pool.pick().ok_or_else(|| {
            ChatError::internal("Internal server error", "canned response pool is empty")
        })?;

        debug!(
            prompt_len = prompt.len(),
            delay_ms = self.delay.as_millis() as u64,
            "selected canned response"
        );
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        Ok(document.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canned::CANNED_RESPONSES;

    #[tokio::test(start_paused = true)]
    async fn canned_provider_waits_the_configured_delay() {
        let provider = CannedProvider::default();
        let started = tokio::time::Instant::now();

        let reply = provider.generate("hello").await.expect("reply");

        assert!(started.elapsed() >= DEFAULT_RESPONSE_DELAY);
        assert!(CANNED_RESPONSES.contains(&reply.as_str()));
    }

    #[tokio::test]
    async fn zero_delay_replies_immediately() {
        let provider = CannedProvider::with_delay(Duration::ZERO);
        let reply = provider.generate("hi").await.expect("reply");
        assert!(provider.pool().contains(&reply));
    }

    #[tokio::test]
    async fn empty_pool_is_an_internal_error() {
        let provider = CannedProvider::new(CannedPool::new(&[]), Duration::ZERO);
        let err = provider.generate("hi").await.unwrap_err();
        assert!(matches!(err, ChatError::Internal { .. }));
    }

    #[tokio::test]
    async fn usable_as_trait_object() {
        let provider: std::sync::Arc<dyn CompletionProvider> =
            std::sync::Arc::new(CannedProvider::with_delay(Duration::ZERO));
        assert!(provider.generate("x").await.is_ok());
    }
}
