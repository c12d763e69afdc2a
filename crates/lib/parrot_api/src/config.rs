//! API server configuration.

use std::fmt;
use std::time::Duration;

use parrot_core::provider::DEFAULT_RESPONSE_DELAY;
use tracing::warn;

/// Default listening port. Kept apart from the usual front-end dev ports.
pub const DEFAULT_PORT: u16 = 3001;
/// Default listening interface.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Configuration for the API server.
#[derive(Clone)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "0.0.0.0:3001").
    pub bind_addr: String,
    /// Simulated processing time before each chat reply.
    pub response_delay: Duration,
    /// Credential for a real inference provider. Carried, never used by the
    /// canned provider.
    pub openai_api_key: Option<String>,
}

impl ApiConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable                   | Default   |
    /// |----------------------------|-----------|
    /// | `PORT`                     | `3001`    |
    /// | `BIND_HOST`                | `0.0.0.0` |
    /// | `PARROT_RESPONSE_DELAY_MS` | `500`     |
    /// | `OPENAI_API_KEY`           | unset     |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads variables through
    /// `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("BIND_HOST").unwrap_or_else(|| DEFAULT_HOST.into());
        let port = match lookup("PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(value = %raw, "invalid PORT, using default");
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };
        let response_delay = match lookup("PARROT_RESPONSE_DELAY_MS") {
            Some(raw) => raw.parse().map(Duration::from_millis).unwrap_or_else(|_| {
                warn!(value = %raw, "invalid PARROT_RESPONSE_DELAY_MS, using default");
                DEFAULT_RESPONSE_DELAY
            }),
            None => DEFAULT_RESPONSE_DELAY,
        };

        Self {
            bind_addr: join_host_port(&host, port),
            response_delay,
            openai_api_key: lookup("OPENAI_API_KEY").filter(|k| !k.is_empty()),
        }
    }
}

/// `host:port`, bracketing IPv6 literals (`::` becomes `[::]:port`).
pub fn join_host_port(host: &str, port: u16) -> String {
    if host.contains(':') && !host.starts_with('[') {
        format!("[{host}]:{port}")
    } else {
        format!("{host}:{port}")
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: format!("{DEFAULT_HOST}:{DEFAULT_PORT}"),
            response_delay: DEFAULT_RESPONSE_DELAY,
            openai_api_key: None,
        }
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("bind_addr", &self.bind_addr)
            .field("response_delay", &self.response_delay)
            .field(
                "openai_api_key",
                &self.openai_api_key.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}
