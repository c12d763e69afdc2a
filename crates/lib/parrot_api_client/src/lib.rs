//! # parrot_api_client
//!
//! HTTP client for the Parrot chat API. [`HttpChatClient`] implements
//! [`ChatTransport`], so a [`MessageStore`](parrot_core::MessageStore) can
//! talk to a running backend directly.

use async_trait::async_trait;
use parrot_core::{ChatError, ChatRequest, ChatResponse, ChatTransport, ErrorBody, HealthStatus};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Backend address used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

const CHAT_PATH: &str = "api/chat";
const HEALTH_PATH: &str = "health";

/// Errors raised while constructing a client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid base URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Unsupported URL scheme '{0}', expected http or https")]
    UnsupportedScheme(String),
}

/// Chat API client over a shared `reqwest` connection pool.
#[derive(Debug, Clone)]
pub struct HttpChatClient {
    http: Client,
    base_url: Url,
}

impl HttpChatClient {
    /// Parses `base_url` and builds a client with a fresh connection pool.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_client(Client::new(), base_url)
    }

    /// Same as [`new`](Self::new) but reuses an existing `reqwest` client.
    pub fn with_client(http: Client, base_url: &str) -> Result<Self, ClientError> {
        let mut parsed = Url::parse(base_url).map_err(|source| ClientError::InvalidUrl {
            url: base_url.to_string(),
            source,
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::UnsupportedScheme(parsed.scheme().to_string()));
        }
        // Relative joins drop the last path segment unless it ends in '/'.
        if !parsed.path().ends_with('/') {
            let path = format!("{}/", parsed.path());
            parsed.set_path(&path);
        }
        Ok(Self {
            http,
            base_url: parsed,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ChatError> {
        self.base_url
            .join(path)
            .map_err(|e| ChatError::Network(format!("invalid endpoint {path}: {e}")))
    }

    /// `POST /api/chat`.
    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ChatError> {
        let url = self.endpoint(CHAT_PATH)?;
        debug!(%url, "sending chat request");

        let resp = self
            .http
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| ChatError::Network(format!("chat request failed: {e}")))?;

        decode(resp).await
    }

    /// `GET /health`.
    pub async fn health(&self) -> Result<HealthStatus, ChatError> {
        let url = self.endpoint(HEALTH_PATH)?;

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ChatError::Network(format!("health request failed: {e}")))?;

        decode(resp).await
    }
}

/// Decodes a success body as `T`, or turns an error status into
/// [`ChatError::Server`] using the server's [`ErrorBody`] when it sent one.
async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ChatError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ErrorBody>(&body) {
            Ok(ErrorBody {
                error,
                details: Some(details),
            }) => format!("{error} ({details})"),
            Ok(ErrorBody { error, .. }) => error,
            Err(_) if !body.is_empty() => body,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_string(),
        };
        return Err(ChatError::Server {
            status: status.as_u16(),
            message,
        });
    }

    resp.json()
        .await
        .map_err(|e| ChatError::Network(format!("response parse error: {e}")))
}

#[async_trait]
impl ChatTransport for HttpChatClient {
    async fn send(&self, request: ChatRequest) -> Result<ChatResponse, ChatError> {
        self.chat(&request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gains_trailing_slash() {
        let client = HttpChatClient::new("http://localhost:3001").unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:3001/");
    }

    #[test]
    fn endpoints_resolve_under_a_path_prefix() {
        let client = HttpChatClient::new("http://example.com/proxy").unwrap();
        assert_eq!(
            client.endpoint(CHAT_PATH).unwrap().as_str(),
            "http://example.com/proxy/api/chat"
        );
        assert_eq!(
            client.endpoint(HEALTH_PATH).unwrap().as_str(),
            "http://example.com/proxy/health"
        );
    }

    #[test]
    fn rejects_garbage_url() {
        let err = HttpChatClient::new("not a url").unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl { .. }));
    }

    #[test]
    fn rejects_non_http_scheme() {
        let err = HttpChatClient::new("ftp://example.com").unwrap_err();
        assert!(matches!(err, ClientError::UnsupportedScheme(s) if s == "ftp"));
    }
}
