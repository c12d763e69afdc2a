//! Chat request handler.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderMap, header};
use parrot_core::chat::MESSAGE_REQUIRED;
use parrot_core::{ChatRequest, ChatResponse};
use tracing::debug;

use crate::AppState;
use crate::error::{AppError, AppResult};

/// `error` text for request bodies that cannot be parsed at all.
pub const MALFORMED_BODY: &str = "Something broke!";

/// `POST /api/chat`: validate, pick a reply from the provider, wrap it as
/// markdown.
///
/// Validation failures return before the provider is consulted, so they pay
/// no simulated latency.
pub async fn chat_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<Json<ChatResponse>> {
    let request = read_request(&headers, &body)?;
    let message = request.validate()?;

    debug!(message_len = message.len(), "chat request accepted");
    let reply = state.provider.generate(message).await?;

    Ok(Json(ChatResponse::markdown(reply)))
}

/// Decodes the body onto the chat error taxonomy.
///
/// An empty body, or one not declared as JSON, carries no `message` and
/// becomes an empty request, which fails validation. A `message` of the
/// wrong type is a validation failure too. Bytes that do not parse as JSON
/// are a request fault.
fn read_request(headers: &HeaderMap, body: &[u8]) -> AppResult<ChatRequest> {
    if body.is_empty() || !is_json(headers) {
        return Ok(ChatRequest::default());
    }

    match Json::<ChatRequest>::from_bytes(body) {
        Ok(Json(request)) => Ok(request),
        Err(JsonRejection::JsonDataError(e)) => Err(AppError::InvalidBody {
            message: MESSAGE_REQUIRED.to_string(),
            details: e.body_text(),
        }),
        Err(rejection) => Err(AppError::Internal {
            message: MALFORMED_BODY.to_string(),
            details: rejection.body_text(),
        }),
    }
}

/// `application/json` or any `application/*+json` media type.
fn is_json(headers: &HeaderMap) -> bool {
    let Some(value) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };
    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}
