//! Converts handler panics into `500` JSON responses.
//!
//! Installed with `CatchPanicLayer::custom`, so a panic inside one request
//! unwinds only that request's future and the server keeps serving.

use std::any::Any;

use axum::response::{IntoResponse, Response};

use crate::error::AppError;

/// Builds the response for a caught panic, carrying the panic message as
/// `details`.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };
    AppError::internal(details).into_response()
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    #[test]
    fn string_payload_becomes_details() {
        let resp = panic_response(Box::new(String::from("index out of bounds")));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn opaque_payload_still_answers() {
        let resp = panic_response(Box::new(42_u8));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
