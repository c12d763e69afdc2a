//! Shared helpers for router tests.

#![allow(dead_code)]

use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use parrot_api::{AppState, config::ApiConfig};
use tower::ServiceExt;

/// Router with the canned provider and the given delay.
pub fn app_with_delay(delay: Duration) -> Router {
    parrot_api::router(AppState::new(ApiConfig {
        bind_addr: "127.0.0.1:0".into(),
        response_delay: delay,
        openai_api_key: None,
    }))
}

/// Router that answers immediately.
pub fn app() -> Router {
    app_with_delay(Duration::ZERO)
}

/// Sends `POST /api/chat` with a JSON body (or no body at all).
pub async fn post_chat(app: Router, body: Option<&str>) -> (StatusCode, serde_json::Value) {
    let builder = Request::builder().method("POST").uri("/api/chat");
    let req = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    send(app, req).await
}

pub async fn get_health(app: Router) -> (StatusCode, serde_json::Value) {
    let req = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    send(app, req).await
}

pub async fn send(app: Router, req: Request<Body>) -> (StatusCode, serde_json::Value) {
    let resp = app.oneshot(req).await.expect("request");
    let status = resp.status();

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json = serde_json::from_slice(&body).expect("parse JSON");

    (status, json)
}
