//! # parrot_api
//!
//! HTTP API library for Parrot: the mock chat endpoint and liveness probe.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use parrot_core::provider::{CannedProvider, CompletionProvider};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ApiConfig;
use crate::handlers::{chat, health};

/// Shared application state passed to all handlers.
///
/// Holds only immutable configuration, so requests never contend on it.
#[derive(Clone)]
pub struct AppState {
    /// API configuration.
    pub config: ApiConfig,
    /// Source of chat replies.
    pub provider: Arc<dyn CompletionProvider>,
}

impl AppState {
    /// State backed by the canned provider with the configured delay.
    pub fn new(config: ApiConfig) -> Self {
        let provider = Arc::new(CannedProvider::with_delay(config.response_delay));
        Self::with_provider(config, provider)
    }

    pub fn with_provider(config: ApiConfig, provider: Arc<dyn CompletionProvider>) -> Self {
        Self { config, provider }
    }
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Request span and completion line (status, latency) at info.
    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route(routes::POST_API_CHAT, post(chat::chat_handler))
        .route(routes::GET_HEALTH, get(health::health_handler))
        .layer(CatchPanicLayer::custom(middleware::panic::panic_response))
        .layer(trace)
        .layer(cors)
        .with_state(state)
}
