//! Liveness probe.

use axum::Json;
use parrot_core::HealthStatus;

/// `GET /health`: reports the process is up. Touches no state.
pub async fn health_handler() -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}
