//! Liveness probe.

use axum::{routing::get, Json, Router};

use super::dto::HealthResponse;
use super::state::AppState;

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
