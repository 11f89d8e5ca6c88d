//! Liveness probe.

use axum::routing::get;
use axum::{Json, Router};
use kitten_core::responses::HealthResponse;

pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
