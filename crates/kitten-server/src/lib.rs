//! # kitten-server
//!
//! HTTP surface for Kitten Weights.
//!
//! Handlers parse path, query and body input, validate it into the storage
//! input types from `kitten-db`, call the record access layer on the shared
//! [`KittenService`], and map outcomes onto status codes. Every error body is
//! `{"error": "..."}`.

pub mod error;
pub mod requests;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::http::HeaderValue;
use kitten_config::ServerConfig;
use kitten_db::service::KittenService;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// State shared by every handler.
pub struct AppState {
    pub service: Arc<KittenService>,
    /// Size of the recent-weights feed when the request gives no `limit`.
    pub recent_limit: u32,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    #[must_use]
    pub fn shared(service: Arc<KittenService>, recent_limit: u32) -> SharedState {
        Arc::new(Self {
            service,
            recent_limit,
        })
    }
}

/// Assemble every route with CORS and request tracing.
pub fn build_router(state: SharedState, server: &ServerConfig) -> Router {
    Router::new()
        .merge(routes::health::health_routes())
        .merge(routes::kittens::kitten_routes(state.clone()))
        .merge(routes::weights::weight_routes(state.clone()))
        .merge(routes::sample_data::sample_data_routes(state))
        .layer(cors_layer(&server.cors_origins))
        .layer(TraceLayer::new_for_http())
}

/// Any origin when none are configured, otherwise exactly the listed ones.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(%origin, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
