//! `POST /sample-data`: seed or wipe the store.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Json, Router};
use chrono::Utc;
use kitten_core::responses::MessageResponse;

use crate::SharedState;
use crate::error::{ApiError, ApiResult};
use crate::requests::SampleDataRequest;

pub fn sample_data_routes(state: SharedState) -> Router {
    Router::new()
        .route("/sample-data", post(sample_data_handler))
        .with_state(state)
}

async fn sample_data_handler(
    State(state): State<SharedState>,
    body: Result<Json<SampleDataRequest>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Json(request) = body?;
    let failed = "Failed to manage sample data";

    match request.action.as_deref() {
        Some("create") => {
            state
                .service
                .seed_sample_data(Utc::now())
                .await
                .map_err(ApiError::internal(failed))?;
            Ok(Json(MessageResponse::new("Sample data created successfully")))
        }
        Some("clear") => {
            state
                .service
                .clear_all_data()
                .await
                .map_err(ApiError::internal(failed))?;
            Ok(Json(MessageResponse::new("All data cleared successfully")))
        }
        _ => Err(ApiError::validation(
            "Invalid action. Use 'create' or 'clear'",
        )),
    }
}
