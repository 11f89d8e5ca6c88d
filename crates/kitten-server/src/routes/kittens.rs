//! `/kittens` CRUD. The list carries each kitten's recent-weight summary.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use kitten_core::entities::{Kitten, KittenSummary};
use kitten_core::responses::MessageResponse;

use super::parse_id;
use crate::SharedState;
use crate::error::{ApiError, ApiResult};
use crate::requests::{CreateKittenRequest, UpdateKittenRequest};

const INVALID_ID: &str = "Invalid kitten ID";
const NOT_FOUND: &str = "Kitten not found";

pub fn kitten_routes(state: SharedState) -> Router {
    Router::new()
        .route("/kittens", get(list_kittens_handler).post(create_kitten_handler))
        .route(
            "/kittens/:id",
            get(get_kitten_handler)
                .put(update_kitten_handler)
                .delete(delete_kitten_handler),
        )
        .with_state(state)
}

async fn list_kittens_handler(State(state): State<SharedState>) -> ApiResult<Json<Vec<KittenSummary>>> {
    let summaries = state
        .service
        .list_kitten_summaries()
        .await
        .map_err(ApiError::internal("Failed to fetch kittens"))?;
    Ok(Json(summaries))
}

async fn create_kitten_handler(
    State(state): State<SharedState>,
    body: Result<Json<CreateKittenRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Kitten>)> {
    let Json(request) = body?;
    let new_kitten = request.validate()?;

    let failed = "Failed to create kitten";
    let id = state
        .service
        .create_kitten(&new_kitten)
        .await
        .map_err(ApiError::internal(failed))?;
    let kitten = state
        .service
        .get_kitten(id)
        .await
        .map_err(ApiError::internal(failed))?
        .ok_or_else(|| ApiError::not_found(NOT_FOUND))?;

    tracing::info!(id, name = %kitten.name, "kitten created");
    Ok((StatusCode::CREATED, Json(kitten)))
}

async fn get_kitten_handler(
    State(state): State<SharedState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<Kitten>> {
    let id = parse_id(&raw_id, INVALID_ID)?;
    let kitten = state
        .service
        .get_kitten(id)
        .await
        .map_err(ApiError::internal("Failed to fetch kitten"))?
        .ok_or_else(|| ApiError::not_found(NOT_FOUND))?;
    Ok(Json(kitten))
}

async fn update_kitten_handler(
    State(state): State<SharedState>,
    Path(raw_id): Path<String>,
    body: Result<Json<UpdateKittenRequest>, JsonRejection>,
) -> ApiResult<Json<Kitten>> {
    let id = parse_id(&raw_id, INVALID_ID)?;
    let Json(request) = body?;

    let failed = "Failed to update kitten";
    if state
        .service
        .get_kitten(id)
        .await
        .map_err(ApiError::internal(failed))?
        .is_none()
    {
        return Err(ApiError::not_found(NOT_FOUND));
    }

    let update = request.validate()?;
    if !state
        .service
        .update_kitten(id, update)
        .await
        .map_err(ApiError::internal(failed))?
    {
        return Err(ApiError::not_found(NOT_FOUND));
    }

    let kitten = state
        .service
        .get_kitten(id)
        .await
        .map_err(ApiError::internal(failed))?
        .ok_or_else(|| ApiError::not_found(NOT_FOUND))?;
    Ok(Json(kitten))
}

async fn delete_kitten_handler(
    State(state): State<SharedState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_id(&raw_id, INVALID_ID)?;
    let deleted = state
        .service
        .delete_kitten(id)
        .await
        .map_err(ApiError::internal("Failed to delete kitten"))?;
    if !deleted {
        return Err(ApiError::not_found(NOT_FOUND));
    }

    tracing::info!(id, "kitten deleted");
    Ok(Json(MessageResponse::new("Kitten deleted successfully")))
}
