//! `/weights` CRUD and the recent-weights feed.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use kitten_core::entities::WeightMeasurement;
use kitten_core::responses::MessageResponse;

use super::parse_id;
use crate::SharedState;
use crate::error::{ApiError, ApiResult};
use crate::requests::{CreateWeightRequest, UpdateWeightRequest, WeightsQuery};

const INVALID_ID: &str = "Invalid weight ID";
const NOT_FOUND: &str = "Weight measurement not found";

pub fn weight_routes(state: SharedState) -> Router {
    Router::new()
        .route("/weights", get(list_weights_handler).post(create_weight_handler))
        .route(
            "/weights/:id",
            get(get_weight_handler)
                .put(update_weight_handler)
                .delete(delete_weight_handler),
        )
        .with_state(state)
}

/// With `kitten_id`: that kitten's history, newest first. Without: the most
/// recent measurements across all kittens, each with its kitten's name. A blank
/// `kitten_id` counts as absent.
async fn list_weights_handler(
    State(state): State<SharedState>,
    Query(query): Query<WeightsQuery>,
) -> ApiResult<Response> {
    let failed = "Failed to fetch weights";

    let kitten_id = query
        .kitten_id
        .as_deref()
        .map(str::trim)
        .filter(|raw| !raw.is_empty());
    if let Some(raw) = kitten_id {
        let kitten_id = parse_id(raw, "Invalid kitten ID")?;
        let history = state
            .service
            .list_measurements_for_kitten(kitten_id)
            .await
            .map_err(ApiError::internal(failed))?;
        return Ok(Json(history).into_response());
    }

    let limit = match query.limit.as_deref() {
        Some(raw) => raw
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|limit| *limit > 0)
            .ok_or_else(|| ApiError::validation("Invalid limit"))?,
        None => state.recent_limit,
    };
    let recent = state
        .service
        .list_recent_measurements(limit)
        .await
        .map_err(ApiError::internal(failed))?;
    Ok(Json(recent).into_response())
}

async fn create_weight_handler(
    State(state): State<SharedState>,
    body: Result<Json<CreateWeightRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<WeightMeasurement>)> {
    let Json(request) = body?;
    let new_measurement = request.validate()?;

    // An unknown kitten_id fails the foreign key and lands here as a 500.
    let failed = "Failed to create weight measurement";
    let id = state
        .service
        .create_measurement(&new_measurement)
        .await
        .map_err(ApiError::internal(failed))?;
    let measurement = state
        .service
        .get_measurement(id)
        .await
        .map_err(ApiError::internal(failed))?
        .ok_or_else(|| ApiError::not_found(NOT_FOUND))?;

    tracing::info!(
        id,
        kitten_id = measurement.kitten_id,
        weight_grams = measurement.weight_grams,
        "weight recorded"
    );
    Ok((StatusCode::CREATED, Json(measurement)))
}

async fn get_weight_handler(
    State(state): State<SharedState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<WeightMeasurement>> {
    let id = parse_id(&raw_id, INVALID_ID)?;
    let measurement = state
        .service
        .get_measurement(id)
        .await
        .map_err(ApiError::internal("Failed to fetch weight measurement"))?
        .ok_or_else(|| ApiError::not_found(NOT_FOUND))?;
    Ok(Json(measurement))
}

async fn update_weight_handler(
    State(state): State<SharedState>,
    Path(raw_id): Path<String>,
    body: Result<Json<UpdateWeightRequest>, JsonRejection>,
) -> ApiResult<Json<WeightMeasurement>> {
    let id = parse_id(&raw_id, INVALID_ID)?;
    let Json(request) = body?;

    let failed = "Failed to update weight measurement";
    if state
        .service
        .get_measurement(id)
        .await
        .map_err(ApiError::internal(failed))?
        .is_none()
    {
        return Err(ApiError::not_found(NOT_FOUND));
    }

    let update = request.validate()?;
    if !state
        .service
        .update_measurement(id, update)
        .await
        .map_err(ApiError::internal(failed))?
    {
        return Err(ApiError::not_found(NOT_FOUND));
    }

    let measurement = state
        .service
        .get_measurement(id)
        .await
        .map_err(ApiError::internal(failed))?
        .ok_or_else(|| ApiError::not_found(NOT_FOUND))?;
    Ok(Json(measurement))
}

async fn delete_weight_handler(
    State(state): State<SharedState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_id(&raw_id, INVALID_ID)?;
    let deleted = state
        .service
        .delete_measurement(id)
        .await
        .map_err(ApiError::internal("Failed to delete weight measurement"))?;
    if !deleted {
        return Err(ApiError::not_found(NOT_FOUND));
    }

    tracing::info!(id, "weight deleted");
    Ok(Json(MessageResponse::new(
        "Weight measurement deleted successfully",
    )))
}
