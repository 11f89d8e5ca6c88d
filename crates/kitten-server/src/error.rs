//! HTTP error type and its `{"error": ...}` rendering.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kitten_core::responses::ErrorResponse;
use kitten_db::error::DatabaseError;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Errors a handler can return.
///
/// Only the display text reaches the client. The storage error behind an
/// `Internal` is logged and withheld.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing input.
    #[error("{0}")]
    Validation(String),

    /// The addressed kitten or measurement does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Storage failure or unreadable stored data.
    #[error("{message}")]
    Internal {
        message: String,
        #[source]
        source: DatabaseError,
    },
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Adapter for `map_err`: wraps a storage error under a generic message.
    pub fn internal(message: &'static str) -> impl FnOnce(DatabaseError) -> Self {
        move |source| Self::Internal {
            message: message.to_string(),
            source,
        }
    }

    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal { message, source } = &self {
            tracing::error!(error = %source, "{message}");
        }
        let status = self.status_code();
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}
