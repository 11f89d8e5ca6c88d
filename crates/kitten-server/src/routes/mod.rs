//! Route groups, one module per resource.

pub mod health;
pub mod kittens;
pub mod sample_data;
pub mod weights;

use crate::error::{ApiError, ApiResult};

/// Parse a path segment as a row id, failing with `message`.
fn parse_id(raw: &str, message: &'static str) -> ApiResult<i64> {
    raw.trim()
        .parse()
        .map_err(|_| ApiError::validation(message))
}
