//! Cross-cutting error types for Kitten Weights.
//!
//! Storage errors (`DatabaseError`) live in `kitten-db` and HTTP errors
//! (`ApiError`) in `kitten-server`; `DatabaseError` wraps `CoreError`.

use thiserror::Error;

/// Errors raised by the domain logic in this crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Stored data is inconsistent (orphaned measurement).
    #[error("Data integrity error: {0}")]
    DataIntegrity(String),
}
