//! Record access layer.
//!
//! Each module adds methods to `KittenService` via `impl KittenService` blocks.
//! One method, one statement.

pub mod kitten;
pub mod measurement;
pub mod summary;
