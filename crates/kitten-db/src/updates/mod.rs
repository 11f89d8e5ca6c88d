//! Update builder types for entity mutations.
//!
//! Each builder produces an update struct with `Option` fields. Only `Some`
//! fields generate SET clauses in the dynamic UPDATE SQL. Nullable columns use
//! `Option<Option<T>>` so that "leave unchanged" (`None`) and "clear"
//! (`Some(None)`) stay distinct.

pub mod kitten;
pub mod measurement;
