//! # kitten-core
//!
//! Core types and error taxonomy for Kitten Weights.
//!
//! This crate provides the foundational types shared across all Kitten Weights crates:
//! - Entity structs for kittens and their weight measurements
//! - Sex and status enums with their stored string forms
//! - Cross-cutting error types
//! - The recent-weight summary computation behind the kitten listing
//! - HTTP response bodies

pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
pub mod summary;
