//! # BatchForm Core
//!
//! Shared domain types for the batch creation form: calendar days, wall-clock
//! times, per-day schedule entries, the raw submission payload and the error
//! type used by every fallible surface of the workspace.

/// Error types shared across crates
pub mod errors;
/// Domain and payload models
pub mod models;
