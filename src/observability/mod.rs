//! # Observability
//!
//! Structured logging: synchronous, one JSON line per event, deterministic
//! field ordering.

pub mod logger;

pub use logger::{Logger, Severity};
