//! # Query Errors
//!
//! Error types for query parsing and evaluation.

use thiserror::Error;

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Query parsing and evaluation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A leaf had neither 1 nor 3 semicolon-separated parts
    #[error("Wrong query format! Received {got} args, but should be 1 or 3")]
    InvalidQuery { got: usize },

    /// The token stream ran out while an operator still needed a child
    #[error("incomplete expression")]
    Incomplete,

    /// A name-based column lookup was attempted against a table without a
    /// header
    #[error("Cannot use column name as identifier when the CSV has no header")]
    NoHeader,
}
