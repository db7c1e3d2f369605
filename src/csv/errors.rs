//! # CSV Errors
//!
//! Error types for parsing delimited text and constructing row records.

use thiserror::Error;

/// Result type for CSV operations
pub type CsvResult<T> = Result<T, CsvError>;

/// Failure to convert a raw row into a domain record.
///
/// Carries the offending field list so callers can report exactly which
/// row could not be converted.
#[derive(Debug, Clone, Error)]
#[error("{message}: {row:?}")]
pub struct FactoryError {
    /// What went wrong
    pub message: String,

    /// The raw fields that could not be converted
    pub row: Vec<String>,
}

impl FactoryError {
    pub fn new(message: impl Into<String>, row: Vec<String>) -> Self {
        Self {
            message: message.into(),
            row,
        }
    }
}

/// CSV ingestion errors
#[derive(Debug, Error)]
pub enum CsvError {
    /// A data row's field count differs from the width established by the
    /// first line. Line numbers are 1-based physical line positions.
    #[error("Wrong CSV data format! Line {line} has {got} columns, but should be {expected}")]
    Format {
        line: usize,
        got: usize,
        expected: usize,
    },

    /// The row constructor rejected a row
    #[error(transparent)]
    Factory(#[from] FactoryError),

    /// Reading the underlying source failed
    #[error("Failed to read CSV source: {0}")]
    Io(#[from] std::io::Error),
}
