//! CLI error types

use thiserror::Error;

/// Errors surfaced to the process entry point
#[derive(Debug, Error)]
pub enum CliError {
    /// Runtime construction or server I/O failed
    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}
