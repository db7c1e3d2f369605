//! # Weather Errors
//!
//! Error types for forecast retrieval.

use thiserror::Error;

/// Result type for weather operations
pub type WeatherResult<T> = Result<T, WeatherError>;

/// Forecast retrieval errors
#[derive(Debug, Clone, Error)]
pub enum WeatherError {
    /// The upstream API could not be reached or returned an unreadable body
    #[error("Unable to provide data for requested URL: {0}")]
    Upstream(String),

    /// The points lookup carried no hourly forecast URL
    #[error("Unable to provide data for requested URL: {0}")]
    ForecastNotFound(String),

    /// No forecast period covers the requested time
    #[error("Unable to provide data for requested time: {0}")]
    TimeNotFound(String),
}
