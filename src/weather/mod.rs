//! # Weather Lookup
//!
//! Forecast retrieval against an NWS-style points/hourly-forecast API, fronted
//! by a bounded TTL cache with geo/time-fuzzy hits: a cached forecast answers
//! any request within a few miles and an hour of the one that produced it.

pub mod cache;
pub mod errors;
pub mod nws;
pub mod types;

pub use cache::{CacheStats, ForecastCache};
pub use errors::{WeatherError, WeatherResult};
pub use nws::NwsClient;
pub use types::{ForecastPeriod, WeatherRequest};

use std::future::Future;

/// Produces the forecast period covering a request's location and time.
///
/// The cache wraps any provider; the HTTP client is the production
/// implementation.
pub trait ForecastProvider: Send + Sync {
    fn forecast(
        &self,
        request: &WeatherRequest,
    ) -> impl Future<Output = WeatherResult<ForecastPeriod>> + Send;
}
