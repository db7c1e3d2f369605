//! # NWS Client
//!
//! Two-hop forecast retrieval: the points endpoint maps a coordinate to its
//! gridpoint's hourly forecast URL, and the hourly forecast yields the period
//! covering the requested time.

use chrono::DateTime;

use super::errors::{WeatherError, WeatherResult};
use super::types::{ForecastPeriod, ForecastResponse, PointsResponse, WeatherRequest};
use super::ForecastProvider;

/// Production NWS API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.weather.gov";

/// HTTP client for the NWS forecast API.
#[derive(Debug, Clone)]
pub struct NwsClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for NwsClient {
    fn default() -> Self {
        Self::new()
    }
}

impl NwsClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the client at a different base URL (test servers).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// The points URL for a coordinate, formatted to the 4 decimal places the
    /// API expects.
    fn points_url(&self, lat: f64, lon: f64) -> String {
        format!("{}/points/{:.4},{:.4}", self.base_url, lat, lon)
    }

    async fn fetch_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        reported_url: &str,
    ) -> WeatherResult<T> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|_| WeatherError::Upstream(reported_url.to_string()))?;
        response
            .json()
            .await
            .map_err(|_| WeatherError::Upstream(reported_url.to_string()))
    }
}

impl ForecastProvider for NwsClient {
    async fn forecast(&self, request: &WeatherRequest) -> WeatherResult<ForecastPeriod> {
        let points_url = self.points_url(request.lat, request.lon);
        let points: PointsResponse = self.fetch_json(&points_url, &points_url).await?;

        let hourly_url = points
            .properties
            .forecast_hourly
            .ok_or_else(|| WeatherError::ForecastNotFound(points_url.clone()))?;

        // Upstream failures on the second hop report the points URL too; that
        // is the address the caller asked about.
        let forecast: ForecastResponse = self.fetch_json(&hourly_url, &points_url).await?;

        for period in forecast.properties.periods {
            let start = DateTime::parse_from_rfc3339(&period.start_time);
            let end = DateTime::parse_from_rfc3339(&period.end_time);
            let (Ok(start), Ok(end)) = (start, end) else {
                // Periods with malformed timestamps cannot cover any time.
                continue;
            };
            if request.datetime == start || (request.datetime > start && request.datetime < end) {
                return Ok(period);
            }
        }

        Err(WeatherError::TimeNotFound(request.datetime.to_rfc3339()))
    }
}
