//! # Weather Data Types
//!
//! Request shape and the NWS API payload subset this service reads.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A forecast request: where and when.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherRequest {
    pub lat: f64,
    pub lon: f64,
    pub datetime: DateTime<FixedOffset>,
}

impl WeatherRequest {
    pub fn new(lat: f64, lon: f64, datetime: DateTime<FixedOffset>) -> Self {
        Self { lat, lon, datetime }
    }
}

/// Response body of the points endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PointsResponse {
    pub properties: PointsProperties,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsProperties {
    /// URL of the hourly forecast for the requested gridpoint
    pub forecast_hourly: Option<String>,
}

/// Response body of the hourly forecast endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub properties: ForecastProperties,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastProperties {
    pub periods: Vec<ForecastPeriod>,
}

/// One hourly forecast period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPeriod {
    pub start_time: String,
    pub end_time: String,
    pub temperature: i64,
    pub temperature_unit: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_response_deserializes_nws_shape() {
        let body = r#"{"properties":{"forecastHourly":"https://api.weather.gov/gridpoints/BOX/64,64/forecast/hourly"}}"#;
        let points: PointsResponse = serde_json::from_str(body).unwrap();
        assert!(points.properties.forecast_hourly.unwrap().contains("hourly"));
    }

    #[test]
    fn test_missing_hourly_url_is_none() {
        let body = r#"{"properties":{}}"#;
        let points: PointsResponse = serde_json::from_str(body).unwrap();
        assert!(points.properties.forecast_hourly.is_none());
    }

    #[test]
    fn test_forecast_period_deserializes_camel_case() {
        let body = r#"{
            "startTime": "2024-03-01T10:00:00-05:00",
            "endTime": "2024-03-01T11:00:00-05:00",
            "temperature": 61,
            "temperatureUnit": "F"
        }"#;
        let period: ForecastPeriod = serde_json::from_str(body).unwrap();
        assert_eq!(period.temperature, 61);
        assert_eq!(period.temperature_unit, "F");
    }
}
