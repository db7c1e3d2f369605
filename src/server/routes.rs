//! # Route Handlers
//!
//! The four GET endpoints. Handlers never fail at the HTTP layer; every
//! outcome, including errors, is a 200 with an envelope the client branches
//! on (see [`super::response`]).

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::Router;
use chrono::{DateTime, Utc};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};

use crate::csv::{CsvParser, StringRowCreator};
use crate::observability::Logger;
use crate::query::{QueryError, Searcher};
use crate::weather::{ForecastProvider, WeatherRequest};

use super::response::Envelope;
use super::state::AppState;

/// Build the router over shared state.
///
/// CORS allows any origin and method so browser clients can call the API
/// directly.
pub fn router<P: ForecastProvider + 'static>(state: Arc<AppState<P>>) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);

    Router::new()
        .route("/loadcsv", get(load_csv::<P>))
        .route("/viewcsv", get(view_csv::<P>))
        .route("/searchcsv", get(search_csv::<P>))
        .route("/weather", get(weather::<P>))
        .layer(cors)
        .with_state(state)
}

/// A query parameter, treating blank (empty or whitespace) as absent.
fn param<'a>(params: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    params
        .get(key)
        .map(String::as_str)
        .filter(|value| !value.trim().is_empty())
}

/// The `Missing Args: [...]` detail for absent required parameters.
fn missing_args(names: &[&str]) -> Envelope {
    Envelope::bad_request(format!("Missing Args: [{}]", names.join(", ")))
}

/// `GET /loadcsv?filepath=<name>&header=true|false`
///
/// Resolves the path under the configured data directory, parses it with the
/// identity row constructor, and swaps the parsed table into the store.
async fn load_csv<P: ForecastProvider>(
    State(state): State<Arc<AppState<P>>>,
    Query(params): Query<HashMap<String, String>>,
) -> Envelope {
    let filepath = param(&params, "filepath");
    let header = param(&params, "header");

    let mut missing = Vec::new();
    if filepath.is_none() {
        missing.push("filepath");
    }
    if header.is_none() {
        missing.push("header");
    }
    if !missing.is_empty() {
        return missing_args(&missing);
    }
    let (filepath, header) = (filepath.unwrap_or_default(), header.unwrap_or_default());

    let has_header = match header {
        "true" => true,
        "false" => false,
        other => {
            return Envelope::bad_request(format!(
                "header should be either true or false, but get {other}"
            ))
        }
    };

    let path = state.data_dir.join(filepath);
    let text = match tokio::fs::read_to_string(&path).await {
        Ok(text) => text,
        Err(_) => {
            Logger::warn("load_failed", &[("filepath", filepath)]);
            return Envelope::datasource_error(format!("Fail to load file: {filepath}"));
        }
    };

    let parser = CsvParser::new(has_header, StringRowCreator);
    if let Err(err) = state.store.load(&parser, text.as_bytes()) {
        Logger::warn(
            "load_failed",
            &[("filepath", filepath), ("error", &err.to_string())],
        );
        return Envelope::datasource_error(err.to_string());
    }

    Envelope::success()
        .field("request", json!({ "filepath": filepath, "header": header }))
        .field("detail", format!("Successfully loaded file: {filepath}"))
}

/// `GET /viewcsv`
///
/// Returns the loaded rows, with the header prefixed as the first row when
/// one is present.
async fn view_csv<P: ForecastProvider>(State(state): State<Arc<AppState<P>>>) -> Envelope {
    let table = state.store.snapshot();
    if table.is_empty() {
        return Envelope::bad_request("No CSV data loaded");
    }
    Envelope::success().field("detail", table.rows_with_header())
}

/// `GET /searchcsv?query=<q>`
///
/// Evaluates the boolean query against the loaded table and returns the
/// matching rows in original row order.
async fn search_csv<P: ForecastProvider>(
    State(state): State<Arc<AppState<P>>>,
    Query(params): Query<HashMap<String, String>>,
) -> Envelope {
    let table = state.store.snapshot();
    if table.is_empty() {
        return Envelope::bad_request("No CSV data loaded");
    }
    let Some(query) = param(&params, "query") else {
        return Envelope::bad_request("Need query field to search.");
    };

    let searcher = Searcher::new(table.rows(), table.header());
    match searcher.search(query) {
        Ok(rows) => Envelope::success()
            .field("request", json!({ "query": query }))
            .field("search result", rows),
        Err(err @ QueryError::NoHeader) => Envelope::datasource_error(err.to_string()),
        Err(err) => Envelope::bad_request(err.to_string()),
    }
}

/// `GET /weather?lat=<f>&lon=<f>&datetime=<rfc3339>`
///
/// Answers the temperature for the forecast period covering the requested
/// time (now, when no datetime is given), via the fuzzy forecast cache.
async fn weather<P: ForecastProvider>(
    State(state): State<Arc<AppState<P>>>,
    Query(params): Query<HashMap<String, String>>,
) -> Envelope {
    let lat = param(&params, "lat");
    let lon = param(&params, "lon");
    let datetime = param(&params, "datetime");

    let mut missing = Vec::new();
    if lat.is_none() {
        missing.push("lat");
    }
    if lon.is_none() {
        missing.push("lon");
    }
    if !missing.is_empty() {
        return missing_args(&missing);
    }
    let (lat_raw, lon_raw) = (lat.unwrap_or_default(), lon.unwrap_or_default());

    let request_time = match datetime {
        None => Utc::now().fixed_offset(),
        Some(raw) => match DateTime::parse_from_rfc3339(raw) {
            Ok(parsed) => parsed,
            Err(_) => {
                return Envelope::bad_request(format!("Invalid datetime format: {raw}"));
            }
        },
    };

    let (Ok(lat), Ok(lon)) = (lat_raw.parse::<f64>(), lon_raw.parse::<f64>()) else {
        return Envelope::datasource_error(format!(
            "lat={lat_raw}, lon={lon_raw} cannot be converted to numbers"
        ));
    };

    let request = WeatherRequest::new(lat, lon, request_time);
    match state.weather.forecast(&request).await {
        Ok(period) => Envelope::success()
            .field(
                "request",
                json!({
                    "lat": lat_raw,
                    "lon": lon_raw,
                    "datetime": datetime.unwrap_or_default(),
                }),
            )
            .field("time", &period.start_time)
            .field(
                "temperature",
                format!("{}{}", period.temperature, period.temperature_unit),
            ),
        Err(err) => Envelope::datasource_error(err.to_string()),
    }
}
