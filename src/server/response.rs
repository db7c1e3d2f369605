//! # Response Envelope
//!
//! Every endpoint answers HTTP 200 with a flat JSON object whose `result`
//! field is `success`, `error_bad_request`, or `error_datasource`, usually
//! with a human-readable `detail` and endpoint-specific fields alongside.
//! Clients branch on `result`, not on the status code.

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::{Map, Value};

/// `result` value for successful requests
pub const RESULT_SUCCESS: &str = "success";

/// `result` value for malformed or incomplete requests
pub const RESULT_BAD_REQUEST: &str = "error_bad_request";

/// `result` value for failures in the data source (files, upstream APIs)
pub const RESULT_DATASOURCE: &str = "error_datasource";

/// A flat JSON response envelope.
#[derive(Debug, Clone)]
pub struct Envelope {
    fields: Map<String, Value>,
}

impl Envelope {
    fn with_result(result: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("result".to_string(), Value::String(result.to_string()));
        Self { fields }
    }

    /// A `success` envelope.
    pub fn success() -> Self {
        Self::with_result(RESULT_SUCCESS)
    }

    /// An `error_bad_request` envelope with the given detail.
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::with_result(RESULT_BAD_REQUEST).field("detail", detail.into())
    }

    /// An `error_datasource` envelope with the given detail.
    pub fn datasource_error(detail: impl Into<String>) -> Self {
        Self::with_result(RESULT_DATASOURCE).field("detail", detail.into())
    }

    /// Attach one field. Values that fail to serialize become JSON null
    /// rather than failing the response.
    pub fn field(mut self, key: &str, value: impl Serialize) -> Self {
        let value = serde_json::to_value(value).unwrap_or(Value::Null);
        self.fields.insert(key.to_string(), value);
        self
    }

    /// The envelope as a JSON value (test inspection).
    pub fn to_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        Json(Value::Object(self.fields)).into_response()
    }
}
