//! Structured JSON logger.
//!
//! One log line is one event. Lines are emitted synchronously with no
//! buffering, and field ordering is deterministic (event, then severity, then
//! the remaining fields alphabetically), so log output diffs cleanly between
//! runs.

use std::fmt;
use std::io::{self, Write};

use serde_json::{Map, Value};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations
    Info,
    /// Recoverable issues
    Warn,
    /// Operation failures
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Emits structured JSON log events.
pub struct Logger;

impl Logger {
    /// Log at INFO level to stdout.
    pub fn info(event: &str, fields: &[(&str, &str)]) {
        Self::emit(Severity::Info, event, fields, &mut io::stdout());
    }

    /// Log at WARN level to stdout.
    pub fn warn(event: &str, fields: &[(&str, &str)]) {
        Self::emit(Severity::Warn, event, fields, &mut io::stdout());
    }

    /// Log at ERROR level to stderr.
    pub fn error(event: &str, fields: &[(&str, &str)]) {
        Self::emit(Severity::Error, event, fields, &mut io::stderr());
    }

    fn emit<W: Write>(severity: Severity, event: &str, fields: &[(&str, &str)], writer: &mut W) {
        // serde_json::Map preserves insertion order, so insert in the
        // deterministic order we want on the wire.
        let mut object = Map::new();
        object.insert("event".to_string(), Value::String(event.to_string()));
        object.insert(
            "severity".to_string(),
            Value::String(severity.as_str().to_string()),
        );

        let mut sorted: Vec<_> = fields.to_vec();
        sorted.sort_by_key(|(key, _)| *key);
        for (key, value) in sorted {
            object.insert(key.to_string(), Value::String(value.to_string()));
        }

        let mut line = Value::Object(object).to_string();
        line.push('\n');
        let _ = writer.write_all(line.as_bytes());
        let _ = writer.flush();
    }
}

#[cfg(test)]
pub fn capture(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
    let mut buffer = Vec::new();
    Logger::emit(severity, event, fields, &mut buffer);
    String::from_utf8(buffer).unwrap()
}
