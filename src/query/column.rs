//! # Column Resolver
//!
//! Maps a column descriptor from a constrained leaf (a positional index or a
//! header name) to a concrete column position.
//!
//! Resolution is deliberately soft-failing: an unparseable or out-of-range
//! index and an unknown name all resolve to `None`, which the evaluator turns
//! into an empty match set. The only hard error is a name lookup against a
//! table that has no header.

use super::errors::{QueryError, QueryResult};

/// A column descriptor from a constrained leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnKey<'a> {
    /// Positional: the descriptor value is an integer column index
    Index(&'a str),

    /// Named: the descriptor value is matched exactly against the header
    Name(&'a str),
}

impl<'a> ColumnKey<'a> {
    /// Classify a descriptor from its `(value, mode)` pair. The literal mode
    /// string `idx` selects positional lookup; any other mode is a name.
    pub fn from_parts(value: &'a str, mode: &str) -> Self {
        if mode == "idx" {
            ColumnKey::Index(value)
        } else {
            ColumnKey::Name(value)
        }
    }

    /// Resolve this descriptor to a column position, checked against the
    /// data rows' width (not the header length, which may differ).
    pub fn resolve(
        &self,
        header: Option<&[String]>,
        data_width: usize,
    ) -> QueryResult<Option<usize>> {
        let index = match self {
            ColumnKey::Index(value) => value.parse::<usize>().ok(),
            ColumnKey::Name(name) => {
                let header = header.ok_or(QueryError::NoHeader)?;
                header.iter().position(|column| column == name)
            }
        };
        Ok(index.filter(|&i| i < data_width))
    }
}
