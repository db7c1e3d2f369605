//! # CSV Parser
//!
//! Reads raw lines, splits on a single delimiter character, enforces the
//! column width established by the first line, and applies a row constructor
//! to every accepted row.
//!
//! The first physical line is always consumed to fix the expected width and
//! never becomes a data row, even when no header was declared. When a header
//! was declared, that first line's fields become the header. Declaring "no
//! header" therefore still discards the first line from the data set; this
//! matches the observed behavior the search semantics were built against.
//!
//! No quoting or escaping is supported: a field cannot contain the delimiter.

use std::io::BufRead;

use super::creator::FromRow;
use super::errors::{CsvError, CsvResult};
use super::table::Table;

/// Default field delimiter
pub const DEFAULT_DELIMITER: char = ',';

/// Parses delimited text into a [`Table`] using a row constructor.
#[derive(Debug, Clone)]
pub struct CsvParser<C> {
    delimiter: char,
    has_header: bool,
    creator: C,
}

impl<C: FromRow> CsvParser<C> {
    /// Create a parser using the default `,` delimiter.
    pub fn new(has_header: bool, creator: C) -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            has_header,
            creator,
        }
    }

    /// Create a parser with a custom delimiter character.
    pub fn with_delimiter(has_header: bool, creator: C, delimiter: char) -> Self {
        Self {
            delimiter,
            has_header,
            creator,
        }
    }

    /// Parse all lines from `reader` into a fresh table.
    ///
    /// The table is accumulated privately and only returned on success, so a
    /// failed parse never exposes a half-populated result.
    pub fn parse<R: BufRead>(&self, reader: R) -> CsvResult<Table<C::Row>> {
        let mut rows = Vec::new();
        let mut header = None;
        let mut width = 0;

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let fields: Vec<String> = line
                .split(self.delimiter)
                .map(|s| s.to_string())
                .collect();

            if index == 0 {
                // First line fixes the width and is never a data row.
                width = fields.len();
                if self.has_header {
                    header = Some(fields);
                }
                continue;
            }

            if fields.len() != width {
                return Err(CsvError::Format {
                    line: index + 1,
                    got: fields.len(),
                    expected: width,
                });
            }

            rows.push(self.creator.create(fields)?);
        }

        Ok(Table::new(rows, header, width))
    }

    /// Parse from an in-memory string. Convenience for tests and callers
    /// that already hold the full text.
    pub fn parse_str(&self, text: &str) -> CsvResult<Table<C::Row>> {
        self.parse(text.as_bytes())
    }
}
