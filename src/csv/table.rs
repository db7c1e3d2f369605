//! # Table Model
//!
//! The in-memory result of a parse: an ordered row collection with a column
//! width fixed at parse time and an optional header.
//!
//! The header's length is allowed to differ from the row width; column bounds
//! are always checked against the data width, never the header length.

/// A parsed table of rows with uniform width.
#[derive(Debug, Clone, Default)]
pub struct Table<R = Vec<String>> {
    rows: Vec<R>,
    header: Option<Vec<String>>,
    width: usize,
}

impl<R> Table<R> {
    /// Create a table from already-validated parts.
    ///
    /// The parser is the only intended producer; every row must already have
    /// `width` fields.
    pub fn new(rows: Vec<R>, header: Option<Vec<String>>, width: usize) -> Self {
        Self {
            rows,
            header,
            width,
        }
    }

    /// Create an empty table with no header and zero width.
    pub fn empty() -> Self {
        Self {
            rows: Vec::new(),
            header: None,
            width: 0,
        }
    }

    /// The data rows, in ingestion order.
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// The header, if one was declared at parse time.
    pub fn header(&self) -> Option<&[String]> {
        self.header.as_deref()
    }

    /// Column width established by the first physical line.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of data rows (the header is not a data row).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Table<Vec<String>> {
    /// All rows with the header prefixed as the first row when present.
    ///
    /// This is the `view` shape: the caller sees the table exactly as loaded.
    pub fn rows_with_header(&self) -> Vec<Vec<String>> {
        let mut out = Vec::with_capacity(self.rows.len() + 1);
        if let Some(header) = &self.header {
            out.push(header.clone());
        }
        out.extend(self.rows.iter().cloned());
        out
    }
}
