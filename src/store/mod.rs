//! # Table Store
//!
//! Owns the single resident table. A load builds the replacement table fully
//! before publishing it, then swaps it in atomically; readers hold `Arc`
//! snapshots and always observe either the old table or the complete new one,
//! never a partially populated state.

use std::io::BufRead;
use std::sync::{Arc, RwLock};

use crate::csv::{CsvError, CsvParser, FromRow, Table};
use crate::observability::Logger;

/// Process-wide holder of the current table.
#[derive(Debug)]
pub struct TableStore {
    current: RwLock<Arc<Table<Vec<String>>>>,
}

impl Default for TableStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TableStore {
    /// Create a store holding an empty table.
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Arc::new(Table::empty())),
        }
    }

    /// Parse `reader` and, on success, replace the resident table.
    ///
    /// The parse accumulates into a private table; a failure leaves the
    /// previous snapshot untouched.
    pub fn load<R, C>(&self, parser: &CsvParser<C>, reader: R) -> Result<(), CsvError>
    where
        R: BufRead,
        C: FromRow<Row = Vec<String>>,
    {
        let table = parser.parse(reader)?;
        Logger::info(
            "table_loaded",
            &[
                ("rows", &table.len().to_string()),
                ("width", &table.width().to_string()),
                ("has_header", if table.header().is_some() { "true" } else { "false" }),
            ],
        );
        self.replace(table);
        Ok(())
    }

    /// Swap in an already-built table.
    pub fn replace(&self, table: Table<Vec<String>>) {
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Arc::new(table);
    }

    /// The current table snapshot. The returned `Arc` stays valid across
    /// later loads.
    pub fn snapshot(&self) -> Arc<Table<Vec<String>>> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}
