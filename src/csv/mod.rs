//! # CSV Ingestion
//!
//! Delimited-text parsing into in-memory tables with a uniform column width,
//! plus the pluggable row-construction capability applied to every data row.

pub mod creator;
pub mod errors;
pub mod parser;
pub mod table;

pub use creator::{FromRow, Star, StarCreator, StringRowCreator};
pub use errors::{CsvError, CsvResult, FactoryError};
pub use parser::CsvParser;
pub use table::Table;
