//! # Query Engine
//!
//! A small prefix-notation boolean query language over a loaded table:
//! `and(...)`, `or(...)`, `not(...)` combinators around leaf terms that match
//! an exact field value, optionally constrained to one column.
//!
//! Pipeline: [`tokenizer::tokenize`] flattens the query string,
//! [`tree::QueryNode::build`] turns the token stream into an AST, and
//! [`eval::Searcher`] walks the AST against the table producing matching rows
//! in ascending original row order.

pub mod column;
pub mod errors;
pub mod eval;
pub mod tokenizer;
pub mod tree;

pub use column::ColumnKey;
pub use errors::{QueryError, QueryResult};
pub use eval::Searcher;
pub use tokenizer::tokenize;
pub use tree::QueryNode;
