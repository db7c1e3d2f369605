//! csvql - A CSV loading, viewing, and boolean-query search server
//!
//! Core pipeline: delimited text parses into a [`csv::Table`] held by the
//! [`store::TableStore`]; query strings tokenize and build into a
//! [`query::QueryNode`] AST evaluated set-wise against the table. The HTTP
//! layer in [`server`] exposes load/view/search plus a cached weather lookup.

pub mod cli;
pub mod csv;
pub mod observability;
pub mod query;
pub mod server;
pub mod store;
pub mod weather;
