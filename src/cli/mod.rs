//! # Command-Line Interface
//!
//! Argument parsing and command dispatch. `main.rs` delegates here entirely.

pub mod args;
pub mod commands;
pub mod errors;

pub use args::{Cli, Command};
pub use commands::run;
pub use errors::CliError;
