//! CLI argument definitions using clap
//!
//! Commands:
//! - csvql serve [--host <host>] [--port <port>] [--data-dir <dir>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// csvql - A CSV loading, viewing, and boolean-query search server
#[derive(Parser, Debug)]
#[command(name = "csvql")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value_t = 3232)]
        port: u16,

        /// Directory that loadcsv file paths are resolved under
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["csvql", "serve"]).unwrap();
        let Command::Serve { host, port, data_dir } = cli.command;
        assert_eq!(host, "0.0.0.0");
        assert_eq!(port, 3232);
        assert_eq!(data_dir, PathBuf::from("data"));
    }

    #[test]
    fn test_serve_overrides() {
        let cli = Cli::try_parse_from([
            "csvql", "serve", "--host", "127.0.0.1", "--port", "8080", "--data-dir", "/tmp/csv",
        ])
        .unwrap();
        let Command::Serve { host, port, data_dir } = cli.command;
        assert_eq!(host, "127.0.0.1");
        assert_eq!(port, 8080);
        assert_eq!(data_dir, PathBuf::from("/tmp/csv"));
    }
}
