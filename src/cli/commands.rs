//! Command dispatch
//!
//! Owns the tokio runtime; the rest of the crate never builds one.

use crate::server::{self, ServerConfig};

use super::args::{Cli, Command};
use super::errors::CliError;

/// Parse arguments and run the selected command to completion.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::parse_args();
    match cli.command {
        Command::Serve {
            host,
            port,
            data_dir,
        } => {
            let config = ServerConfig {
                host,
                port,
                data_dir,
            };
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve(config))?;
        }
    }
    Ok(())
}
