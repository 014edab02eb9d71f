//! deadeye - DeadEye Laser Works storefront client
//!
//! Drives the same session layer the storefront views use: the credential
//! is stored in `<config dir>/storage.json` when remembered, the current user
//! is re-fetched on every invocation, and admin commands are gated by the
//! same route guards as the admin views.
//!
//! # Examples
//!
//! ```bash
//! # Log in and stay logged in
//! deadeye auth login --username alice --password secret --remember-me
//!
//! # Browse the catalog
//! deadeye service list --pretty
//!
//! # Order a service
//! deadeye order place --service-id 3 --info "Oak plaque, 20x30cm"
//! ```

use dl_cli::{Cli, execute, logger};
use dl_config::Config;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(server) = cli.server {
        config.api.base_url = server;
    }

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {e}");
        return ExitCode::FAILURE;
    }

    let log_file = match config.log_file_path() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error resolving log file: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logger::initialize(config.logging.level, log_file, config.logging.colored) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    config.log_summary();

    let result = execute(cli.command, &config).await;

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            log::debug!("Command failed: {e}");
            for message in e.messages() {
                eprintln!("Error: {message}");
            }
            ExitCode::FAILURE
        }
    }
}
