//! dsgraph - graph algorithms from the command line
//!
//! Builds a graph on the selected backend from `--edge` arguments (or a
//! built-in sample) and runs traversals, shortest paths or spanning trees.

mod cli;
mod commands;

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::Cli;
use dsgraph_core::config::GraphConfig;
use dsgraph_core::error::ExitCode as GraphExitCode;
use dsgraph_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    // Usage errors exit with code 2 from clap itself
    let cli = Cli::parse();

    let config = cli.config.as_deref().map(GraphConfig::load).transpose();

    // Command-line flags win over the config file
    let logging_config = match &config {
        Ok(Some(config)) => config.logging.clone(),
        _ => Default::default(),
    };
    let log_level = cli.log_level.as_deref().or(logging_config.level.as_deref());
    let log_json = cli.log_json || logging_config.json;

    // Initialize structured logging
    if let Err(e) = logging::init_tracing(cli.verbose, log_level, log_json) {
        // If tracing initialization fails, fall back to stderr
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let result = config
        .and_then(|config| commands::dispatch::run(&cli, &config.unwrap_or_default(), start));

    match result {
        Ok(()) => ExitCode::from(GraphExitCode::Success as u8),
        Err(e) => {
            if !cli.quiet {
                eprintln!("error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
