//! Command dispatch logic for dsgraph

use std::time::Instant;

use dsgraph_core::config::GraphConfig;
use dsgraph_core::error::Result;
use tracing::debug;

use crate::cli::Cli;

mod command;
mod macros;

pub use command::CommandContext;
use command::{Command, NoCommand};

pub fn run(cli: &Cli, config: &GraphConfig, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, config, start);

    debug!(
        backend = %ctx.backend(),
        directed = ctx.directed(),
        elapsed = ?start.elapsed(),
        "resolve_settings"
    );

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
