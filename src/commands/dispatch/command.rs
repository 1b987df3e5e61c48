//! Command trait and context for dispatching commands

use std::time::Instant;

use dsgraph_core::config::GraphConfig;
use dsgraph_core::error::Result;
use dsgraph_core::graph::Backend;

use super::macros::trace_command;
use crate::cli::{Cli, Commands, GraphArgs};
use crate::commands::build::NamedGraph;
use crate::commands::traverse::Traversal;
use crate::commands::{mst, shortest, stats, traverse};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a GraphConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: &'a GraphConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// `--backend`, falling back to the config file
    pub fn backend(&self) -> Backend {
        self.cli.backend.unwrap_or(self.config.backend)
    }

    /// `--directed` or the config file
    pub fn directed(&self) -> bool {
        self.cli.directed || self.config.directed
    }

    pub fn build_graph(&self, args: &GraphArgs) -> Result<NamedGraph> {
        let graph = NamedGraph::build(self.backend(), self.directed(), args)?;
        trace_command!(self.cli, self.start, "build_graph");
        Ok(graph)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("dsgraph {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Graph traversal, shortest paths and spanning trees.");
        println!();
        println!("Run `dsgraph --help` for usage information.");
        Ok(())
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Bfs { start, graph } => {
                traverse::execute(ctx, &ctx.build_graph(graph)?, start, Traversal::Breadth)
            }
            Commands::Dfs { start, graph } => {
                traverse::execute(ctx, &ctx.build_graph(graph)?, start, Traversal::Depth)
            }
            Commands::Dijkstra { source, graph } => {
                shortest::execute_dijkstra(ctx, &ctx.build_graph(graph)?, source)
            }
            Commands::Path { from, to, graph } => {
                shortest::execute_path(ctx, &ctx.build_graph(graph)?, from, to)
            }
            Commands::Mst { algorithm, graph } => {
                mst::execute(ctx, &ctx.build_graph(graph)?, *algorithm)
            }
            Commands::Stats { graph } => stats::execute(ctx, &ctx.build_graph(graph)?),
        };
        trace_command!(ctx.cli, ctx.start, "execute");
        result
    }
}
