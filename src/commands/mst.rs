//! `dsgraph mst` command implementation

use dsgraph_core::algos::{kruskal, prim_jarnik, total_weight};
use dsgraph_core::error::Result;
use dsgraph_core::trace_time;

use super::build::NamedGraph;
use super::dispatch::CommandContext;
use crate::cli::MstAlgorithm;

/// Print the spanning forest chosen by `algorithm` and its total weight
pub fn execute(ctx: &CommandContext, named: &NamedGraph, algorithm: MstAlgorithm) -> Result<()> {
    let graph = &*named.graph;
    let start = std::time::Instant::now();
    let edges = match algorithm {
        MstAlgorithm::Kruskal => kruskal(graph)?,
        MstAlgorithm::Prim => prim_jarnik(graph)?,
    };
    trace_time!(start, "mst", edges = edges.len());

    for &edge in &edges {
        println!("{}", named.describe_edge(edge)?);
    }
    if !ctx.cli.quiet {
        println!(
            "total: {} ({} edges)",
            total_weight(graph, &edges)?,
            edges.len()
        );
    }
    Ok(())
}
