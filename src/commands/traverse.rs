//! `dsgraph bfs` / `dsgraph dfs` command implementations

use std::collections::HashMap;

use dsgraph_core::algos::{bfs, dfs};
use dsgraph_core::error::Result;
use dsgraph_core::graph::{Edge, Vertex};

use super::build::NamedGraph;
use super::dispatch::CommandContext;

/// Traversal order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    Breadth,
    Depth,
}

impl Traversal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Traversal::Breadth => "bfs",
            Traversal::Depth => "dfs",
        }
    }

    fn run(&self, named: &NamedGraph, start: Vertex) -> Result<HashMap<Vertex, Edge>> {
        match self {
            Traversal::Breadth => bfs(&*named.graph, start),
            Traversal::Depth => dfs(&*named.graph, start),
        }
    }
}

/// Print every reached vertex with the edge that discovered it
pub fn execute(
    ctx: &CommandContext,
    named: &NamedGraph,
    start: &str,
    traversal: Traversal,
) -> Result<()> {
    let start = named.vertex(start)?;
    let discovery = traversal.run(named, start)?;
    let graph = &named.graph;

    if !ctx.cli.quiet {
        println!(
            "{} from {}: reached {} of {} other vertices",
            traversal.as_str(),
            named.name(start)?,
            discovery.len(),
            graph.num_vertices().saturating_sub(1)
        );
    }

    let mut unreachable = Vec::new();
    for v in graph.vertices() {
        if v == start {
            continue;
        }
        match discovery.get(&v) {
            Some(&edge) => println!(
                "{}\tvia {}\t{}",
                named.name(v)?,
                named.name(graph.opposite(v, edge)?)?,
                graph.edge_value(edge)?
            ),
            None => unreachable.push(named.name(v)?),
        }
    }

    if !unreachable.is_empty() {
        println!("unreachable: {}", unreachable.join(", "));
    }
    Ok(())
}
