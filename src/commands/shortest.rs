//! `dsgraph dijkstra` / `dsgraph path` command implementations

use dsgraph_core::algos::{dijkstra, path_to, shortest_path_tree, total_weight};
use dsgraph_core::error::{GraphError, Result};

use super::build::NamedGraph;
use super::dispatch::CommandContext;

/// Print the distance to every vertex and its parent in the shortest-path tree
pub fn execute_dijkstra(ctx: &CommandContext, named: &NamedGraph, source: &str) -> Result<()> {
    let source = named.vertex(source)?;
    let graph = &*named.graph;
    let distances = dijkstra(graph, source)?;
    let tree = shortest_path_tree(graph, source, &distances)?;

    if !ctx.cli.quiet {
        println!("distances from {}:", named.name(source)?);
    }
    for v in graph.vertices() {
        let name = named.name(v)?;
        match (distances.get(&v), tree.get(&v)) {
            (Some(d), Some(&edge)) => {
                println!("{}\t{}\tvia {}", name, d, named.name(graph.opposite(v, edge)?)?)
            }
            (Some(d), None) => println!("{}\t{}", name, d),
            (None, _) => println!("{}\tunreachable", name),
        }
    }
    Ok(())
}

/// Print the shortest path between two vertices
pub fn execute_path(ctx: &CommandContext, named: &NamedGraph, from: &str, to: &str) -> Result<()> {
    let (source, target) = (named.vertex(from)?, named.vertex(to)?);
    let graph = &*named.graph;
    let distances = dijkstra(graph, source)?;
    let tree = shortest_path_tree(graph, source, &distances)?;

    let Some(path) = path_to(graph, &tree, source, target)? else {
        return Err(GraphError::Other(format!("no path from {} to {}", from, to)));
    };

    let mut stops = vec![named.name(source)?];
    let mut current = source;
    for &edge in &path {
        current = graph.opposite(current, edge)?;
        stops.push(named.name(current)?);
    }
    println!("{}", stops.join(" -> "));

    if !ctx.cli.quiet {
        println!("total: {}", total_weight(graph, &path)?);
    }
    Ok(())
}
