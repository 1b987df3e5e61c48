//! `dsgraph stats` command implementation

use dsgraph_core::error::Result;

use super::build::NamedGraph;
use super::dispatch::CommandContext;

pub fn execute(ctx: &CommandContext, named: &NamedGraph) -> Result<()> {
    let graph = &named.graph;

    if !ctx.cli.quiet {
        println!("backend: {}", named.backend);
        println!("directed: {}", graph.is_directed());
    }
    println!("vertices: {}", graph.num_vertices());
    println!("edges: {}", graph.num_edges());

    for v in graph.vertices() {
        println!(
            "{}\tout {}\tin {}",
            named.name(v)?,
            graph.out_degree(v)?,
            graph.in_degree(v)?
        );
    }
    Ok(())
}
