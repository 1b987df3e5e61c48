use std::collections::{HashMap, HashSet};

use crate::error::Result;
use crate::graph::{Edge, Graph, Vertex};

/// Breadth-first traversal from `start`
///
/// Returns the discovery map: every vertex reached through outgoing edges,
/// mapped to the edge that first reached it. `start` itself has no entry and
/// unreachable vertices are absent. Vertices are discovered level by level,
/// and within a level in the backend's edge enumeration order.
#[tracing::instrument(skip(graph), fields(start = %start, vertices = graph.num_vertices(), edges = graph.num_edges()))]
pub fn bfs<G>(graph: &G, start: Vertex) -> Result<HashMap<Vertex, Edge>>
where
    G: Graph + ?Sized,
{
    graph.vertex_value(start)?;

    let mut discovered = HashSet::from([start]);
    let mut forest = HashMap::new();
    let mut level = vec![start];
    let mut depth = 0usize;

    while !level.is_empty() {
        let mut next_level = Vec::new();
        for u in level {
            for edge in graph.outgoing_edges(u)? {
                let v = graph.opposite(u, edge)?;
                if discovered.insert(v) {
                    forest.insert(v, edge);
                    next_level.push(v);
                }
            }
        }
        depth += 1;
        tracing::trace!(depth, discovered = next_level.len(), "bfs level");
        level = next_level;
    }

    tracing::debug!(reached = forest.len(), "bfs complete");
    Ok(forest)
}
