use std::collections::HashMap;

use crate::error::Result;
use crate::graph::{edge_weight, Edge, Graph, Vertex, Weighted};

/// Walk a discovery map or shortest-path tree back from `target` to `start`
///
/// Returns the edges from `start` to `target` in travel order, an empty path
/// when `target == start`, and `None` when `target` is not connected to
/// `start` through `tree`. Gives up after `num_vertices` steps, so a
/// malformed map cannot loop forever.
pub fn path_to<G>(
    graph: &G,
    tree: &HashMap<Vertex, Edge>,
    start: Vertex,
    target: Vertex,
) -> Result<Option<Vec<Edge>>>
where
    G: Graph + ?Sized,
{
    graph.vertex_value(start)?;
    graph.vertex_value(target)?;

    let mut path = Vec::new();
    let mut current = target;
    while current != start {
        if path.len() >= graph.num_vertices() {
            tracing::warn!(%start, %target, "path reconstruction hit a cycle");
            return Ok(None);
        }
        let Some(&edge) = tree.get(&current) else {
            return Ok(None);
        };
        path.push(edge);
        current = graph.opposite(current, edge)?;
    }

    path.reverse();
    Ok(Some(path))
}

/// Sum of the weights of `edges`
pub fn total_weight<G>(graph: &G, edges: &[Edge]) -> Result<f64>
where
    G: Graph + ?Sized,
    G::EdgeValue: Weighted,
{
    edges
        .iter()
        .try_fold(0.0, |sum, &edge| -> Result<f64> {
            Ok(sum + edge_weight(graph, edge)?)
        })
}
