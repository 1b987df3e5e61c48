use std::collections::{HashMap, HashSet, VecDeque};

use crate::bail_invalid;
use crate::collections::{AdaptablePriorityQueue, Locator};
use crate::error::Result;
use crate::graph::{edge_weight, Edge, Graph, Vertex, Weighted};

/// Single-source shortest-path distances
///
/// Every vertex enters an adaptable priority queue keyed by its tentative
/// distance (`0` for `source`, `+inf` otherwise). The closest unsettled
/// vertex is extracted and settled. Each of its outgoing edges is checked
/// for a negative weight, and edges to unsettled vertices are relaxed with
/// decrease-key.
///
/// The returned map only holds vertices reachable from `source`.
/// Tie-breaking between equal tentative distances follows the queue and is
/// not part of the contract.
///
/// # Errors
/// Fails if `source` does not belong to `graph`, or if a negative edge
/// weight is reached during relaxation.
#[tracing::instrument(skip(graph), fields(source = %source, vertices = graph.num_vertices(), edges = graph.num_edges()))]
pub fn dijkstra<G>(graph: &G, source: Vertex) -> Result<HashMap<Vertex, f64>>
where
    G: Graph + ?Sized,
    G::EdgeValue: Weighted,
{
    graph.vertex_value(source)?;

    let n = graph.num_vertices();
    let mut distance: HashMap<Vertex, f64> = HashMap::with_capacity(n);
    let mut locators: HashMap<Vertex, Locator> = HashMap::with_capacity(n);
    let mut settled: HashSet<Vertex> = HashSet::with_capacity(n);
    let mut queue = AdaptablePriorityQueue::with_capacity(n);

    for v in graph.vertices() {
        let d = if v == source { 0.0 } else { f64::INFINITY };
        distance.insert(v, d);
        locators.insert(v, queue.insert(d, v));
    }

    while let Some((d, u)) = queue.remove_min() {
        if d.is_infinite() {
            // Everything left in the queue is unreachable.
            break;
        }
        settled.insert(u);

        for edge in graph.outgoing_edges(u)? {
            let weight = edge_weight(graph, edge)?;
            if weight < 0.0 {
                bail_invalid!("edge weight", format!("{edge} has negative weight {weight}"));
            }
            let v = graph.opposite(u, edge)?;
            if settled.contains(&v) {
                continue;
            }
            let candidate = d + weight;
            let current = distance.get(&v).copied().unwrap_or(f64::INFINITY);
            if candidate < current {
                tracing::trace!(%u, %v, %edge, from = current, to = candidate, "relax");
                distance.insert(v, candidate);
                if let Some(&locator) = locators.get(&v) {
                    queue.decrease_key(locator, candidate);
                }
            }
        }
    }

    distance.retain(|_, d| d.is_finite());
    tracing::debug!(reached = distance.len(), "dijkstra complete");
    Ok(distance)
}

/// Shortest-path tree for distances computed by [`dijkstra`]
///
/// Grows the tree outward from `source` over tight edges only: `v` takes
/// edge `(u, v)` as its parent when `u` is already in the tree and
/// `d(v) == d(u) + w(u, v)`. Each vertex is attached once, so parents never
/// form a cycle even with zero-weight edges. Vertices that cannot be attached
/// are left out.
#[tracing::instrument(skip(graph, distances), fields(source = %source, reached = distances.len()))]
pub fn shortest_path_tree<G>(
    graph: &G,
    source: Vertex,
    distances: &HashMap<Vertex, f64>,
) -> Result<HashMap<Vertex, Edge>>
where
    G: Graph + ?Sized,
    G::EdgeValue: Weighted,
{
    graph.vertex_value(source)?;

    let mut tree = HashMap::with_capacity(distances.len().saturating_sub(1));
    let Some(&d_source) = distances.get(&source) else {
        return Ok(tree);
    };

    let mut frontier = VecDeque::from([(source, d_source)]);
    while let Some((u, du)) = frontier.pop_front() {
        for edge in graph.outgoing_edges(u)? {
            let v = graph.opposite(u, edge)?;
            if v == source || tree.contains_key(&v) {
                continue;
            }
            let Some(&dv) = distances.get(&v) else {
                continue;
            };
            if same_distance(dv, du + edge_weight(graph, edge)?) {
                tree.insert(v, edge);
                frontier.push_back((v, dv));
            }
        }
    }

    tracing::debug!(tree_edges = tree.len(), "shortest_path_tree complete");
    Ok(tree)
}

/// Equality with a relative tolerance, so float weights still match
fn same_distance(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

#[cfg(test)]
mod tests;
