use std::collections::{HashMap, HashSet};

use crate::error::Result;
use crate::graph::{Edge, Graph, Handles, Vertex};

/// Depth-first traversal from `start`
///
/// Returns the discovery map (see [`bfs`](crate::algos::bfs)). From each
/// vertex the search descends into the first undiscovered opposite vertex
/// over its outgoing edges, in the backend's enumeration order, and resumes
/// with the remaining edges after that subtree is finished. An explicit stack
/// of edge iterators stands in for recursion.
#[tracing::instrument(skip(graph), fields(start = %start, vertices = graph.num_vertices(), edges = graph.num_edges()))]
pub fn dfs<G>(graph: &G, start: Vertex) -> Result<HashMap<Vertex, Edge>>
where
    G: Graph + ?Sized,
{
    let mut discovered = HashSet::from([start]);
    let mut forest = HashMap::new();
    let mut stack: Vec<(Vertex, Handles<'_, Edge>)> = vec![(start, graph.outgoing_edges(start)?)];

    loop {
        let Some((u, edges)) = stack.last_mut() else {
            break;
        };
        let u = *u;
        match edges.next() {
            Some(edge) => {
                let v = graph.opposite(u, edge)?;
                if discovered.insert(v) {
                    forest.insert(v, edge);
                    stack.push((v, graph.outgoing_edges(v)?));
                }
            }
            None => {
                stack.pop();
            }
        }
    }

    tracing::debug!(reached = forest.len(), "dfs complete");
    Ok(forest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AdjacencyListGraph;

    #[test]
    fn test_dfs_goes_deep_before_wide() {
        // a -> b -> c and a -> c: c is reached through b, not directly
        let mut graph: AdjacencyListGraph<&str, ()> = AdjacencyListGraph::directed();
        let a = graph.insert_vertex("a");
        let b = graph.insert_vertex("b");
        let c = graph.insert_vertex("c");
        let ab = graph.insert_edge(a, b, ()).unwrap().unwrap();
        let bc = graph.insert_edge(b, c, ()).unwrap().unwrap();
        graph.insert_edge(a, c, ()).unwrap();

        let forest = dfs(&graph, a).unwrap();
        assert_eq!(forest.len(), 2);
        assert_eq!(forest[&b], ab);
        assert_eq!(forest[&c], bc);
    }

    #[test]
    fn test_dfs_handles_cycles_and_undirected_edges() {
        let mut graph: AdjacencyListGraph<u32, ()> = AdjacencyListGraph::undirected();
        let vs: Vec<_> = (0..4).map(|i| graph.insert_vertex(i)).collect();
        for i in 0..4 {
            graph.insert_edge(vs[i], vs[(i + 1) % 4], ()).unwrap();
        }

        let forest = dfs(&graph, vs[2]).unwrap();
        assert_eq!(forest.len(), 3);
        assert!(!forest.contains_key(&vs[2]));
    }

    #[test]
    fn test_dfs_on_long_path_does_not_recurse() {
        let mut graph: AdjacencyListGraph<u32, ()> = AdjacencyListGraph::directed();
        let vs: Vec<_> = (0..50_000).map(|i| graph.insert_vertex(i)).collect();
        for pair in vs.windows(2) {
            graph.insert_edge(pair[0], pair[1], ()).unwrap();
        }
        assert_eq!(dfs(&graph, vs[0]).unwrap().len(), vs.len() - 1);
    }
}
