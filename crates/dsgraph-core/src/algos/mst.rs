//! Minimum spanning trees
//!
//! Both algorithms treat every edge as an undirected connection between its
//! endpoints and return a spanning forest (one tree per connected component).
//! Weights only need to be comparable; negative weights are fine.

use std::collections::HashMap;

use crate::collections::{AdaptablePriorityQueue, Locator, UnionFind};
use crate::error::Result;
use crate::graph::shared::incident_edges;
use crate::graph::{edge_weight, Edge, Graph, Vertex, Weighted};

/// Kruskal's algorithm
///
/// Sorts all edges by weight and accepts each one whose endpoints are still
/// in different disjoint sets. Equal weights keep the graph's edge order.
#[tracing::instrument(skip(graph), fields(vertices = graph.num_vertices(), edges = graph.num_edges()))]
pub fn kruskal<G>(graph: &G) -> Result<Vec<Edge>>
where
    G: Graph + ?Sized,
    G::EdgeValue: Weighted,
{
    let mut candidates = graph
        .edges()
        .map(|edge| -> Result<(f64, Edge)> { Ok((edge_weight(graph, edge)?, edge)) })
        .collect::<Result<Vec<_>>>()?;
    candidates.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut forest = UnionFind::new();
    for v in graph.vertices() {
        forest.make_set(v);
    }

    let mut tree = Vec::with_capacity(graph.num_vertices().saturating_sub(1));
    for (weight, edge) in candidates {
        let (u, v) = graph.end_vertices(edge)?;
        if forest.union(u, v) {
            tracing::trace!(%edge, weight, "accept");
            tree.push(edge);
        }
    }

    tracing::debug!(tree_edges = tree.len(), components = forest.set_count(), "kruskal complete");
    Ok(tree)
}

/// Prim-Jarnik algorithm
///
/// Grows a tree from the first vertex of [`Graph::vertices`]. Every vertex
/// outside the tree sits in an adaptable priority queue keyed by the cheapest
/// edge known to connect it; extracting the minimum adds that edge, and its
/// incident edges lower their neighbours' keys. A vertex extracted with no
/// connecting edge starts a new tree of the forest.
#[tracing::instrument(skip(graph), fields(vertices = graph.num_vertices(), edges = graph.num_edges()))]
pub fn prim_jarnik<G>(graph: &G) -> Result<Vec<Edge>>
where
    G: Graph + ?Sized,
    G::EdgeValue: Weighted,
{
    let n = graph.num_vertices();
    let mut queue = AdaptablePriorityQueue::with_capacity(n);
    let mut locators: HashMap<Vertex, Locator> = HashMap::with_capacity(n);
    let mut connect: HashMap<Vertex, Edge> = HashMap::with_capacity(n);

    for (i, v) in graph.vertices().enumerate() {
        let key = if i == 0 { 0.0 } else { f64::INFINITY };
        locators.insert(v, queue.insert(key, v));
    }

    let mut tree = Vec::with_capacity(n.saturating_sub(1));
    while let Some((_, u)) = queue.remove_min() {
        locators.remove(&u);
        if let Some(&edge) = connect.get(&u) {
            tree.push(edge);
        }

        for edge in incident_edges(graph, u)? {
            let v = graph.opposite(u, edge)?;
            let Some(&locator) = locators.get(&v) else {
                continue;
            };
            let weight = edge_weight(graph, edge)?;
            if queue.key(locator).is_some_and(|&key| weight < key) {
                tracing::trace!(%u, %v, %edge, weight, "cheaper connection");
                queue.decrease_key(locator, weight);
                connect.insert(v, edge);
            }
        }
    }

    tracing::debug!(tree_edges = tree.len(), "prim_jarnik complete");
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algos::total_weight;
    use crate::graph::{new_graph, AdjacencyListGraph, AdjacencyMatrixGraph, Backend};

    fn city_graph(backend: Backend) -> Box<dyn Graph<VertexValue = &'static str, EdgeValue = u32>> {
        let mut graph = new_graph(backend, false);
        let vs: Vec<Vertex> = ["Raleigh", "Asheville", "Wilmington", "Durham", "Greenville"]
            .into_iter()
            .map(|c| graph.insert_vertex(c))
            .collect();
        let mut weight = 5;
        for i in 0..vs.len() {
            for j in i + 1..vs.len() {
                graph.insert_edge(vs[i], vs[j], weight).unwrap();
                weight += 5;
            }
        }
        graph
    }

    fn weights(graph: &dyn Graph<VertexValue = &'static str, EdgeValue = u32>, tree: &[Edge]) -> Vec<u32> {
        let mut w: Vec<u32> = tree.iter().map(|e| *graph.edge_value(*e).unwrap()).collect();
        w.sort_unstable();
        w
    }

    #[test]
    fn test_city_mst_on_every_backend() {
        for backend in Backend::ALL {
            let graph = city_graph(backend);
            let by_kruskal = kruskal(graph.as_ref()).unwrap();
            let by_prim = prim_jarnik(graph.as_ref()).unwrap();

            assert_eq!(weights(graph.as_ref(), &by_kruskal), vec![5, 10, 15, 20], "{backend}");
            assert_eq!(weights(graph.as_ref(), &by_prim), vec![5, 10, 15, 20], "{backend}");
        }
    }

    #[test]
    fn test_spanning_forest_for_disconnected_graph() {
        let mut graph: AdjacencyListGraph<u8, u32> = AdjacencyListGraph::undirected();
        let vs: Vec<_> = (0..5).map(|i| graph.insert_vertex(i)).collect();
        graph.insert_edge(vs[0], vs[1], 3).unwrap();
        graph.insert_edge(vs[1], vs[2], 1).unwrap();
        graph.insert_edge(vs[0], vs[2], 2).unwrap();
        graph.insert_edge(vs[3], vs[4], 7).unwrap();

        let by_kruskal = kruskal(&graph).unwrap();
        let by_prim = prim_jarnik(&graph).unwrap();
        assert_eq!(by_kruskal.len(), 3);
        assert_eq!(by_prim.len(), 3);
        assert_eq!(total_weight(&graph, &by_kruskal).unwrap(), 10.0);
        assert_eq!(total_weight(&graph, &by_prim).unwrap(), 10.0);
    }

    #[test]
    fn test_negative_weights_and_ties_give_equal_totals() {
        let mut graph: AdjacencyMatrixGraph<u8, i32> = AdjacencyMatrixGraph::undirected();
        let vs: Vec<_> = (0..4).map(|i| graph.insert_vertex(i)).collect();
        graph.insert_edge(vs[0], vs[1], -4).unwrap();
        graph.insert_edge(vs[1], vs[2], 2).unwrap();
        graph.insert_edge(vs[2], vs[3], 2).unwrap();
        graph.insert_edge(vs[3], vs[0], 2).unwrap();
        graph.insert_edge(vs[0], vs[2], 2).unwrap();

        let k = total_weight(&graph, &kruskal(&graph).unwrap()).unwrap();
        let p = total_weight(&graph, &prim_jarnik(&graph).unwrap()).unwrap();
        assert_eq!(k, 0.0);
        assert_eq!(k, p);
    }

    #[test]
    fn test_self_loops_never_enter_the_tree() {
        let mut graph: AdjacencyListGraph<u8, u32> = AdjacencyListGraph::undirected();
        let a = graph.insert_vertex(0);
        let b = graph.insert_vertex(1);
        graph.insert_edge(a, a, 0).unwrap();
        let ab = graph.insert_edge(a, b, 9).unwrap().unwrap();

        assert_eq!(kruskal(&graph).unwrap(), vec![ab]);
        assert_eq!(prim_jarnik(&graph).unwrap(), vec![ab]);
    }

    #[test]
    fn test_empty_graph() {
        let graph: AdjacencyListGraph<u8, u32> = AdjacencyListGraph::undirected();
        assert!(kruskal(&graph).unwrap().is_empty());
        assert!(prim_jarnik(&graph).unwrap().is_empty());
    }
}
