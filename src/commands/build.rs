//! Graph construction from command-line arguments
//!
//! Vertices are named by strings and created on first mention. When no
//! `--edge` is given the five-city sample below is used.

use std::collections::HashMap;

use dsgraph_core::bail_usage;
use dsgraph_core::error::{GraphError, Result};
use dsgraph_core::graph::{new_graph, Backend, Edge, Graph, Vertex};

use crate::cli::parse::EdgeSpec;
use crate::cli::GraphArgs;

/// Graph type every command works on
pub type CliGraph = Box<dyn Graph<VertexValue = String, EdgeValue = f64>>;

const SAMPLE_CITIES: [&str; 5] = ["Raleigh", "Asheville", "Wilmington", "Durham", "Greenville"];

/// Weights 5..=50 over the ten city pairs in lexicographic index order
pub fn sample_edges() -> Vec<EdgeSpec> {
    let mut edges = Vec::with_capacity(10);
    let mut weight = 5.0;
    for (i, from) in SAMPLE_CITIES.iter().enumerate() {
        for to in &SAMPLE_CITIES[i + 1..] {
            edges.push(EdgeSpec {
                from: from.to_string(),
                to: to.to_string(),
                weight,
            });
            weight += 5.0;
        }
    }
    edges
}

/// A graph plus the name index used to resolve command-line vertex names
pub struct NamedGraph {
    pub graph: CliGraph,
    pub backend: Backend,
    names: HashMap<String, Vertex>,
}

impl NamedGraph {
    pub fn build(backend: Backend, directed: bool, args: &GraphArgs) -> Result<Self> {
        let mut named = NamedGraph {
            graph: new_graph(backend, directed),
            backend,
            names: HashMap::new(),
        };

        let sample;
        let edges = if args.edges.is_empty() {
            sample = sample_edges();
            &sample
        } else {
            &args.edges
        };

        for edge in edges {
            let u = named.vertex_or_insert(&edge.from);
            let v = named.vertex_or_insert(&edge.to);
            if named.graph.insert_edge(u, v, edge.weight)?.is_none() {
                tracing::warn!(from = %edge.from, to = %edge.to, "duplicate edge ignored");
            }
        }
        for name in &args.vertices {
            if name.trim().is_empty() {
                bail_usage!("--vertex name must not be empty");
            }
            named.vertex_or_insert(name.trim());
        }

        tracing::debug!(
            %backend,
            directed,
            vertices = named.graph.num_vertices(),
            edges = named.graph.num_edges(),
            "graph built"
        );
        Ok(named)
    }

    fn vertex_or_insert(&mut self, name: &str) -> Vertex {
        if let Some(&vertex) = self.names.get(name) {
            return vertex;
        }
        let vertex = self.graph.insert_vertex(name.to_string());
        self.names.insert(name.to_string(), vertex);
        vertex
    }

    /// Resolve a vertex name given on the command line
    pub fn vertex(&self, name: &str) -> Result<Vertex> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::invalid_argument("vertex", format!("{} (not in graph)", name)))
    }

    pub fn name(&self, vertex: Vertex) -> Result<&str> {
        self.graph.vertex_value(vertex).map(String::as_str)
    }

    /// `A -- B (w)`, or `A -> B (w)` for directed graphs
    pub fn describe_edge(&self, edge: Edge) -> Result<String> {
        let (u, v) = self.graph.end_vertices(edge)?;
        let arrow = if self.graph.is_directed() { "->" } else { "--" };
        Ok(format!(
            "{} {} {} ({})",
            self.name(u)?,
            arrow,
            self.name(v)?,
            self.graph.edge_value(edge)?
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(edges: &[&str], vertices: &[&str]) -> GraphArgs {
        GraphArgs {
            edges: edges
                .iter()
                .map(|e| crate::cli::parse::parse_edge(e).unwrap())
                .collect(),
            vertices: vertices.iter().map(|v| v.to_string()).collect(),
        }
    }

    #[test]
    fn test_sample_is_complete_graph() {
        let edges = sample_edges();
        assert_eq!(edges.len(), 10);
        assert_eq!(edges[0].weight, 5.0);
        assert_eq!(edges[9].weight, 50.0);
        assert_eq!((edges[4].from.as_str(), edges[4].to.as_str()), ("Asheville", "Wilmington"));
    }

    #[test]
    fn test_build_from_edges_and_isolated_vertices() {
        let named = NamedGraph::build(
            Backend::AdjacencyList,
            false,
            &args(&["a:b:1", "b:c:2", "c:a:3"], &["d"]),
        )
        .unwrap();
        assert_eq!(named.graph.num_vertices(), 4);
        assert_eq!(named.graph.num_edges(), 3);

        let d = named.vertex("d").unwrap();
        assert_eq!(named.graph.out_degree(d).unwrap(), 0);
        assert_eq!(named.name(d).unwrap(), "d");
    }

    #[test]
    fn test_duplicate_edges_are_dropped() {
        let named =
            NamedGraph::build(Backend::EdgeList, false, &args(&["a:b:1", "b:a:7"], &[])).unwrap();
        assert_eq!(named.graph.num_edges(), 1);
    }

    #[test]
    fn test_unknown_vertex_name() {
        let named = NamedGraph::build(Backend::default(), false, &GraphArgs::default()).unwrap();
        assert_eq!(named.graph.num_vertices(), 5);
        let err = named.vertex("Boone").unwrap_err();
        assert_eq!(err.to_string(), "invalid vertex: Boone (not in graph)");
    }

    #[test]
    fn test_describe_edge_direction() {
        let named =
            NamedGraph::build(Backend::AdjacencyMatrix, true, &args(&["a:b:2.5"], &[])).unwrap();
        let edge = named.graph.edges().next().unwrap();
        assert_eq!(named.describe_edge(edge).unwrap(), "a -> b (2.5)");
    }
}
