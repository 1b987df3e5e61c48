//! Opaque vertex and edge handles
//!
//! A handle is the pair (owning graph id, slot index). Slot indices are never
//! reused within one graph, so a handle to a removed element stays invalid,
//! and the graph id keeps handles from one instance out of every other.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of one graph instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GraphId(u64);

impl GraphId {
    /// Allocate a fresh id
    pub(crate) fn next() -> Self {
        GraphId(NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "g{}", self.0)
    }
}

/// Handle to a vertex of one graph
///
/// Vertices are created only by [`Graph::insert_vertex`](crate::graph::Graph::insert_vertex).
/// They are `Copy` and can be stored, compared and used as map keys; passing
/// one to a different graph, or after removal, yields
/// [`GraphError::InvalidVertex`](crate::error::GraphError::InvalidVertex).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vertex {
    graph: GraphId,
    index: usize,
}

impl Vertex {
    pub(crate) const fn new(graph: GraphId, index: usize) -> Self {
        Vertex { graph, index }
    }

    pub(crate) const fn graph(self) -> GraphId {
        self.graph
    }

    pub(crate) const fn index(self) -> usize {
        self.index
    }
}

impl fmt::Debug for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vertex({}:{})", self.graph, self.index)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.index)
    }
}

/// Handle to an edge of one graph
///
/// Same rules as [`Vertex`]: opaque, `Copy`, bound to its graph.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    graph: GraphId,
    index: usize,
}

impl Edge {
    pub(crate) const fn new(graph: GraphId, index: usize) -> Self {
        Edge { graph, index }
    }

    pub(crate) const fn graph(self) -> GraphId {
        self.graph
    }

    pub(crate) const fn index(self) -> usize {
        self.index
    }
}

impl fmt::Debug for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edge({}:{})", self.graph, self.index)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_graph_ids_are_unique() {
        let a = GraphId::next();
        let b = GraphId::next();
        assert_ne!(a, b);
    }

    #[test]
    fn test_same_index_different_graph_differs() {
        let a = Vertex::new(GraphId::next(), 0);
        let b = Vertex::new(GraphId::next(), 0);
        assert_ne!(a, b);

        let set: HashSet<Vertex> = [a, b, a].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_display_format() {
        let g = GraphId::next();
        assert_eq!(Vertex::new(g, 3).to_string(), "v3");
        assert_eq!(Edge::new(g, 7).to_string(), "e7");
        assert!(format!("{:?}", Edge::new(g, 7)).starts_with("Edge(g"));
    }
}
