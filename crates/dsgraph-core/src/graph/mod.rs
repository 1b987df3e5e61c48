//! Graph abstract data type
//!
//! One capability contract, [`Graph`], realized by four storage backends:
//! - [`EdgeListGraph`]: a single edge sequence, every incidence query scans it
//! - [`AdjacencyListGraph`]: per-vertex incidence lists with O(1) removal
//! - [`AdjacencyMapGraph`]: per-vertex maps keyed by the opposite vertex
//! - [`AdjacencyMatrixGraph`]: a square matrix indexed by vertex slot
//!
//! Algorithms in [`crate::algos`] only talk to the contract, so any backend
//! (or a `Box<dyn Graph<..>>` from [`new_graph`]) can be passed to them.

pub mod adjacency_list;
pub mod adjacency_map;
pub mod adjacency_matrix;
pub mod backend;
pub mod edge_list;
pub mod handle;
pub(crate) mod shared;
pub mod weight;

pub use adjacency_list::AdjacencyListGraph;
pub use adjacency_map::AdjacencyMapGraph;
pub use adjacency_matrix::AdjacencyMatrixGraph;
pub use backend::{new_graph, Backend};
pub use edge_list::EdgeListGraph;
pub use handle::{Edge, GraphId, Vertex};
pub use weight::{edge_weight, Weighted};

use crate::error::Result;

/// Lazy, restartable enumeration of vertex or edge handles
pub type Handles<'a, T> = Box<dyn Iterator<Item = T> + 'a>;

/// Capability contract shared by every graph backend
///
/// Handles passed in must come from this same instance and must not have
/// been removed; otherwise the call fails with an invalid-handle error. For
/// undirected graphs the outgoing and incoming views are identical.
pub trait Graph {
    /// Payload stored on each vertex
    type VertexValue;
    /// Payload stored on each edge
    type EdgeValue;

    /// Fixed at construction
    fn is_directed(&self) -> bool;

    fn num_vertices(&self) -> usize;

    fn num_edges(&self) -> usize;

    /// All vertices, in insertion order
    fn vertices(&self) -> Handles<'_, Vertex>;

    /// All edges, in insertion order
    fn edges(&self) -> Handles<'_, Edge>;

    fn vertex_value(&self, vertex: Vertex) -> Result<&Self::VertexValue>;

    fn edge_value(&self, edge: Edge) -> Result<&Self::EdgeValue>;

    /// Edge from `u` to `v`, if any
    ///
    /// Symmetric for undirected graphs.
    fn get_edge(&self, u: Vertex, v: Vertex) -> Result<Option<Edge>>;

    /// `(origin, destination)` of `edge`
    fn end_vertices(&self, edge: Edge) -> Result<(Vertex, Vertex)>;

    /// Endpoint of `edge` other than `vertex`
    ///
    /// Fails with an invalid-argument error when `vertex` is not incident
    /// to `edge`.
    fn opposite(&self, vertex: Vertex, edge: Edge) -> Result<Vertex>;

    fn out_degree(&self, vertex: Vertex) -> Result<usize>;

    fn in_degree(&self, vertex: Vertex) -> Result<usize>;

    fn outgoing_edges(&self, vertex: Vertex) -> Result<Handles<'_, Edge>>;

    fn incoming_edges(&self, vertex: Vertex) -> Result<Handles<'_, Edge>>;

    fn insert_vertex(&mut self, value: Self::VertexValue) -> Vertex;

    /// Connect `u` to `v`
    ///
    /// Returns `Ok(None)` and leaves the graph untouched when an edge
    /// between the pair already exists (either orientation for undirected
    /// graphs).
    fn insert_edge(&mut self, u: Vertex, v: Vertex, value: Self::EdgeValue) -> Result<Option<Edge>>;

    /// Remove `vertex` and every edge incident to it
    fn remove_vertex(&mut self, vertex: Vertex) -> Result<Self::VertexValue>;

    fn remove_edge(&mut self, edge: Edge) -> Result<Self::EdgeValue>;

    fn is_empty(&self) -> bool {
        self.num_vertices() == 0
    }

    fn contains_vertex(&self, vertex: Vertex) -> bool {
        self.vertex_value(vertex).is_ok()
    }

    fn contains_edge(&self, edge: Edge) -> bool {
        self.edge_value(edge).is_ok()
    }
}
