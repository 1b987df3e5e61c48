//! Adjacency-matrix backend
//!
//! A square matrix of optional edge indices, addressed by vertex slot index.
//! Slot indices are assigned once and never reused, so rows and columns of
//! removed vertices simply stay empty. The matrix grows by one row and one
//! column per inserted vertex. Undirected edges occupy two mirrored cells.

use crate::error::{GraphError, Result};
use crate::graph::shared::{self, EdgeRecord, Registry};
use crate::graph::{Edge, Graph, GraphId, Handles, Vertex};

/// Graph stored as a dense adjacency matrix
#[derive(Debug, Clone)]
pub struct AdjacencyMatrixGraph<V, E> {
    directed: bool,
    vertices: Registry<V>,
    edges: Registry<EdgeRecord<E>>,
    matrix: Vec<Vec<Option<usize>>>,
}

impl<V, E> AdjacencyMatrixGraph<V, E> {
    pub fn new(directed: bool) -> Self {
        let id = GraphId::next();
        Self {
            directed,
            vertices: Registry::new(id),
            edges: Registry::new(id),
            matrix: Vec::new(),
        }
    }

    pub fn directed() -> Self {
        Self::new(true)
    }

    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Side length of the matrix (vertex slots ever allocated)
    pub fn dimension(&self) -> usize {
        self.matrix.len()
    }

    fn cell(&self, row: usize, column: usize) -> Option<usize> {
        self.matrix.get(row)?.get(column).copied().flatten()
    }

    fn set_cell(&mut self, row: usize, column: usize, value: Option<usize>) {
        if let Some(cell) = self.matrix.get_mut(row).and_then(|r| r.get_mut(column)) {
            *cell = value;
        }
    }

    fn grow(&mut self, dimension: usize) {
        for row in &mut self.matrix {
            row.resize(dimension, None);
        }
        self.matrix.resize_with(dimension, || vec![None; dimension]);
    }

    /// Cells along a row (outgoing) or a column (incoming), in vertex order
    fn line(&self, vertex: usize, outgoing: bool) -> Handles<'_, Edge> {
        Box::new(
            self.vertices
                .indices()
                .filter_map(move |other| {
                    if outgoing {
                        self.cell(vertex, other)
                    } else {
                        self.cell(other, vertex)
                    }
                })
                .map(move |i| self.edges.edge_handle(i)),
        )
    }
}

impl<V, E> Graph for AdjacencyMatrixGraph<V, E> {
    type VertexValue = V;
    type EdgeValue = E;

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    fn num_edges(&self) -> usize {
        self.edges.len()
    }

    fn vertices(&self) -> Handles<'_, Vertex> {
        Box::new(
            self.vertices
                .indices()
                .map(move |i| self.vertices.vertex_handle(i)),
        )
    }

    fn edges(&self) -> Handles<'_, Edge> {
        Box::new(self.edges.indices().map(move |i| self.edges.edge_handle(i)))
    }

    fn vertex_value(&self, vertex: Vertex) -> Result<&V> {
        self.vertices.vertex(vertex)
    }

    fn edge_value(&self, edge: Edge) -> Result<&E> {
        self.edges.edge(edge).map(|r| &r.value)
    }

    fn get_edge(&self, u: Vertex, v: Vertex) -> Result<Option<Edge>> {
        self.vertices.vertex(u)?;
        self.vertices.vertex(v)?;
        Ok(self
            .cell(u.index(), v.index())
            .map(|i| self.edges.edge_handle(i)))
    }

    fn end_vertices(&self, edge: Edge) -> Result<(Vertex, Vertex)> {
        let record = self.edges.edge(edge)?;
        Ok((
            self.vertices.vertex_handle(record.origin),
            self.vertices.vertex_handle(record.dest),
        ))
    }

    fn opposite(&self, vertex: Vertex, edge: Edge) -> Result<Vertex> {
        shared::opposite_of(&self.vertices, &self.edges, vertex, edge)
    }

    fn out_degree(&self, vertex: Vertex) -> Result<usize> {
        Ok(self.outgoing_edges(vertex)?.count())
    }

    fn in_degree(&self, vertex: Vertex) -> Result<usize> {
        Ok(self.incoming_edges(vertex)?.count())
    }

    fn outgoing_edges(&self, vertex: Vertex) -> Result<Handles<'_, Edge>> {
        self.vertices.vertex(vertex)?;
        Ok(self.line(vertex.index(), true))
    }

    fn incoming_edges(&self, vertex: Vertex) -> Result<Handles<'_, Edge>> {
        self.vertices.vertex(vertex)?;
        Ok(self.line(vertex.index(), !self.directed))
    }

    fn insert_vertex(&mut self, value: V) -> Vertex {
        let index = self.vertices.insert(value);
        self.grow(self.vertices.slot_count());
        tracing::trace!(index, dimension = self.matrix.len(), "matrix grown");
        self.vertices.vertex_handle(index)
    }

    fn insert_edge(&mut self, u: Vertex, v: Vertex, value: E) -> Result<Option<Edge>> {
        if let Some(existing) = self.get_edge(u, v)? {
            tracing::trace!(%u, %v, %existing, "edge already present");
            return Ok(None);
        }

        let (origin, dest) = (u.index(), v.index());
        let index = self.edges.insert(EdgeRecord::new(value, origin, dest));
        self.set_cell(origin, dest, Some(index));
        if !self.directed {
            self.set_cell(dest, origin, Some(index));
        }
        Ok(Some(self.edges.edge_handle(index)))
    }

    fn remove_vertex(&mut self, vertex: Vertex) -> Result<V> {
        let incident = shared::incident_edges(self, vertex)?;
        tracing::debug!(%vertex, edges = incident.len(), "remove_vertex");
        for edge in incident {
            self.remove_edge(edge)?;
        }
        self.vertices
            .remove(vertex.index())
            .ok_or(GraphError::InvalidVertex { vertex })
    }

    fn remove_edge(&mut self, edge: Edge) -> Result<E> {
        self.edges.edge(edge)?;
        let record = self
            .edges
            .remove(edge.index())
            .ok_or(GraphError::InvalidEdge { edge })?;

        self.set_cell(record.origin, record.dest, None);
        if !self.directed {
            self.set_cell(record.dest, record.origin, None);
        }
        Ok(record.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_are_never_reused() {
        let mut graph: AdjacencyMatrixGraph<&str, u32> = AdjacencyMatrixGraph::directed();
        let a = graph.insert_vertex("a");
        let b = graph.insert_vertex("b");
        graph.remove_vertex(a).unwrap();
        let c = graph.insert_vertex("c");

        assert_eq!(graph.dimension(), 3);
        assert_ne!(a, c);
        assert!(!graph.contains_vertex(a));
        assert_eq!(graph.vertices().collect::<Vec<_>>(), vec![b, c]);
    }

    #[test]
    fn test_undirected_edge_fills_two_cells() {
        let mut graph: AdjacencyMatrixGraph<&str, u32> = AdjacencyMatrixGraph::undirected();
        let a = graph.insert_vertex("a");
        let b = graph.insert_vertex("b");
        let e = graph.insert_edge(a, b, 7).unwrap().unwrap();

        assert_eq!(graph.cell(a.index(), b.index()), Some(e.index()));
        assert_eq!(graph.cell(b.index(), a.index()), Some(e.index()));

        graph.remove_edge(e).unwrap();
        assert_eq!(graph.cell(a.index(), b.index()), None);
        assert_eq!(graph.cell(b.index(), a.index()), None);
    }

    #[test]
    fn test_directed_row_and_column_scans() {
        let mut graph: AdjacencyMatrixGraph<&str, u32> = AdjacencyMatrixGraph::directed();
        let a = graph.insert_vertex("a");
        let b = graph.insert_vertex("b");
        let c = graph.insert_vertex("c");
        let ab = graph.insert_edge(a, b, 1).unwrap().unwrap();
        let cb = graph.insert_edge(c, b, 2).unwrap().unwrap();

        assert_eq!(graph.outgoing_edges(a).unwrap().collect::<Vec<_>>(), vec![ab]);
        assert_eq!(
            graph.incoming_edges(b).unwrap().collect::<Vec<_>>(),
            vec![ab, cb]
        );
        assert_eq!(graph.in_degree(a).unwrap(), 0);
    }
}
