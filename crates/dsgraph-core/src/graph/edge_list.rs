//! Edge-list backend
//!
//! Vertices and edges are two insertion-ordered registries and nothing else.
//! Every incidence query scans the full edge sequence.

use crate::error::{GraphError, Result};
use crate::graph::shared::{self, EdgeRecord, Registry};
use crate::graph::{Edge, Graph, GraphId, Handles, Vertex};

/// Graph stored as an unordered collection of edges
#[derive(Debug, Clone)]
pub struct EdgeListGraph<V, E> {
    directed: bool,
    vertices: Registry<V>,
    edges: Registry<EdgeRecord<E>>,
}

impl<V, E> EdgeListGraph<V, E> {
    pub fn new(directed: bool) -> Self {
        let id = GraphId::next();
        Self {
            directed,
            vertices: Registry::new(id),
            edges: Registry::new(id),
        }
    }

    pub fn directed() -> Self {
        Self::new(true)
    }

    pub fn undirected() -> Self {
        Self::new(false)
    }

    fn scan<'a>(&'a self, keep: impl Fn(&EdgeRecord<E>) -> bool + 'a) -> Handles<'a, Edge> {
        Box::new(
            self.edges
                .indices()
                .filter(move |&i| self.edges.get(i).is_some_and(&keep))
                .map(move |i| self.edges.edge_handle(i)),
        )
    }
}

impl<V, E> Graph for EdgeListGraph<V, E> {
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
        self.scan(|_| true)
    }

    fn vertex_value(&self, vertex: Vertex) -> Result<&V> {
        self.vertices.vertex(vertex)
    }

    fn edge_value(&self, edge: Edge) -> Result<&E> {
        self.edges.edge(edge).map(|record| &record.value)
    }

    fn get_edge(&self, u: Vertex, v: Vertex) -> Result<Option<Edge>> {
        self.vertices.vertex(u)?;
        self.vertices.vertex(v)?;
        let (u, v, directed) = (u.index(), v.index(), self.directed);
        Ok(self.scan(move |r| r.connects(u, v, directed)).next())
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
        let (index, directed) = (vertex.index(), self.directed);
        Ok(self.scan(move |r| r.leaves(index, directed)))
    }

    fn incoming_edges(&self, vertex: Vertex) -> Result<Handles<'_, Edge>> {
        self.vertices.vertex(vertex)?;
        let (index, directed) = (vertex.index(), self.directed);
        Ok(self.scan(move |r| r.enters(index, directed)))
    }

    fn insert_vertex(&mut self, value: V) -> Vertex {
        let index = self.vertices.insert(value);
        self.vertices.vertex_handle(index)
    }

    fn insert_edge(&mut self, u: Vertex, v: Vertex, value: E) -> Result<Option<Edge>> {
        if let Some(existing) = self.get_edge(u, v)? {
            tracing::trace!(%u, %v, %existing, "edge already present");
            return Ok(None);
        }
        let index = self
            .edges
            .insert(EdgeRecord::new(value, u.index(), v.index()));
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
        self.edges
            .remove(edge.index())
            .map(|record| record.value)
            .ok_or(GraphError::InvalidEdge { edge })
    }
}
