//! Adjacency-map backend
//!
//! Each vertex maps opposite-vertex index to edge index. Edge lookup between
//! two vertices is a single hash probe, and at most one edge exists per
//! ordered pair (per unordered pair for undirected graphs). Incidence
//! enumeration follows hash-map order.

use std::collections::HashMap;

use crate::error::{GraphError, Result};
use crate::graph::shared::{self, EdgeRecord, Registry};
use crate::graph::{Edge, Graph, GraphId, Handles, Vertex};

#[derive(Debug, Clone)]
struct VertexRecord<V> {
    value: V,
    outgoing: HashMap<usize, usize>,
    /// `None` for undirected graphs, where `outgoing` is used for both roles
    incoming: Option<HashMap<usize, usize>>,
}

impl<V> VertexRecord<V> {
    fn new(value: V, directed: bool) -> Self {
        Self {
            value,
            outgoing: HashMap::new(),
            incoming: directed.then(HashMap::new),
        }
    }

    fn incoming(&self) -> &HashMap<usize, usize> {
        self.incoming.as_ref().unwrap_or(&self.outgoing)
    }

    fn incoming_mut(&mut self) -> &mut HashMap<usize, usize> {
        match self.incoming.as_mut() {
            Some(incoming) => incoming,
            None => &mut self.outgoing,
        }
    }
}

/// Graph stored as per-vertex hash maps keyed by the opposite vertex
#[derive(Debug, Clone)]
pub struct AdjacencyMapGraph<V, E> {
    directed: bool,
    vertices: Registry<VertexRecord<V>>,
    edges: Registry<EdgeRecord<E>>,
}

impl<V, E> AdjacencyMapGraph<V, E> {
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

    fn handles<'a>(&'a self, map: &'a HashMap<usize, usize>) -> Handles<'a, Edge> {
        Box::new(map.values().map(move |&i| self.edges.edge_handle(i)))
    }
}

impl<V, E> Graph for AdjacencyMapGraph<V, E> {
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
        self.vertices.vertex(vertex).map(|v| &v.value)
    }

    fn edge_value(&self, edge: Edge) -> Result<&E> {
        self.edges.edge(edge).map(|r| &r.value)
    }

    fn get_edge(&self, u: Vertex, v: Vertex) -> Result<Option<Edge>> {
        let origin = self.vertices.vertex(u)?;
        self.vertices.vertex(v)?;
        Ok(origin
            .outgoing
            .get(&v.index())
            .map(|&i| self.edges.edge_handle(i)))
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
        Ok(self.vertices.vertex(vertex)?.outgoing.len())
    }

    fn in_degree(&self, vertex: Vertex) -> Result<usize> {
        Ok(self.vertices.vertex(vertex)?.incoming().len())
    }

    fn outgoing_edges(&self, vertex: Vertex) -> Result<Handles<'_, Edge>> {
        let record = self.vertices.vertex(vertex)?;
        Ok(self.handles(&record.outgoing))
    }

    fn incoming_edges(&self, vertex: Vertex) -> Result<Handles<'_, Edge>> {
        let record = self.vertices.vertex(vertex)?;
        Ok(self.handles(record.incoming()))
    }

    fn insert_vertex(&mut self, value: V) -> Vertex {
        let index = self.vertices.insert(VertexRecord::new(value, self.directed));
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
        self.vertices
            .vertex_mut(u)?
            .outgoing
            .insert(v.index(), index);
        self.vertices
            .vertex_mut(v)?
            .incoming_mut()
            .insert(u.index(), index);
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
            .map(|record| record.value)
            .ok_or(GraphError::InvalidVertex { vertex })
    }

    fn remove_edge(&mut self, edge: Edge) -> Result<E> {
        self.edges.edge(edge)?;
        let record = self
            .edges
            .remove(edge.index())
            .ok_or(GraphError::InvalidEdge { edge })?;

        if let Some(origin) = self.vertices.get_mut(record.origin) {
            origin.outgoing.remove(&record.dest);
        }
        if let Some(dest) = self.vertices.get_mut(record.dest) {
            dest.incoming_mut().remove(&record.origin);
        }
        Ok(record.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_keyed_by_opposite() {
        let mut graph: AdjacencyMapGraph<&str, u32> = AdjacencyMapGraph::directed();
        let a = graph.insert_vertex("a");
        let b = graph.insert_vertex("b");
        let ab = graph.insert_edge(a, b, 1).unwrap().unwrap();
        let ba = graph.insert_edge(b, a, 2).unwrap().unwrap();

        assert_eq!(graph.get_edge(a, b).unwrap(), Some(ab));
        assert_eq!(graph.get_edge(b, a).unwrap(), Some(ba));
        assert!(graph.insert_edge(a, b, 3).unwrap().is_none());
        assert_eq!(graph.edge_value(ab).unwrap(), &1);
    }

    #[test]
    fn test_undirected_removal_clears_both_maps() {
        let mut graph: AdjacencyMapGraph<&str, u32> = AdjacencyMapGraph::undirected();
        let a = graph.insert_vertex("a");
        let b = graph.insert_vertex("b");
        let e = graph.insert_edge(a, b, 1).unwrap().unwrap();
        assert_eq!(graph.get_edge(b, a).unwrap(), Some(e));

        graph.remove_edge(e).unwrap();
        assert_eq!(graph.out_degree(a).unwrap(), 0);
        assert_eq!(graph.out_degree(b).unwrap(), 0);
        assert_eq!(graph.get_edge(b, a).unwrap(), None);
    }
}
