//! Adjacency-list backend
//!
//! Each vertex owns positional lists of incident edge indices. Each edge
//! remembers the positions of its entries at both endpoints, so removal
//! unlinks them in O(1). An undirected vertex has a single list that serves
//! as both its outgoing and incoming collection.

use crate::collections::{Position, PositionalList};
use crate::error::{GraphError, Result};
use crate::graph::shared::{self, EdgeRecord, Registry};
use crate::graph::{Edge, Graph, GraphId, Handles, Vertex};

#[derive(Debug, Clone)]
struct VertexRecord<V> {
    value: V,
    outgoing: PositionalList<usize>,
    /// `None` for undirected graphs, where `outgoing` is used for both roles
    incoming: Option<PositionalList<usize>>,
}

impl<V> VertexRecord<V> {
    fn new(value: V, directed: bool) -> Self {
        Self {
            value,
            outgoing: PositionalList::new(),
            incoming: directed.then(PositionalList::new),
        }
    }

    fn outgoing(&self) -> &PositionalList<usize> {
        &self.outgoing
    }

    fn incoming(&self) -> &PositionalList<usize> {
        self.incoming.as_ref().unwrap_or(&self.outgoing)
    }

    fn incoming_mut(&mut self) -> &mut PositionalList<usize> {
        match self.incoming.as_mut() {
            Some(incoming) => incoming,
            None => &mut self.outgoing,
        }
    }
}

#[derive(Debug, Clone)]
struct ListEdge<E> {
    record: EdgeRecord<E>,
    at_origin: Position,
    /// `None` for an undirected self-loop, which is listed once
    at_dest: Option<Position>,
}

/// Graph stored as per-vertex incidence lists
#[derive(Debug, Clone)]
pub struct AdjacencyListGraph<V, E> {
    directed: bool,
    vertices: Registry<VertexRecord<V>>,
    edges: Registry<ListEdge<E>>,
}

impl<V, E> AdjacencyListGraph<V, E> {
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

    fn handles<'a>(&'a self, list: &'a PositionalList<usize>) -> Handles<'a, Edge> {
        Box::new(list.iter().map(move |&i| self.edges.edge_handle(i)))
    }

    fn record(&self, edge: Edge) -> Result<&EdgeRecord<E>> {
        self.edges.edge(edge).map(|e| &e.record)
    }
}

impl<V, E> Graph for AdjacencyListGraph<V, E> {
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
        self.record(edge).map(|r| &r.value)
    }

    fn get_edge(&self, u: Vertex, v: Vertex) -> Result<Option<Edge>> {
        let origin = self.vertices.vertex(u)?;
        self.vertices.vertex(v)?;
        let found = origin.outgoing().iter().copied().find(|&i| {
            self.edges
                .get(i)
                .is_some_and(|e| e.record.opposite(u.index()) == Some(v.index()))
        });
        Ok(found.map(|i| self.edges.edge_handle(i)))
    }

    fn end_vertices(&self, edge: Edge) -> Result<(Vertex, Vertex)> {
        let record = self.record(edge)?;
        Ok((
            self.vertices.vertex_handle(record.origin),
            self.vertices.vertex_handle(record.dest),
        ))
    }

    fn opposite(&self, vertex: Vertex, edge: Edge) -> Result<Vertex> {
        self.vertices.vertex(vertex)?;
        let record = self.record(edge)?;
        match record.opposite(vertex.index()) {
            Some(other) => Ok(self.vertices.vertex_handle(other)),
            None => Err(GraphError::invalid_argument(
                "opposite vertex",
                format!("{vertex} is not incident to {edge}"),
            )),
        }
    }

    fn out_degree(&self, vertex: Vertex) -> Result<usize> {
        Ok(self.vertices.vertex(vertex)?.outgoing().len())
    }

    fn in_degree(&self, vertex: Vertex) -> Result<usize> {
        Ok(self.vertices.vertex(vertex)?.incoming().len())
    }

    fn outgoing_edges(&self, vertex: Vertex) -> Result<Handles<'_, Edge>> {
        let record = self.vertices.vertex(vertex)?;
        Ok(self.handles(record.outgoing()))
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

        // Slots are never reused, so the new edge lands in the next slot.
        let index = self.edges.slot_count();
        let at_origin = self.vertices.vertex_mut(u)?.outgoing.push_back(index);
        let at_dest = if !self.directed && u == v {
            None
        } else {
            Some(self.vertices.vertex_mut(v)?.incoming_mut().push_back(index))
        };

        let record = EdgeRecord::new(value, u.index(), v.index());
        let inserted = self.edges.insert(ListEdge {
            record,
            at_origin,
            at_dest,
        });
        debug_assert_eq!(inserted, index);
        Ok(Some(self.edges.edge_handle(inserted)))
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
        let removed = self
            .edges
            .remove(edge.index())
            .ok_or(GraphError::InvalidEdge { edge })?;

        if let Some(origin) = self.vertices.get_mut(removed.record.origin) {
            origin.outgoing.remove(removed.at_origin);
        }
        if let Some(at_dest) = removed.at_dest {
            if let Some(dest) = self.vertices.get_mut(removed.record.dest) {
                dest.incoming_mut().remove(at_dest);
            }
        }
        Ok(removed.record.value)
    }
}
