//! Storage and validation shared by the graph backends
//!
//! - `Registry`: slot arena plus insertion-ordered enumeration
//! - `EdgeRecord`: endpoints and payload common to every backend
//! - handle resolution that rejects foreign and removed handles
//! - the cascading-removal edge collection

use std::collections::HashSet;

use crate::collections::{Position, PositionalList};
use crate::error::{GraphError, Result};
use crate::graph::{Edge, Graph, GraphId, Handles, Vertex};

#[derive(Debug, Clone)]
struct Slot<T> {
    record: T,
    position: Position,
}

/// Arena of records addressed by slot index
///
/// Slots are never reused. Live slots are also kept in a positional list so
/// that enumeration follows insertion order and removal stays O(1).
#[derive(Debug, Clone)]
pub(crate) struct Registry<T> {
    graph: GraphId,
    slots: Vec<Option<Slot<T>>>,
    order: PositionalList<usize>,
}

impl<T> Registry<T> {
    pub(crate) fn new(graph: GraphId) -> Self {
        Self {
            graph,
            slots: Vec::new(),
            order: PositionalList::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }

    /// Number of slots ever allocated, live or not
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn insert(&mut self, record: T) -> usize {
        let index = self.slots.len();
        let position = self.order.push_back(index);
        self.slots.push(Some(Slot { record, position }));
        index
    }

    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        self.slots
            .get(index)
            .and_then(|slot| slot.as_ref())
            .map(|slot| &slot.record)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots
            .get_mut(index)
            .and_then(|slot| slot.as_mut())
            .map(|slot| &mut slot.record)
    }

    pub(crate) fn remove(&mut self, index: usize) -> Option<T> {
        let slot = self.slots.get_mut(index)?.take()?;
        self.order.remove(slot.position);
        Some(slot.record)
    }

    /// Live slot indices in insertion order
    pub(crate) fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.order.iter().copied()
    }

    pub(crate) fn vertex_handle(&self, index: usize) -> Vertex {
        Vertex::new(self.graph, index)
    }

    pub(crate) fn edge_handle(&self, index: usize) -> Edge {
        Edge::new(self.graph, index)
    }

    /// Resolve a vertex handle against this registry
    pub(crate) fn vertex(&self, vertex: Vertex) -> Result<&T> {
        if vertex.graph() != self.graph {
            return Err(GraphError::InvalidVertex { vertex });
        }
        self.get(vertex.index())
            .ok_or(GraphError::InvalidVertex { vertex })
    }

    pub(crate) fn vertex_mut(&mut self, vertex: Vertex) -> Result<&mut T> {
        if vertex.graph() != self.graph {
            return Err(GraphError::InvalidVertex { vertex });
        }
        self.get_mut(vertex.index())
            .ok_or(GraphError::InvalidVertex { vertex })
    }

    /// Resolve an edge handle against this registry
    pub(crate) fn edge(&self, edge: Edge) -> Result<&T> {
        if edge.graph() != self.graph {
            return Err(GraphError::InvalidEdge { edge });
        }
        self.get(edge.index()).ok_or(GraphError::InvalidEdge { edge })
    }
}

/// Endpoints and payload of one edge
#[derive(Debug, Clone)]
pub(crate) struct EdgeRecord<E> {
    pub(crate) value: E,
    pub(crate) origin: usize,
    pub(crate) dest: usize,
}

impl<E> EdgeRecord<E> {
    pub(crate) fn new(value: E, origin: usize, dest: usize) -> Self {
        Self {
            value,
            origin,
            dest,
        }
    }

    /// Endpoint across the edge from `vertex`, if `vertex` is an endpoint
    pub(crate) fn opposite(&self, vertex: usize) -> Option<usize> {
        if vertex == self.origin {
            Some(self.dest)
        } else if vertex == self.dest {
            Some(self.origin)
        } else {
            None
        }
    }

    /// Does this edge run from `u` to `v` (in either direction when undirected)?
    pub(crate) fn connects(&self, u: usize, v: usize, directed: bool) -> bool {
        (self.origin == u && self.dest == v) || (!directed && self.origin == v && self.dest == u)
    }

    /// Is this edge leaving `vertex`?
    pub(crate) fn leaves(&self, vertex: usize, directed: bool) -> bool {
        self.origin == vertex || (!directed && self.dest == vertex)
    }

    /// Is this edge entering `vertex`?
    pub(crate) fn enters(&self, vertex: usize, directed: bool) -> bool {
        self.dest == vertex || (!directed && self.origin == vertex)
    }
}

/// Resolve `opposite` for a backend that stores [`EdgeRecord`]s
pub(crate) fn opposite_of<V, E>(
    vertices: &Registry<V>,
    edges: &Registry<EdgeRecord<E>>,
    vertex: Vertex,
    edge: Edge,
) -> Result<Vertex> {
    vertices.vertex(vertex)?;
    let record = edges.edge(edge)?;
    match record.opposite(vertex.index()) {
        Some(other) => Ok(vertices.vertex_handle(other)),
        None => Err(GraphError::invalid_argument(
            "opposite vertex",
            format!("{vertex} is not incident to {edge}"),
        )),
    }
}

/// Every distinct edge touching `vertex`, outgoing first
pub(crate) fn incident_edges<G>(graph: &G, vertex: Vertex) -> Result<Vec<Edge>>
where
    G: Graph + ?Sized,
{
    let mut seen = HashSet::new();
    let mut incident = Vec::new();
    let outgoing = graph.outgoing_edges(vertex)?;
    let incoming: Handles<'_, Edge> = if graph.is_directed() {
        graph.incoming_edges(vertex)?
    } else {
        Box::new(std::iter::empty())
    };
    for edge in outgoing.chain(incoming) {
        if seen.insert(edge) {
            incident.push(edge);
        }
    }
    Ok(incident)
}
