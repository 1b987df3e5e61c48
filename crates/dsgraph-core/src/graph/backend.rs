//! Run-time backend selection

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;
use crate::graph::{
    AdjacencyListGraph, AdjacencyMapGraph, AdjacencyMatrixGraph, EdgeListGraph, Graph,
};

/// Storage strategy behind a [`Graph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Backend {
    EdgeList,
    AdjacencyList,
    #[default]
    AdjacencyMap,
    AdjacencyMatrix,
}

impl Backend {
    pub const ALL: [Backend; 4] = [
        Backend::EdgeList,
        Backend::AdjacencyList,
        Backend::AdjacencyMap,
        Backend::AdjacencyMatrix,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::EdgeList => "edge-list",
            Backend::AdjacencyList => "adjacency-list",
            Backend::AdjacencyMap => "adjacency-map",
            Backend::AdjacencyMatrix => "adjacency-matrix",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Backend::ALL
            .into_iter()
            .find(|backend| backend.as_str() == wanted)
            .ok_or_else(|| {
                GraphError::invalid_argument(
                    "backend",
                    format!("{s} (expected: edge-list, adjacency-list, adjacency-map, adjacency-matrix)"),
                )
            })
    }
}

/// Boxed graph with the given backend and directedness
pub fn new_graph<V: 'static, E: 'static>(
    backend: Backend,
    directed: bool,
) -> Box<dyn Graph<VertexValue = V, EdgeValue = E>> {
    match backend {
        Backend::EdgeList => Box::new(EdgeListGraph::new(directed)),
        Backend::AdjacencyList => Box::new(AdjacencyListGraph::new(directed)),
        Backend::AdjacencyMap => Box::new(AdjacencyMapGraph::new(directed)),
        Backend::AdjacencyMatrix => Box::new(AdjacencyMatrixGraph::new(directed)),
    }
}
