//! dsgraph core library
//!
//! A graph abstract data type with four interchangeable storage backends,
//! the containers they are built from, and the classical algorithms layered
//! on top: breadth/depth-first traversal, Dijkstra shortest paths and
//! Kruskal / Prim-Jarnik minimum spanning trees.
//!
//! ```
//! use dsgraph_core::algos::{dijkstra, kruskal};
//! use dsgraph_core::graph::{AdjacencyMapGraph, Graph};
//!
//! let mut graph: AdjacencyMapGraph<&str, u32> = AdjacencyMapGraph::undirected();
//! let raleigh = graph.insert_vertex("Raleigh");
//! let durham = graph.insert_vertex("Durham");
//! let cary = graph.insert_vertex("Cary");
//! graph.insert_edge(raleigh, durham, 25)?;
//! graph.insert_edge(raleigh, cary, 10)?;
//! graph.insert_edge(cary, durham, 20)?;
//!
//! let distances = dijkstra(&graph, raleigh)?;
//! assert_eq!(distances[&durham], 25.0);
//! assert_eq!(kruskal(&graph)?.len(), 2);
//! # Ok::<(), dsgraph_core::error::GraphError>(())
//! ```

pub mod algos;
pub mod collections;
pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
