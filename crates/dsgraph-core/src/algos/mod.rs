//! Graph algorithm implementations
//!
//! Every algorithm reads the graph only through [`Graph`](crate::graph::Graph)
//! and never mutates it:
//! - `bfs` / `dfs`: discovery maps from a start vertex
//! - `dijkstra`: single-source distances and the shortest-path tree
//! - `mst`: Kruskal and Prim-Jarnik spanning forests
//! - `shared`: path reconstruction and weight totals

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod mst;
pub mod shared;

pub use bfs::bfs;
pub use dfs::dfs;
pub use dijkstra::{dijkstra, shortest_path_tree};
pub use mst::{kruskal, prim_jarnik};
pub use shared::{path_to, total_weight};
