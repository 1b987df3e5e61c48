//! CLI argument parsing for dsgraph
//!
//! Global flags select the backend, directedness and logging; every
//! subcommand takes the same graph description (`--edge`, `--vertex`).

pub mod args;
pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use dsgraph_core::graph::Backend;
pub use args::GraphArgs;
use parse::parse_backend;

/// dsgraph - build a small graph and run classical algorithms on it
#[derive(Parser, Debug)]
#[command(name = "dsgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true, env = "DSGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Storage backend: edge-list, adjacency-list, adjacency-map, adjacency-matrix
    #[arg(long, global = true, value_parser = parse_backend)]
    pub backend: Option<Backend>,

    /// Build a directed graph
    #[arg(long, global = true)]
    pub directed: bool,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. info, dsgraph_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Breadth-first traversal from a vertex
    Bfs {
        /// Vertex to start from
        #[arg(long, short)]
        start: String,

        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Depth-first traversal from a vertex
    Dfs {
        /// Vertex to start from
        #[arg(long, short)]
        start: String,

        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Shortest distances and shortest-path tree from a source
    Dijkstra {
        /// Source vertex
        #[arg(long, short)]
        source: String,

        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Shortest path between two vertices
    Path {
        /// Start of the path
        #[arg(long)]
        from: String,

        /// End of the path
        #[arg(long)]
        to: String,

        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Minimum spanning tree (forest)
    Mst {
        /// Algorithm to use
        #[arg(long, short, value_enum, default_value = "kruskal")]
        algorithm: MstAlgorithm,

        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Vertex and edge counts with per-vertex degrees
    Stats {
        #[command(flatten)]
        graph: GraphArgs,
    },
}

/// Spanning tree algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MstAlgorithm {
    Kruskal,
    Prim,
}
