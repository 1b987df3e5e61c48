//! CLI commands for dsgraph

pub mod build;
pub mod dispatch;
pub mod mst;
pub mod shortest;
pub mod stats;
pub mod traverse;
