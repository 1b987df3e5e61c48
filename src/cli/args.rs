use clap::Args;

use super::parse::{parse_edge, EdgeSpec};

/// Graph description shared by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct GraphArgs {
    /// Weighted edge FROM:TO:WEIGHT (repeatable; default: built-in city sample)
    #[arg(long = "edge", short = 'e', value_parser = parse_edge, action = clap::ArgAction::Append)]
    pub edges: Vec<EdgeSpec>,

    /// Vertex with no edges (repeatable)
    #[arg(long = "vertex", action = clap::ArgAction::Append)]
    pub vertices: Vec<String>,
}
