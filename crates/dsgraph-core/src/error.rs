//! Error types and exit codes for dsgraph
//!
//! Exit codes used by the command-line front end:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, bad argument to a graph operation)
//! - 3: Data error (a vertex or edge handle that does not belong to the graph)

mod macros;

use thiserror::Error;

use crate::graph::{Edge, Vertex};

/// Exit codes reported by the dsgraph binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - stale or foreign handle (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graph operations
#[derive(Error, Debug)]
pub enum GraphError {
    // Invalid-handle errors (exit code 3)
    #[error("vertex {vertex} does not belong to this graph")]
    InvalidVertex { vertex: Vertex },

    #[error("edge {edge} does not belong to this graph")]
    InvalidEdge { edge: Edge },

    // Usage errors (exit code 2)
    #[error("invalid {context}: {value}")]
    InvalidArgument { context: String, value: String },

    #[error("{0}")]
    UsageError(String),

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for an argument that is well-typed but not acceptable
    pub fn invalid_argument(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidArgument {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Returns true for errors raised by a foreign or removed handle
    pub fn is_invalid_handle(&self) -> bool {
        matches!(
            self,
            GraphError::InvalidVertex { .. } | GraphError::InvalidEdge { .. }
        )
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::InvalidArgument { .. } | GraphError::UsageError(_) => ExitCode::Usage,

            GraphError::InvalidVertex { .. } | GraphError::InvalidEdge { .. } => ExitCode::Data,

            GraphError::Io(_) | GraphError::Toml(_) | GraphError::Other(_) => ExitCode::Failure,
        }
    }
}

/// Result type alias for dsgraph operations
pub type Result<T> = std::result::Result<T, GraphError>;
