//! Configuration for dsgraph
//!
//! Loaded from a TOML file. It selects defaults for the command-line front
//! end (backend, directedness, logging); it never carries graph data.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::Backend;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Storage backend for graphs built by the CLI
    #[serde(default)]
    pub backend: Backend,

    /// Build directed graphs (default: undirected)
    #[serde(default)]
    pub directed: bool,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging defaults, overridden by `--log-level` / `--log-json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Level or filter directive (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// Emit JSON log lines
    #[serde(default)]
    pub json: bool,
}

impl GraphConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: GraphConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), backend = %config.backend, directed = config.directed, "loaded config");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = GraphConfig::default();
        assert_eq!(config.backend, Backend::AdjacencyMap);
        assert!(!config.directed);
        assert!(config.logging.level.is_none());
        assert!(!config.logging.json);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dsgraph.toml");

        let config = GraphConfig {
            backend: Backend::AdjacencyMatrix,
            directed: true,
            logging: LoggingConfig {
                level: Some("debug".to_string()),
                json: false,
            },
        };
        config.save(&path).unwrap();

        let loaded = GraphConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dsgraph.toml");
        fs::write(&path, "backend = \"edge-list\"\n").unwrap();

        let loaded = GraphConfig::load(&path).unwrap();
        assert_eq!(loaded.backend, Backend::EdgeList);
        assert!(!loaded.directed);
    }

    #[test]
    fn test_unknown_backend_is_a_toml_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dsgraph.toml");
        fs::write(&path, "backend = \"btree\"\n").unwrap();

        let err = GraphConfig::load(&path).unwrap_err();
        assert!(matches!(err, GraphError::Toml(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let err = GraphConfig::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, GraphError::Io(_)));
    }
}
