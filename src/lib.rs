//! Notegraph
//!
//! Knowledge-graph construction and layout engine for student notes:
//! - Text segmenter and indentation-stack concept tree builder
//! - Lexical fingerprint similarity for cross-tree relation links
//! - Graph materializer (nodes + hierarchy/relation links)
//! - Force-directed layout with drag pin/unpin and zoom/pan transform
//!
//! The pipeline is one-directional and pure: raw text → segments →
//! concept forest → similarity links → graph → positions. The host
//! application owns rendering, storage, and networking.

pub mod concepts;
pub mod error;
pub mod graph;
pub mod layout;

pub use concepts::ExtractorConfig;
pub use error::NotegraphError;
pub use graph::{extract_concepts, ConceptGraph, GraphData, GraphEngine};
pub use layout::{LayoutConfig, NodePosition, Simulation, Viewport};

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

// ============================================================================
// YAML config (deserialization target for the CLI)
// ============================================================================

/// Top-level YAML configuration file structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub extractor: ExtractorConfig,
    pub layout: LayoutConfig,
}

impl EngineConfig {
    /// Load configuration from a YAML file, validating all parameters.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check all sections.
    pub fn validate(&self) -> Result<()> {
        self.extractor.validate()?;
        self.layout.validate()?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_engine_config_defaults_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.extractor.vector_dims, 100);
        assert!((config.layout.collision_radius - 70.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_engine_config_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "extractor:\n  similarity_threshold: 0.3\nlayout:\n  collision_radius: 50"
        )
        .unwrap();

        let config = EngineConfig::from_yaml_file(file.path()).unwrap();
        assert!((config.extractor.similarity_threshold - 0.3).abs() < f64::EPSILON);
        assert!((config.layout.collision_radius - 50.0).abs() < f64::EPSILON);
        // Untouched sections keep their defaults
        assert_eq!(config.extractor.vector_dims, 100);
    }

    #[test]
    fn test_engine_config_rejects_invalid_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "extractor:\n  similarity_threshold: 3.0").unwrap();
        assert!(EngineConfig::from_yaml_file(file.path()).is_err());
    }

    #[test]
    fn test_engine_config_missing_file_errors() {
        assert!(EngineConfig::from_yaml_file("/nonexistent/config.yaml").is_err());
    }
}
