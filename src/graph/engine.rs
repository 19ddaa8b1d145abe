//! Graph engine — orchestrates the full extraction pipeline.
//!
//! Pipeline: raw text → segments → concept forest (+ fingerprints) →
//! cross-tree relation discovery → materialized node/link graph.
//!
//! Each extraction is a pure function of the input text: no incremental
//! update, no persistence of prior graphs. Regeneration simply builds a
//! fresh graph and discards the old one.

use crate::concepts::{build_forest, link_related, segment, ExtractorConfig};
use crate::error::NotegraphError;

use super::materialize::materialize;
use super::models::ConceptGraph;

/// Extraction engine carrying validated tuning parameters.
pub struct GraphEngine {
    config: ExtractorConfig,
}

impl GraphEngine {
    /// Create an engine with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`NotegraphError::InvalidConfig`] if a parameter is out of
    /// range (zero vector dimension, threshold outside `[0, 1]`).
    pub fn new(config: ExtractorConfig) -> Result<Self, NotegraphError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Run the full extraction pipeline on raw note text.
    ///
    /// Deterministic: the same text always yields an isomorphic node/link
    /// set. Empty or whitespace-only input yields an empty graph, never an
    /// error — extraction cannot fail for any text input.
    pub fn extract(&self, text: &str) -> ConceptGraph {
        let segments = segment(text);
        let mut forest = build_forest(segments, &self.config);
        link_related(&mut forest, self.config.similarity_threshold);
        let graph = materialize(&forest);

        tracing::debug!(
            concepts = forest.iter().map(crate::concepts::Concept::count).sum::<usize>(),
            nodes = graph.node_count(),
            links = graph.link_count(),
            "extracted concept graph"
        );

        graph
    }
}

impl Default for GraphEngine {
    fn default() -> Self {
        Self {
            config: ExtractorConfig::default(),
        }
    }
}

/// Extract a concept graph from raw text with default parameters.
///
/// Convenience entry point for hosts that don't tune the engine.
pub fn extract_concepts(text: &str) -> ConceptGraph {
    GraphEngine::default().extract(text)
}

// ============================================================================
// Tests
// ============================================================================
