//! Concept extraction data models.
//!
//! - [`Segment`] — one non-empty input line with its indentation level
//! - [`Concept`] — a node in the intermediate hierarchy (forest)
//! - [`ExtractorConfig`] — tuning parameters for fingerprints and similarity

use crate::error::NotegraphError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ============================================================================
// Segment
// ============================================================================

/// One segmented input line: indentation level plus stripped text.
///
/// `level` counts leading whitespace and heading-marker characters
/// (space, tab, `#`). It orders concepts relative to each other and is
/// not guaranteed contiguous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Indentation depth (count of leading marker characters)
    pub level: usize,
    /// Line content with markers and surrounding whitespace stripped
    pub text: String,
}

// ============================================================================
// Concept
// ============================================================================

/// A node in the intermediate concept hierarchy.
///
/// Concepts form a forest: consecutive level-0 lines each become a root.
/// `children` is exclusive ownership (tree, no cycles); `related` is a
/// label-based cross-reference resolved later against the materialized
/// node list, not ownership.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Concept {
    /// Trimmed, marker-stripped label
    pub text: String,
    /// Indentation level from the segmenter (ordering only)
    pub level: usize,
    /// Ordered child concepts
    pub children: Vec<Concept>,
    /// Labels of other concepts whose similarity exceeds the threshold.
    /// BTreeSet keeps discovery order-independent output deterministic.
    pub related: BTreeSet<String>,
    /// Fixed-length token fingerprint, present once computed
    pub vector: Option<Vec<f64>>,
}

impl Concept {
    /// Create a leaf concept with no children, no related labels.
    pub fn new(text: impl Into<String>, level: usize, vector: Vec<f64>) -> Self {
        Self {
            text: text.into(),
            level,
            children: Vec::new(),
            related: BTreeSet::new(),
            vector: Some(vector),
        }
    }

    /// Total number of concepts in this subtree (self included).
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Concept::count).sum::<usize>()
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Tuning parameters for the fingerprint and similarity computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Fingerprint vector dimensionality (default: 100)
    pub vector_dims: usize,
    /// Cosine similarity threshold above which two concepts are related
    /// (default: 0.5)
    pub similarity_threshold: f64,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            vector_dims: 100,
            similarity_threshold: 0.5,
        }
    }
}

impl ExtractorConfig {
    /// Check that all parameters are in range.
    pub fn validate(&self) -> Result<(), NotegraphError> {
        if self.vector_dims == 0 {
            return Err(NotegraphError::InvalidConfig(
                "vector_dims must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(NotegraphError::InvalidConfig(format!(
                "similarity_threshold must be in [0, 1], got {}",
                self.similarity_threshold
            )));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
