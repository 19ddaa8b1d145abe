//! Concept extraction — text → hierarchical concept forest.
//!
//! Pipeline stages, leaf-first:
//! - [`segmenter`] — splits raw outline text into `(level, text)` segments
//! - [`tree`] — builds the concept forest via an indentation stack
//! - [`similarity`] — token fingerprints + cosine similarity → `related` links
//!
//! The output of this module is a [`Concept`] forest that the graph
//! materializer flattens into nodes and links.

pub mod models;
pub mod segmenter;
pub mod similarity;
pub mod tree;

pub use models::{Concept, ExtractorConfig, Segment};
pub use segmenter::segment;
pub use similarity::{cosine_similarity, fingerprint, link_related, tokenize};
pub use tree::build_forest;
