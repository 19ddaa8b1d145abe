//! Graph materialization — concept forest → node/link graph.
//!
//! - [`models`] — node/link types and the petgraph-backed [`ConceptGraph`]
//! - [`materialize`] — flattens a concept forest into nodes and links
//! - [`engine`] — the extraction pipeline entry point

pub mod engine;
pub mod materialize;
pub mod models;

pub use engine::{extract_concepts, GraphEngine};
pub use materialize::materialize;
pub use models::{ConceptGraph, GraphData, GraphLink, GraphNode, LinkKind, NodeKind, NodeStyle};
