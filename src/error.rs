//! Crate error types.

use thiserror::Error;

/// Errors produced by the notegraph engine.
///
/// Concept extraction itself never fails for any input text — malformed
/// indentation degrades into sibling placement rather than an error. The
/// fallible surface is limited to configuration validation and node lookups
/// on a running simulation.
#[derive(Debug, Error)]
pub enum NotegraphError {
    /// A configuration parameter is outside its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A node id passed to `pin`/`unpin` does not exist in the simulation.
    #[error("unknown node id: {0}")]
    UnknownNode(u64),
}
