//! Graph data models.
//!
//! Defines the node/link type system and the graph container:
//!
//! - [`NodeKind`] / [`GraphNode`] — graph vertices derived from concepts
//! - [`LinkKind`] / [`GraphLink`] — hierarchy and relation edges
//! - [`NodeStyle`] — per-kind rendering hints (radius, color, font size)
//! - [`ConceptGraph`] — petgraph wrapper with id ↔ NodeIndex mapping
//! - [`GraphData`] — flat serializable node/link lists for renderers

use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Curvature factor for relation-edge arcs (fraction of node distance).
const RELATION_CURVE_FACTOR: f64 = 0.2;

// ============================================================================
// Node types
// ============================================================================

/// Kind of a graph node, derived from hierarchy depth:
/// 0 → Main, 1 → Concept, 2 → Detail, ≥3 → Subdetail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Main,
    Concept,
    Detail,
    Subdetail,
}

impl NodeKind {
    /// Map hierarchy depth to a node kind.
    pub fn from_depth(depth: usize) -> Self {
        match depth {
            0 => Self::Main,
            1 => Self::Concept,
            2 => Self::Detail,
            _ => Self::Subdetail,
        }
    }

    /// Rendering hints for this kind (radius, fill color, font size).
    pub fn style(&self) -> NodeStyle {
        match self {
            Self::Main => NodeStyle { radius: 50.0, color: "#C8CD44", font_px: 14 },
            Self::Concept => NodeStyle { radius: 30.0, color: "#20263B", font_px: 12 },
            Self::Detail => NodeStyle { radius: 20.0, color: "#E5E7EB", font_px: 10 },
            Self::Subdetail => NodeStyle { radius: 14.0, color: "#6B7280", font_px: 9 },
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Main => write!(f, "main"),
            Self::Concept => write!(f, "concept"),
            Self::Detail => write!(f, "detail"),
            Self::Subdetail => write!(f, "subdetail"),
        }
    }
}

/// Per-kind rendering hints consumed by the host application's renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NodeStyle {
    /// Node circle radius in layout units
    pub radius: f64,
    /// Fill color (hex)
    pub color: &'static str,
    /// Label font size in pixels
    pub font_px: u32,
}

/// A graph vertex derived from a concept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphNode {
    /// Monotonic id assigned at materialization, stable within one build
    pub id: u64,
    /// Concept label
    pub text: String,
    /// Kind derived from hierarchy depth
    pub kind: NodeKind,
    /// Hierarchy depth (0 for roots)
    pub level: usize,
    /// Back-reference to the parent node, if any (not ownership)
    pub parent_id: Option<u64>,
}

// ============================================================================
// Link types
// ============================================================================

/// Kind of a graph edge.
///
/// Hierarchy links mirror tree parent→child edges (strong, short,
/// structural). Relation links mirror `related` cross-references
/// (weaker, longer, decorative).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Hierarchy,
    Relation,
}

impl LinkKind {
    /// Edge weight consumed by layout strength tuning.
    pub fn weight(&self) -> f64 {
        match self {
            Self::Hierarchy => 1.0,
            Self::Relation => 0.5,
        }
    }
}

impl std::fmt::Display for LinkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hierarchy => write!(f, "hierarchy"),
            Self::Relation => write!(f, "relation"),
        }
    }
}

/// A graph edge between two node ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphLink {
    /// Source node id
    pub source: u64,
    /// Target node id
    pub target: u64,
    /// Hierarchy or relation
    pub kind: LinkKind,
    /// Numeric weight (1.0 hierarchy, 0.5 relation)
    pub value: f64,
}

impl GraphLink {
    /// Create a link with the weight implied by its kind.
    pub fn new(source: u64, target: u64, kind: LinkKind) -> Self {
        Self {
            source,
            target,
            kind,
            value: kind.weight(),
        }
    }

    /// Arc offset for rendering, given the Euclidean distance between the
    /// endpoints. Hierarchy edges are straight; relation edges arc with
    /// curvature proportional to distance. Purely a rendering hint — the
    /// layout never consumes it.
    pub fn curve_offset(&self, distance: f64) -> f64 {
        match self.kind {
            LinkKind::Hierarchy => 0.0,
            LinkKind::Relation => distance * RELATION_CURVE_FACTOR,
        }
    }
}

// ============================================================================
// ConceptGraph — petgraph wrapper with id mapping
// ============================================================================

/// Wrapper around `petgraph::DiGraph` with id ↔ NodeIndex mapping.
///
/// The materializer fills it; the layout engine and renderers consume it.
/// Node ids are monotonic `u64` values assigned at materialization time,
/// stable only within one graph build.
#[derive(Debug, Clone, Default)]
pub struct ConceptGraph {
    /// The underlying directed graph
    pub graph: DiGraph<GraphNode, GraphLink>,
    /// Mapping from node id to petgraph NodeIndex
    pub id_to_index: HashMap<u64, NodeIndex>,
}

impl ConceptGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with pre-allocated capacity.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            graph: DiGraph::with_capacity(nodes, edges),
            id_to_index: HashMap::with_capacity(nodes),
        }
    }

    /// Add a node. Returns its NodeIndex; if the id already exists,
    /// returns the existing index.
    pub fn add_node(&mut self, node: GraphNode) -> NodeIndex {
        if let Some(&idx) = self.id_to_index.get(&node.id) {
            return idx;
        }
        let id = node.id;
        let idx = self.graph.add_node(node);
        self.id_to_index.insert(id, idx);
        idx
    }

    /// Add an edge between two nodes identified by id.
    /// Returns `Some(EdgeIndex)` if both endpoints exist, `None` otherwise.
    pub fn add_link(
        &mut self,
        source: u64,
        target: u64,
        kind: LinkKind,
    ) -> Option<petgraph::graph::EdgeIndex> {
        let from_idx = self.id_to_index.get(&source)?;
        let to_idx = self.id_to_index.get(&target)?;
        Some(
            self.graph
                .add_edge(*from_idx, *to_idx, GraphLink::new(source, target, kind)),
        )
    }

    /// Get a node by id.
    pub fn get_node(&self, id: u64) -> Option<&GraphNode> {
        let idx = self.id_to_index.get(&id)?;
        self.graph.node_weight(*idx)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of links.
    pub fn link_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// All nodes, in ascending id order.
    pub fn nodes(&self) -> Vec<&GraphNode> {
        let mut nodes: Vec<&GraphNode> = self
            .graph
            .node_indices()
            .filter_map(|idx| self.graph.node_weight(idx))
            .collect();
        nodes.sort_by_key(|n| n.id);
        nodes
    }

    /// All links, sorted by (source, target, kind).
    pub fn links(&self) -> Vec<&GraphLink> {
        let mut links: Vec<&GraphLink> = self
            .graph
            .edge_indices()
            .filter_map(|idx| self.graph.edge_weight(idx))
            .collect();
        links.sort_by_key(|l| (l.source, l.target, l.kind != LinkKind::Hierarchy));
        links
    }

    /// Flat, serializable snapshot of the graph for renderers and the CLI.
    pub fn data(&self) -> GraphData {
        GraphData {
            nodes: self.nodes().into_iter().cloned().collect(),
            links: self.links().into_iter().cloned().collect(),
        }
    }
}

/// Flat node/link lists — the shape handed to renderers,
/// download-as-image exporters, or further inspection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphData {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

// ============================================================================
// Tests
// ============================================================================
