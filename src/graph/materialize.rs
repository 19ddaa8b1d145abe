//! Concept forest → graph materialization.
//!
//! Walks each root concept recursively, assigning monotonic ids, a
//! [`NodeKind`] from hierarchy depth, and a hierarchy link from the parent
//! whenever one exists. Relation links are resolved in a second pass over
//! the complete node list so a `related` label always finds its node
//! regardless of traversal order.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::concepts::Concept;

use super::models::{ConceptGraph, GraphNode, LinkKind, NodeKind};

/// Flatten a concept forest into a [`ConceptGraph`].
///
/// Pass 1 emits all nodes and hierarchy links depth-first. Pass 2 resolves
/// each concept's `related` labels against the complete node list
/// (first-matching node by ascending id wins) and emits relation links,
/// one per unordered node pair. Labels that match no node are dropped.
pub fn materialize(forest: &[Concept]) -> ConceptGraph {
    let total: usize = forest.iter().map(Concept::count).sum();
    let mut graph = ConceptGraph::with_capacity(total, total * 2);
    let mut next_id: u64 = 0;
    // (node id, related labels) gathered during the node pass
    let mut pending: Vec<(u64, BTreeSet<String>)> = Vec::new();

    for root in forest {
        emit_subtree(root, 0, None, &mut graph, &mut next_id, &mut pending);
    }

    // Label → first node carrying it, by ascending id
    let mut by_label: HashMap<String, u64> = HashMap::new();
    for node in graph.nodes() {
        by_label.entry(node.text.clone()).or_insert(node.id);
    }

    let mut seen_pairs: HashSet<(u64, u64)> = HashSet::new();
    for (source, labels) in pending {
        for label in labels {
            let Some(&target) = by_label.get(&label) else {
                continue;
            };
            if target == source {
                continue;
            }
            let pair = (source.min(target), source.max(target));
            if seen_pairs.insert(pair) {
                graph.add_link(source, target, LinkKind::Relation);
            }
        }
    }

    graph
}

fn emit_subtree(
    concept: &Concept,
    depth: usize,
    parent_id: Option<u64>,
    graph: &mut ConceptGraph,
    next_id: &mut u64,
    pending: &mut Vec<(u64, BTreeSet<String>)>,
) {
    let id = *next_id;
    *next_id += 1;

    graph.add_node(GraphNode {
        id,
        text: concept.text.clone(),
        kind: NodeKind::from_depth(depth),
        level: depth,
        parent_id,
    });

    if let Some(parent) = parent_id {
        graph.add_link(parent, id, LinkKind::Hierarchy);
    }

    if !concept.related.is_empty() {
        pending.push((id, concept.related.clone()));
    }

    for child in &concept.children {
        emit_subtree(child, depth + 1, Some(id), graph, next_id, pending);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concepts::{build_forest, link_related, segment, ExtractorConfig};

    fn graph_of(text: &str) -> ConceptGraph {
        let config = ExtractorConfig::default();
        let mut forest = build_forest(segment(text), &config);
        link_related(&mut forest, config.similarity_threshold);
        materialize(&forest)
    }

    #[test]
    fn test_single_root_one_main_node_no_links() {
        let graph = graph_of("Photosynthesis");
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.link_count(), 0);
        let node = graph.get_node(0).unwrap();
        assert_eq!(node.kind, NodeKind::Main);
        assert_eq!(node.level, 0);
        assert_eq!(node.parent_id, None);
    }

    #[test]
    fn test_hierarchy_links_parent_to_child() {
        let graph = graph_of("A\n B\n C\nD");
        assert_eq!(graph.node_count(), 4);

        let nodes = graph.data().nodes;
        let a = nodes.iter().find(|n| n.text == "A").unwrap();
        let b = nodes.iter().find(|n| n.text == "B").unwrap();
        let c = nodes.iter().find(|n| n.text == "C").unwrap();
        let d = nodes.iter().find(|n| n.text == "D").unwrap();

        assert_eq!(a.kind, NodeKind::Main);
        assert_eq!(d.kind, NodeKind::Main);
        assert_eq!(b.kind, NodeKind::Concept);
        assert_eq!(c.kind, NodeKind::Concept);
        assert_eq!(b.parent_id, Some(a.id));
        assert_eq!(c.parent_id, Some(a.id));

        let hierarchy: Vec<(u64, u64)> = graph
            .links()
            .iter()
            .filter(|l| l.kind == LinkKind::Hierarchy)
            .map(|l| (l.source, l.target))
            .collect();
        assert_eq!(hierarchy, vec![(a.id, b.id), (a.id, c.id)]);
        assert!(hierarchy.iter().all(|(s, t)| *s != d.id && *t != d.id));
    }

    #[test]
    fn test_depth_not_raw_level_drives_kind() {
        // Raw indentation jumps 0 → 4, but the child sits at depth 1
        let graph = graph_of("Root\n    Deep");
        let nodes = graph.data().nodes;
        let deep = nodes.iter().find(|n| n.text == "Deep").unwrap();
        assert_eq!(deep.kind, NodeKind::Concept);
        assert_eq!(deep.level, 1);
    }

    #[test]
    fn test_relation_link_emitted_once_per_pair() {
        // Identical token sets in different trees → one relation link
        let graph = graph_of("Cell Energy\n  detail one\ncell energy!");
        let relations: Vec<_> = graph
            .links()
            .iter()
            .filter(|l| l.kind == LinkKind::Relation)
            .map(|l| (l.source, l.target))
            .collect();
        assert_eq!(relations.len(), 1);
        let (s, t) = relations[0];
        assert_eq!(graph.get_node(s).unwrap().text, "Cell Energy");
        assert_eq!(graph.get_node(t).unwrap().text, "cell energy!");
    }

    #[test]
    fn test_relation_resolves_regardless_of_traversal_order() {
        // The related target appears later in traversal order; the
        // second-pass resolution must still find it
        let graph = graph_of("alpha beta\nunrelated thing\nAlpha Beta");
        let relation_count = graph
            .links()
            .iter()
            .filter(|l| l.kind == LinkKind::Relation)
            .count();
        assert_eq!(relation_count, 1);
    }

    #[test]
    fn test_relation_weight_half_hierarchy_full() {
        let graph = graph_of("shared words\n  child node\nshared words again");
        for link in graph.links() {
            match link.kind {
                LinkKind::Hierarchy => assert!((link.value - 1.0).abs() < f64::EPSILON),
                LinkKind::Relation => assert!((link.value - 0.5).abs() < f64::EPSILON),
            }
        }
    }

    #[test]
    fn test_empty_forest_empty_graph() {
        let graph = materialize(&[]);
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.link_count(), 0);
    }

    #[test]
    fn test_ids_monotonic_depth_first() {
        let graph = graph_of("A\n B\n  C\nD");
        let nodes = graph.data().nodes;
        let texts: Vec<&str> = nodes.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, vec!["A", "B", "C", "D"]);
        let ids: Vec<u64> = nodes.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }
}
