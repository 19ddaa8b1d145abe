//! Concept tree builder — segments → concept forest.
//!
//! Maintains an explicit stack of "open" concepts tagged with their levels.
//! For each incoming segment, the stack is popped while its top has
//! `level >= incoming level`, so a concept only nests under a strictly
//! lower-level ancestor. Equal-level lines become siblings under the same
//! parent, never children of their predecessor.

use super::models::{Concept, ExtractorConfig, Segment};
use super::similarity::fingerprint;

/// Build a concept forest from segmented lines.
///
/// Each segment becomes a [`Concept`] with its fingerprint vector computed
/// immediately. Consecutive level-0 lines each become separate roots, so
/// the result is a forest, not a single tree. A child line with fewer
/// leading markers than its true parent silently becomes a sibling —
/// malformed indentation is a modeling limitation, never an error.
pub fn build_forest(segments: Vec<Segment>, config: &ExtractorConfig) -> Vec<Concept> {
    let mut roots: Vec<Concept> = Vec::new();
    // Stack of open concepts: (level, child-index path from the forest root)
    let mut stack: Vec<(usize, Vec<usize>)> = Vec::new();

    for seg in segments {
        let vector = fingerprint(&seg.text, config.vector_dims);
        let concept = Concept::new(seg.text, seg.level, vector);

        // A concept only nests under a strictly-lower-level ancestor
        while stack.last().is_some_and(|(level, _)| *level >= concept.level) {
            stack.pop();
        }

        let level = concept.level;
        let path = match stack.last() {
            Some((_, parent_path)) => {
                let parent = concept_at_mut(&mut roots, parent_path);
                parent.children.push(concept);
                let mut path = parent_path.clone();
                path.push(parent.children.len() - 1);
                path
            }
            None => {
                roots.push(concept);
                vec![roots.len() - 1]
            }
        };
        stack.push((level, path));
    }

    roots
}

/// Resolve a child-index path to a mutable concept reference.
fn concept_at_mut<'a>(roots: &'a mut [Concept], path: &[usize]) -> &'a mut Concept {
    let mut current = &mut roots[path[0]];
    for &idx in &path[1..] {
        current = &mut current.children[idx];
    }
    current
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concepts::segmenter::segment;

    fn forest_of(text: &str) -> Vec<Concept> {
        build_forest(segment(text), &ExtractorConfig::default())
    }

    #[test]
    fn test_single_line_single_root() {
        let forest = forest_of("Biology");
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].text, "Biology");
        assert!(forest[0].children.is_empty());
        assert!(forest[0].vector.is_some());
    }

    #[test]
    fn test_nesting_under_lower_level() {
        let forest = forest_of("Root\n  Child\n    Grandchild");
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].children.len(), 1);
        assert_eq!(forest[0].children[0].text, "Child");
        assert_eq!(forest[0].children[0].children[0].text, "Grandchild");
    }

    #[test]
    fn test_equal_levels_become_siblings() {
        // "A", " B", " C", "D" → roots A and D; A has children [B, C]
        let forest = forest_of("A\n B\n C\nD");
        assert_eq!(forest.len(), 2);
        assert_eq!(forest[0].text, "A");
        assert_eq!(forest[1].text, "D");
        let children: Vec<&str> = forest[0].children.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(children, vec!["B", "C"]);
        assert!(forest[1].children.is_empty());
    }

    #[test]
    fn test_consecutive_level_zero_lines_all_roots() {
        let forest = forest_of("One\nTwo\nThree");
        assert_eq!(forest.len(), 3);
        assert!(forest.iter().all(|c| c.children.is_empty()));
    }

    #[test]
    fn test_dedent_closes_deeper_branches() {
        let forest = forest_of("A\n  B\n    C\n  D");
        // D dedents past C and becomes B's sibling under A
        assert_eq!(forest[0].children.len(), 2);
        assert_eq!(forest[0].children[0].text, "B");
        assert_eq!(forest[0].children[1].text, "D");
        assert_eq!(forest[0].children[0].children[0].text, "C");
    }

    #[test]
    fn test_non_contiguous_levels_still_nest() {
        // Level jump 0 → 4: still a child of the level-0 root
        let forest = forest_of("Root\n    Deep");
        assert_eq!(forest[0].children.len(), 1);
        assert_eq!(forest[0].children[0].text, "Deep");
        assert_eq!(forest[0].children[0].level, 4);
    }

    #[test]
    fn test_shallower_orphan_becomes_new_root() {
        // A level-1 line after a level-2 parent chain pops everything at >= 1
        let forest = forest_of("  First\n Second");
        assert_eq!(forest.len(), 2);
        assert_eq!(forest[1].text, "Second");
    }

    #[test]
    fn test_empty_input_empty_forest() {
        assert!(forest_of("").is_empty());
        assert!(forest_of("\n\n   \n").is_empty());
    }
}
