//! Similarity engine — token fingerprints and cosine similarity.
//!
//! Each concept gets a fixed-length numeric fingerprint built from its
//! tokens: token at position *i* adds `1/(i+1)` into the slot
//! `hash(lowercased token) % dims`. This is a sparse, position-weighted
//! bag-of-words — a cheap deterministic proxy for lexical similarity,
//! not an embedding.
//!
//! After all concepts in an extraction pass carry vectors, every unordered
//! pair is compared via cosine similarity; pairs above the threshold record
//! each other's label in their `related` sets.

use std::collections::{BTreeSet, HashMap};

use super::models::Concept;

// ============================================================================
// Tokenization & hashing
// ============================================================================

/// Split text into lowercase word tokens on non-alphanumeric boundaries.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect()
}

/// FNV-1a 64-bit string hash.
///
/// Fingerprint buckets only need intra-run determinism, but FNV-1a is also
/// stable across runs and platforms, which keeps test fixtures reproducible.
fn fnv1a64(s: &str) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = OFFSET_BASIS;
    for byte in s.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}

// ============================================================================
// Fingerprint
// ============================================================================

/// Compute a fixed-length fingerprint vector for a concept label.
///
/// Token at position *i* (0-based) contributes `1/(i+1)` to the slot
/// `fnv1a64(token) % dims`, weighting earlier tokens more heavily.
/// An empty or punctuation-only label yields the all-zero vector.
pub fn fingerprint(text: &str, dims: usize) -> Vec<f64> {
    let mut vector = vec![0.0; dims];
    for (i, token) in tokenize(text).iter().enumerate() {
        let slot = (fnv1a64(token) % dims as u64) as usize;
        vector[slot] += 1.0 / (i as f64 + 1.0);
    }
    vector
}

// ============================================================================
// Cosine similarity
// ============================================================================

/// Cosine similarity `dot(a,b) / (|a| * |b|)`.
///
/// A zero-magnitude vector on either side yields 0.0, never NaN, so
/// degenerate concepts simply produce no relation links.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}

// ============================================================================
// Cross-tree relation discovery
// ============================================================================

/// Compare every unordered concept pair across the forest and record
/// `related` labels for pairs whose similarity exceeds `threshold`.
///
/// Self-comparison is excluded, as are pairs sharing the same label —
/// a label can only resolve to one node at materialization time, so a
/// same-label link would degenerate into a self-loop.
///
/// O(n²) in concept count; runs synchronously, which is acceptable for
/// the expected tens-to-low-hundreds of concepts per document.
pub fn link_related(forest: &mut [Concept], threshold: f64) {
    // Snapshot (label, vector) for all concepts, pre-order
    let mut entries: Vec<(String, Vec<f64>)> = Vec::new();
    for root in forest.iter() {
        collect_entries(root, &mut entries);
    }

    let mut related: HashMap<String, BTreeSet<String>> = HashMap::new();
    for i in 0..entries.len() {
        for j in (i + 1)..entries.len() {
            let (label_a, vec_a) = &entries[i];
            let (label_b, vec_b) = &entries[j];
            if label_a == label_b {
                continue;
            }
            let similarity = cosine_similarity(vec_a, vec_b);
            if similarity > threshold {
                related
                    .entry(label_a.clone())
                    .or_default()
                    .insert(label_b.clone());
                related
                    .entry(label_b.clone())
                    .or_default()
                    .insert(label_a.clone());
            }
        }
    }

    for root in forest.iter_mut() {
        apply_related(root, &related);
    }
}

fn collect_entries(concept: &Concept, entries: &mut Vec<(String, Vec<f64>)>) {
    let vector = concept.vector.clone().unwrap_or_default();
    entries.push((concept.text.clone(), vector));
    for child in &concept.children {
        collect_entries(child, entries);
    }
}

fn apply_related(concept: &mut Concept, related: &HashMap<String, BTreeSet<String>>) {
    if let Some(labels) = related.get(&concept.text) {
        concept.related = labels.clone();
    }
    for child in &mut concept.children {
        apply_related(child, related);
    }
}

// ============================================================================
// Tests
// ============================================================================
