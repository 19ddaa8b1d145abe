//! Text segmenter — raw outline text → `(level, text)` segments.
//!
//! The segmenter understands indentation-based outlines and markdown-style
//! headings uniformly: every leading space, tab, or `#` counts toward the
//! line's level, then the markers are stripped to leave the concept label.

use super::models::Segment;

/// Characters that contribute to a line's level and are stripped from its text.
fn is_marker(c: char) -> bool {
    c == ' ' || c == '\t' || c == '#'
}

/// Split raw multi-line text into ordered `(level, text)` segments.
///
/// - `level` = count of leading marker characters (space, tab, `#`)
/// - `text` = line with leading markers and surrounding whitespace stripped
///
/// Lines that are empty after stripping produce no segment. Output order
/// is input line order. Never fails.
pub fn segment(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();

    for line in text.lines() {
        let level = line.chars().take_while(|c| is_marker(*c)).count();
        let stripped = line.trim_start_matches(is_marker).trim();
        if stripped.is_empty() {
            continue;
        }
        segments.push(Segment {
            level,
            text: stripped.to_string(),
        });
    }

    segments
}

// ============================================================================
// Tests
// ============================================================================
