//! Segment building: the engine's public entry point.
//!
//! [`compute_segments`] turns a `(text, search_text)` pair into an ordered
//! list of matched/unmatched [`Segment`]s whose concatenation reproduces
//! the text exactly. Callers render the segments however they like (bold
//! spans, links, ANSI); this module never decides presentation, only
//! which characters matched.

use serde::Serialize;

use crate::occurrences::find_all_match_ranges;

// ---------------------------------------------------------------------------
// Segment
// ---------------------------------------------------------------------------

/// A contiguous slice of the source text, tagged matched or unmatched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// The slice of the original text.
    pub text: String,
    /// True when this slice is part of the highlighted match.
    pub matched: bool,
}

impl Segment {
    fn unmatched(text: String) -> Self {
        Self {
            text,
            matched: false,
        }
    }

    fn matched(text: String) -> Self {
        Self {
            text,
            matched: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Segment builder
// ---------------------------------------------------------------------------

/// Split `source` into matched and unmatched segments for `pattern`.
///
/// An empty `pattern` means no active search: the whole source comes back
/// as one unmatched segment. Otherwise the extractor's ranges are sorted
/// ascending by start offset and the source is walked once with a cursor.
/// Gap slices between matches are only emitted when non-empty; matched
/// slices are always emitted.
///
/// For every input pair, concatenating the returned segment texts in
/// order yields `source` exactly.
pub fn compute_segments(source: &str, pattern: &str) -> Vec<Segment> {
    if pattern.is_empty() {
        return vec![Segment::unmatched(source.to_string())];
    }

    let mut ranges = find_all_match_ranges(source, pattern);
    ranges.sort_by_key(|r| r.begin);

    let chars: Vec<char> = source.chars().collect();
    let mut segments: Vec<Segment> = Vec::new();
    let mut pos = 0usize;

    for range in &ranges {
        if range.begin > pos {
            segments.push(Segment::unmatched(chars[pos..range.begin].iter().collect()));
        }
        segments.push(Segment::matched(chars[range.begin..=range.end].iter().collect()));
        pos = range.end + 1;
    }

    if pos < chars.len() {
        segments.push(Segment::unmatched(chars[pos..].iter().collect()));
    }

    // No range at all: the whole string is one unmatched segment.
    if segments.is_empty() {
        segments.push(Segment::unmatched(source.to_string()));
    }

    segments
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
