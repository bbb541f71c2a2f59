//! Occurrence extraction: repeated longest-run discovery with masking.
//!
//! One longest-common-run pass only explains a single contiguous piece of
//! a search string. Search terms are often scattered through the displayed
//! text (`"otn"` against `"operation"` matches one character class at a
//! time), so the extractor peels off the best run, masks every occurrence
//! of it in working copies of both strings, and repeats against what
//! remains until the search string's content is used up.
//!
//! Masking is char-for-char (each consumed character becomes one space
//! sentinel), so char offsets in the masked copies stay aligned with the
//! original source and the recorded ranges always refer to the original.

use regex::Regex;

use crate::longest_run::{find_longest_common_run, MASK_CHAR};

// ---------------------------------------------------------------------------
// MatchRange
// ---------------------------------------------------------------------------

/// An inclusive range of char offsets into the original source string.
///
/// Invariant: `begin <= end < source.chars().count()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRange {
    /// Char offset of the first matched character.
    pub begin: usize,
    /// Char offset of the last matched character (inclusive).
    pub end: usize,
}

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

/// Find every char range of `source` that participates in the highlight
/// for `pattern`.
///
/// Each iteration discovers the current longest common run, records
/// **every** non-overlapping occurrence of that run in the (masked) source
/// copy, then masks the run out of both working copies. The loop stops
/// when no common run remains, when an iteration records no occurrence,
/// or when the pattern copy is fully consumed.
///
/// The returned ranges are unsorted (discovery order); callers sort before
/// building segments. Ranges never overlap: matched characters are masked
/// and the sentinel never re-matches, and runs themselves contain no
/// spaces, so later iterations can only land on untouched characters.
pub fn find_all_match_ranges(source: &str, pattern: &str) -> Vec<MatchRange> {
    let mut item = source.to_string();
    let mut find = pattern.to_string();
    let mut ranges: Vec<MatchRange> = Vec::new();

    loop {
        let run = find_longest_common_run(&item, &find);
        if run.is_empty() {
            break;
        }
        let run_char_len = run.chars().count();

        // An escaped literal always compiles.
        let re = Regex::new(&regex::escape(&run)).unwrap();

        // Record every occurrence of the run in the masked source copy.
        // Byte positions from the regex are mapped back to char offsets;
        // masking preserves char counts, so these are offsets into the
        // original source as well.
        let boundaries: Vec<usize> = item.char_indices().map(|(b, _)| b).collect();
        let mut found_occurrence = false;
        for m in re.find_iter(&item) {
            let begin = char_offset_of(&boundaries, m.start());
            ranges.push(MatchRange {
                begin,
                end: begin + run_char_len - 1,
            });
            found_occurrence = true;
        }

        // Mask the run out of both copies so it cannot be rediscovered.
        let mask: String = std::iter::repeat(MASK_CHAR).take(run_char_len).collect();
        item = re.replace_all(&item, mask.as_str()).into_owned();
        find = re.replace_all(&find, mask.as_str()).into_owned();

        if !found_occurrence || find.chars().all(|c| c == MASK_CHAR) {
            break;
        }
    }

    ranges
}

/// Convert a byte offset into a char offset using the precomputed list of
/// char start positions. Regex matches on valid UTF-8 always start on a
/// char boundary, so this is an exact lookup.
fn char_offset_of(boundaries: &[usize], byte_pos: usize) -> usize {
    boundaries.partition_point(|&b| b < byte_pos)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
