//! Longest-common-run finder: the innermost step of the highlight engine.
//!
//! Given a displayed text and a search string, [`find_longest_common_run`]
//! returns the single longest contiguous substring the two have in common.
//! The occurrence extractor calls it repeatedly against masked copies of
//! both strings, so the finder must honor the mask sentinel: two
//! [`MASK_CHAR`]s are never considered equal, which is what keeps an
//! already-consumed run from being rediscovered on a later pass.
//!
//! All comparisons and offsets are in code points (`char`s), never bytes.

// ---------------------------------------------------------------------------
// Mask sentinel
// ---------------------------------------------------------------------------

/// Character written over consumed runs by the occurrence extractor.
///
/// A space on both sides of a comparison is always a non-match. This rule
/// applies to real spaces in the inputs too: two genuine space characters
/// never highlight against each other.
pub(crate) const MASK_CHAR: char = ' ';

// ---------------------------------------------------------------------------
// Run finder
// ---------------------------------------------------------------------------

/// Find the longest contiguous substring common to `source` and `pattern`.
///
/// Returns the empty string when the inputs share no characters (or when
/// either input is empty). Ties on length are broken deterministically:
/// the table is filled row-major (outer loop over `source`, inner over
/// `pattern`) and the best run is only replaced on a strictly greater
/// length, so the winner is the run starting earliest in `source`, and
/// among those the one discovered at the earliest `pattern` alignment.
///
/// Runs never contain [`MASK_CHAR`]: equal characters that are both
/// spaces are treated as non-matching.
///
/// O(len(source) * len(pattern)) time; a rolling pair of rows keeps the
/// table at O(len(pattern)) space.
pub fn find_longest_common_run(source: &str, pattern: &str) -> String {
    let s: Vec<char> = source.chars().collect();
    let p: Vec<char> = pattern.chars().collect();
    if s.is_empty() || p.is_empty() {
        return String::new();
    }

    // prev[j] / curr[j]: length of the common run ending at s[i-1]/p[j]
    // and s[i]/p[j] respectively.
    let mut prev = vec![0usize; p.len()];
    let mut curr = vec![0usize; p.len()];

    let mut max_len = 0usize;
    // Start index in `s` of the currently winning run. Tracked so the
    // result can be extended one character at a time while the same run
    // keeps winning, instead of re-slicing on every update.
    let mut run_start: Option<usize> = None;
    let mut result = String::new();

    for i in 0..s.len() {
        for j in 0..p.len() {
            let masked_pair = s[i] == MASK_CHAR && p[j] == MASK_CHAR;
            if s[i] == p[j] && !masked_pair {
                curr[j] = if i == 0 || j == 0 { 1 } else { prev[j - 1] + 1 };
            } else {
                curr[j] = 0;
            }

            if curr[j] > max_len {
                max_len = curr[j];
                let start = i + 1 - curr[j];
                if run_start == Some(start) {
                    // Same run grew by one character.
                    result.push(s[i]);
                } else {
                    result = s[start..=i].iter().collect();
                    run_start = Some(start);
                }
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    result
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
