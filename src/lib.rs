//! matchlight: search-match highlight segments for console tables.
//!
//! Given a displayed text string and a user-typed search string, the
//! engine decides which character ranges of the text should be rendered
//! as "matched" so a UI can visually explain why a row matched a filter.
//! It does not rank or reject anything; the caller has already decided
//! the row matches, matchlight only explains which characters to bold.
//!
//! The pipeline is three pure, synchronous steps:
//! 1. [`longest_run`]: longest contiguous substring common to both
//!    strings, with deterministic tie-breaking.
//! 2. [`occurrences`]: repeated longest-run discovery against masked
//!    working copies, collecting every occurrence range in the original
//!    text until the search string's content is used up.
//! 3. [`segment`]: sort the ranges and walk the text once, emitting
//!    matched/unmatched [`segment::Segment`]s whose concatenation always
//!    reproduces the text exactly.
//!
//! Most callers only need [`segment::compute_segments`].

pub mod cli;
pub mod config;
pub mod longest_run;
pub mod occurrences;
pub mod render;
pub mod segment;

pub use occurrences::MatchRange;
pub use segment::{compute_segments, Segment};
