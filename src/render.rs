//! Render segment lists for terminal or machine consumption.
//!
//! Three output surfaces:
//! - **ansi**: matched segments wrapped in bold + theme color escape
//!   codes. TTY detection is the caller's job; [`AnsiCodes::for_pipe`]
//!   produces no-op codes so piped output carries no escape sequences.
//! - **markers**: matched segments wrapped in configurable plain-text
//!   markers, safe for piping and easy to grep.
//! - **json**: the segment list serialized as a JSON array.

use crate::cli::Theme;
use crate::segment::Segment;

// ---------------------------------------------------------------------------
// Output format
// ---------------------------------------------------------------------------

/// How a segment list is rendered on stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    /// ANSI bold + color around matched segments.
    Ansi,
    /// Plain-text markers around matched segments.
    Markers,
    /// JSON array of `{text, matched}` objects.
    Json,
}

// ---------------------------------------------------------------------------
// ANSI code helpers
// ---------------------------------------------------------------------------

/// ANSI escape codes for highlighting matched segments.
///
/// When stdout is not a TTY (piped), both fields are empty strings so
/// that no escape sequences leak into downstream consumers.
#[derive(Debug, Clone)]
pub struct AnsiCodes {
    /// Start-of-match code (bold + theme color).
    pub matched: &'static str,
    /// Reset all attributes.
    pub reset: &'static str,
}

impl AnsiCodes {
    /// Build codes for an interactive TTY.
    pub fn for_tty(theme: &Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                matched: "\x1b[1;36m", // bold cyan
                reset: "\x1b[0m",
            },
            Theme::Light => Self {
                matched: "\x1b[1;34m", // bold blue
                reset: "\x1b[0m",
            },
        }
    }

    /// No-op codes for piped (non-TTY) output.
    pub fn for_pipe() -> Self {
        Self {
            matched: "",
            reset: "",
        }
    }
}

// ---------------------------------------------------------------------------
// Renderers
// ---------------------------------------------------------------------------

/// Render segments with ANSI codes around matched pieces.
pub fn render_ansi(segments: &[Segment], codes: &AnsiCodes) -> String {
    let mut out = String::new();
    for segment in segments {
        if segment.matched {
            out.push_str(codes.matched);
            out.push_str(&segment.text);
            out.push_str(codes.reset);
        } else {
            out.push_str(&segment.text);
        }
    }
    out
}

/// Render segments with plain-text markers around matched pieces.
pub fn render_markers(segments: &[Segment], open: &str, close: &str) -> String {
    let mut out = String::new();
    for segment in segments {
        if segment.matched {
            out.push_str(open);
            out.push_str(&segment.text);
            out.push_str(close);
        } else {
            out.push_str(&segment.text);
        }
    }
    out
}

/// Render segments as a JSON array of `{text, matched}` objects.
pub fn render_json(segments: &[Segment]) -> Result<String, serde_json::Error> {
    serde_json::to_string(segments)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
