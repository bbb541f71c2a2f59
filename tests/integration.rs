//! End-to-end integration tests for the matchlight pipeline.
//!
//! These tests exercise the handoff between modules that unit tests
//! cannot cover: occurrence extraction -> segment building -> rendering,
//! and config file loading feeding the renderer's settings.

use std::io::Write;

use rstest::rstest;
use tempfile::NamedTempFile;

use matchlight::cli::{Cli, Theme};
use matchlight::config::build_config;
use matchlight::render::{render_ansi, render_json, render_markers, AnsiCodes, OutputFormat};
use matchlight::segment::compute_segments;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Concatenate all segment texts in order.
fn reconstruct(source: &str, pattern: &str) -> String {
    compute_segments(source, pattern)
        .iter()
        .map(|s| s.text.as_str())
        .collect()
}

/// Concatenate only the matched texts, in source order.
fn matched_text(source: &str, pattern: &str) -> String {
    compute_segments(source, pattern)
        .iter()
        .filter(|s| s.matched)
        .map(|s| s.text.as_str())
        .collect()
}

/// Build a Cli value without going through argument parsing.
fn cli_with_config(config: Option<std::path::PathBuf>) -> Cli {
    Cli {
        search: "test".to_string(),
        text: Vec::new(),
        format: None,
        theme: None,
        verbose: false,
        config,
    }
}

// ---------------------------------------------------------------------------
// Test 1: Reconstruction law across the whole pipeline
// ---------------------------------------------------------------------------

/// For any input pair, concatenating the emitted segment texts must
/// reproduce the source exactly: no characters dropped, duplicated,
/// or reordered.
#[rstest]
#[case("key=value", "key")]
#[case("key=value", "value")]
#[case("operation", "otn")]
#[case("pepper", "pp")]
#[case("mississippi", "issi")]
#[case("local-cluster", "lcl")]
#[case("abba", "ab ba")]
#[case("a.*b[c]+", "*[+")]
#[case("日本語テスト", "テスト")]
#[case("name with spaces", " ")]
#[case("", "anything")]
#[case("anything", "")]
#[case("", "")]
fn test_reconstruction_law(#[case] source: &str, #[case] pattern: &str) {
    assert_eq!(reconstruct(source, pattern), source);
}

// ---------------------------------------------------------------------------
// Test 2: Character coverage of the matching semantics
// ---------------------------------------------------------------------------

#[rstest]
#[case("key=value", "key", "key")]
#[case("pepper", "pp", "pp")]
#[case("operation", "otn", "oton")]
#[case("abxab", "ab", "abab")]
#[case("abc", "xyz", "")]
#[case("a b c", " ", "")]
fn test_matched_character_coverage(
    #[case] source: &str,
    #[case] pattern: &str,
    #[case] expected: &str,
) {
    assert_eq!(matched_text(source, pattern), expected);
}

/// Empty search is the "no active search" display case: exactly one
/// unmatched segment carrying the whole text.
#[test]
fn test_empty_search_identity() {
    let segments = compute_segments("cluster-name", "");
    assert_eq!(segments.len(), 1);
    assert!(!segments[0].matched);
    assert_eq!(segments[0].text, "cluster-name");
}

// ---------------------------------------------------------------------------
// Test 3: Segments through each renderer
// ---------------------------------------------------------------------------

#[test]
fn test_pipeline_to_markers() {
    let segments = compute_segments("operation", "otn");
    assert_eq!(render_markers(&segments, "<", ">"), "<o>pera<t>i<o><n>");
}

#[test]
fn test_pipeline_to_ansi_and_back_to_plain() {
    let segments = compute_segments("key=value", "key");
    let tty = render_ansi(&segments, &AnsiCodes::for_tty(&Theme::Dark));
    let piped = render_ansi(&segments, &AnsiCodes::for_pipe());
    assert!(tty.contains("\x1b[1;36mkey\x1b[0m"));
    assert_eq!(piped, "key=value");
}

#[test]
fn test_pipeline_to_json_round_trips_text() {
    let segments = compute_segments("pepper", "pp");
    let json = render_json(&segments).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    let texts: String = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["text"].as_str().unwrap())
        .collect();
    assert_eq!(texts, "pepper");
    assert_eq!(parsed[1]["matched"], serde_json::Value::Bool(true));
}

// ---------------------------------------------------------------------------
// Test 4: Config file feeding the renderer
// ---------------------------------------------------------------------------

#[test]
fn test_config_file_markers_drive_rendering() {
    let toml = r#"
[output]
format = "markers"
marker_open = "**"
marker_close = "**"
"#;
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(toml.as_bytes()).unwrap();

    let cli = cli_with_config(Some(f.path().to_path_buf()));
    let config = build_config(&cli);
    assert_eq!(config.output.format, OutputFormat::Markers);

    let segments = compute_segments("key=value", &cli.search);
    let rendered = render_markers(
        &segments,
        &config.output.marker_open,
        &config.output.marker_close,
    );
    // "test" against "key=value": both e's match, one pass of the extractor.
    assert_eq!(rendered.replace("**", ""), "key=value");
    assert!(rendered.contains("**"));
}

#[test]
fn test_missing_config_file_defaults_still_render() {
    let cli = cli_with_config(Some(std::path::PathBuf::from(
        "/tmp/matchlight-integration-no-such-config.toml",
    )));
    let config = build_config(&cli);
    assert_eq!(config.output.format, OutputFormat::Ansi);
    assert_eq!(config.theme, Theme::Dark);

    let segments = compute_segments("testing", &cli.search);
    let rendered = render_ansi(&segments, &AnsiCodes::for_pipe());
    assert_eq!(rendered, "testing");
}
