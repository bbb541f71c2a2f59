use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::cli::{Cli, FormatArg, Theme};
use crate::render::OutputFormat;

// ---------------------------------------------------------------------------
// TOML-deserializable config (intermediate representation)
// ---------------------------------------------------------------------------

/// Raw config as parsed from the TOML file.
/// All fields are optional so that missing keys fall through to defaults.
/// Unknown keys are silently ignored by serde.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct FileConfig {
    verbose: Option<bool>,
    theme: Option<String>,
    output: FileOutputConfig,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct FileOutputConfig {
    format: Option<String>,
    marker_open: Option<String>,
    marker_close: Option<String>,
}

// ---------------------------------------------------------------------------
// Effective (merged) config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub verbose: bool,
    pub theme: Theme,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub marker_open: String,
    pub marker_close: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            theme: Theme::Dark,
            output: OutputConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Ansi,
            marker_open: "[".to_string(),
            marker_close: "]".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Returns the default config file path: `~/.config/matchlight/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("matchlight").join("config.toml"))
}

/// Load the config file from the given path (or the default path).
/// Returns the parsed `FileConfig`, or `None` if the file does not exist
/// or cannot be parsed.
fn load_file_config(path: &Path) -> Option<FileConfig> {
    if !path.exists() {
        return None;
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<FileConfig>(&contents) {
            Ok(cfg) => Some(cfg),
            Err(e) => {
                eprintln!(
                    "matchlight: warning: failed to parse config file {}: {}",
                    path.display(),
                    e
                );
                None
            }
        },
        Err(e) => {
            eprintln!(
                "matchlight: warning: failed to read config file {}: {}",
                path.display(),
                e
            );
            None
        }
    }
}

/// Parse a theme string from the config file into a `Theme` enum.
/// Returns `None` if the string is not recognized (caller uses default).
fn parse_theme(s: &str) -> Option<Theme> {
    match s.to_lowercase().as_str() {
        "dark" => Some(Theme::Dark),
        "light" => Some(Theme::Light),
        other => {
            eprintln!(
                "matchlight: warning: unknown theme \"{}\", using default",
                other
            );
            None
        }
    }
}

/// Parse a format string from the config file into an `OutputFormat`.
/// Returns `None` if the string is not recognized (caller uses default).
fn parse_format(s: &str) -> Option<OutputFormat> {
    match s.to_lowercase().as_str() {
        "ansi" => Some(OutputFormat::Ansi),
        "markers" => Some(OutputFormat::Markers),
        "json" => Some(OutputFormat::Json),
        other => {
            eprintln!(
                "matchlight: warning: unknown output format \"{}\", using default",
                other
            );
            None
        }
    }
}

/// Build the effective `AppConfig` by merging defaults, config file, and CLI args.
///
/// Precedence (highest wins):
/// 1. CLI flags (if explicitly provided)
/// 2. Config file values
/// 3. Hardcoded defaults
pub fn build_config(cli: &Cli) -> AppConfig {
    // Step 1: Start with defaults
    let mut config = AppConfig::default();

    // Step 2: Determine config file path
    let config_path = cli.config.clone().or_else(default_config_path);

    // Step 3: Load and overlay config file
    if let Some(ref path) = config_path {
        if let Some(file_cfg) = load_file_config(path) {
            // Overlay file config onto defaults
            if let Some(v) = file_cfg.verbose {
                config.verbose = v;
            }
            if let Some(ref t) = file_cfg.theme {
                if let Some(theme) = parse_theme(t) {
                    config.theme = theme;
                }
            }
            if let Some(ref f) = file_cfg.output.format {
                if let Some(format) = parse_format(f) {
                    config.output.format = format;
                }
            }
            if let Some(ref open) = file_cfg.output.marker_open {
                config.output.marker_open = open.clone();
            }
            if let Some(ref close) = file_cfg.output.marker_close {
                config.output.marker_close = close.clone();
            }
        } else if cli.config.is_some() {
            // User explicitly specified --config but file could not be loaded.
            // The warning was already printed by load_file_config if the file
            // existed but was malformed. If the file didn't exist at all,
            // print a warning here.
            if !path.exists() {
                eprintln!(
                    "matchlight: warning: config file not found: {}",
                    path.display()
                );
            }
        }
    }

    // Step 4: CLI overrides
    if cli.verbose {
        config.verbose = true;
    }
    if let Some(ref theme) = cli.theme {
        config.theme = theme.clone();
    }
    if let Some(ref format) = cli.format {
        config.output.format = match format {
            FormatArg::Ansi => OutputFormat::Ansi,
            FormatArg::Markers => OutputFormat::Markers,
            FormatArg::Json => OutputFormat::Json,
        };
    }

    config
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
