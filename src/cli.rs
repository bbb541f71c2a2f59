use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Highlight which characters of a text a search string matched
#[derive(Parser, Debug)]
#[command(
    name = "matchlight",
    about = "Highlight which characters of a text a search string matched"
)]
pub struct Cli {
    /// The search string whose character coverage should be highlighted.
    /// An empty string is valid and leaves every input unhighlighted.
    pub search: String,

    /// Text values to highlight. Reads lines from stdin when omitted.
    pub text: Vec<String>,

    /// Output format: ansi, markers, or json
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Color theme for ANSI output: dark or light
    #[arg(long, value_enum)]
    pub theme: Option<Theme>,

    /// Print the effective config and per-input diagnostics to stderr
    #[arg(long, default_value_t = false)]
    pub verbose: bool,

    /// Path to config file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq, ValueEnum)]
pub enum FormatArg {
    Ansi,
    Markers,
    Json,
}

#[derive(Clone, Debug, PartialEq, ValueEnum)]
pub enum Theme {
    Dark,
    Light,
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Dark => write!(f, "dark"),
            Theme::Light => write!(f, "light"),
        }
    }
}
