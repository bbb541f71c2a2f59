use std::io::{self, BufRead, IsTerminal, Write};

use clap::Parser;
use matchlight::cli::Cli;
use matchlight::config::{build_config, AppConfig};
use matchlight::render::{render_ansi, render_json, render_markers, AnsiCodes, OutputFormat};
use matchlight::segment::compute_segments;

fn main() {
    let cli = Cli::parse();
    let config = build_config(&cli);

    if config.verbose {
        eprintln!("matchlight: effective config: {:?}", config);
    }

    if let Err(e) = run(&cli, &config) {
        eprintln!("matchlight: error: {}", e);
        std::process::exit(1);
    }
}

/// Highlight every input (arguments, or stdin lines when no arguments
/// were given) against the search string and print one line per input.
fn run(cli: &Cli, config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let codes = if io::stdout().is_terminal() {
        AnsiCodes::for_tty(&config.theme)
    } else {
        AnsiCodes::for_pipe()
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.text.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            emit(&mut out, &line, cli, config, &codes)?;
        }
    } else {
        for text in &cli.text {
            emit(&mut out, text, cli, config, &codes)?;
        }
    }

    Ok(())
}

/// Compute and print the highlighted form of a single input.
fn emit(
    out: &mut impl Write,
    text: &str,
    cli: &Cli,
    config: &AppConfig,
    codes: &AnsiCodes,
) -> Result<(), Box<dyn std::error::Error>> {
    let segments = compute_segments(text, &cli.search);

    if config.verbose {
        let matched: usize = segments
            .iter()
            .filter(|s| s.matched)
            .map(|s| s.text.chars().count())
            .sum();
        eprintln!(
            "matchlight: {:?}: {} segments, {} matched chars",
            text,
            segments.len(),
            matched
        );
    }

    let rendered = match config.output.format {
        OutputFormat::Ansi => render_ansi(&segments, codes),
        OutputFormat::Markers => render_markers(
            &segments,
            &config.output.marker_open,
            &config.output.marker_close,
        ),
        OutputFormat::Json => render_json(&segments)?,
    };
    writeln!(out, "{}", rendered)?;

    Ok(())
}
