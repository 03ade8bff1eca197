//! CLI entry point for composing URLs from shortcut input lines.
//!
//! Loads a shortcuts export JSON file and composes the command-line input
//! into a navigable URL, or checks the input against the syntactic format
//! rules without touching any configuration.
//!
//! # Usage
//!
//! ```bash
//! # Compose a URL from configured shortcuts and a dynamic segment
//! url-composer --shortcuts shortcuts.json dev api session123
//!
//! # Validate input shape only (no shortcuts file needed)
//! url-composer --check dev api
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG` (optional): tracing filter, e.g. `url_composer=debug`

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use url_composer::prelude::*;

/// Compose a navigable URL from shortcut tokens.
#[derive(Parser)]
#[command(name = "url-composer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input segments: shortcut keys and free-form dynamic pieces
    input: Vec<String>,

    /// Path to a shortcuts export JSON file
    #[arg(short, long, value_name = "FILE")]
    shortcuts: Option<PathBuf>,

    /// Only check the input against the syntactic format rules
    #[arg(long)]
    check: bool,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let input = cli.input.join(" ");

    if cli.check {
        return Ok(run_format_check(&input));
    }

    let path = cli
        .shortcuts
        .context("--shortcuts <FILE> is required unless --check is used")?;
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read shortcuts file {}", path.display()))?;
    let shortcuts = ShortcutsExport::from_json(&raw)?.into_map();

    tracing::debug!("loaded {} shortcuts from {}", shortcuts.len(), path.display());

    let result = compose(&input, &shortcuts);
    if result.is_valid {
        println!(
            "{} {}",
            result.url.green().bold(),
            format!("({})", result.description).dimmed()
        );
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!("{} {}", "error:".red().bold(), result.description);
        Ok(ExitCode::FAILURE)
    }
}

fn run_format_check(input: &str) -> ExitCode {
    if is_valid_format(input) {
        println!("{} input is well formed", "✓".green());
        ExitCode::SUCCESS
    } else {
        eprintln!(
            "{} input must be non-empty segments of letters, digits, and hyphens",
            "✗".red()
        );
        ExitCode::FAILURE
    }
}
