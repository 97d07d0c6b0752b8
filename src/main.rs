//! rustreadinglog - Reading Log Converter
//!
//! Converts a spreadsheet CSV export of a reading log into a JSON array of
//! normalized paper records.
//!
//! ## Usage
//!
//! ```bash
//! rustreadinglog reading_log.csv papers.json
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`); logs go to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use rustreadinglog::convert;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

// ============================================================================
// CLI Definition
// ============================================================================

/// Convert a reading-log CSV export into normalized paper JSON
#[derive(Parser)]
#[command(name = "rustreadinglog")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Input CSV exported from the reading-log spreadsheet
    input: PathBuf,

    /// Output JSON path (overwritten if it exists)
    output: PathBuf,
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .init();

    info!(input = ?cli.input, output = ?cli.output, "Converting reading log");

    let count = convert::convert_file(&cli.input, &cli.output).with_context(|| {
        format!(
            "Failed to convert {} into {}",
            cli.input.display(),
            cli.output.display()
        )
    })?;

    info!(records = count, "Conversion complete");
    Ok(())
}
