//! Command implementations

use anyhow::{Context, Result};
use hopfield_recall::{Grid, RecallPipeline, RecallReport};
use std::fs;
use std::path::Path;

use crate::cli::format::format_report;
use crate::config::Config;

/// The built-in demo pattern: a hollow 6x6 ring inside an 8x8 frame.
pub const RING_8X8: [&str; 8] = [
    "........",
    ".######.",
    ".#....#.",
    ".#....#.",
    ".#....#.",
    ".#....#.",
    ".######.",
    "........",
];

/// Run the pipeline on the built-in ring.
pub fn run_demo(config: &Config) -> Result<()> {
    let grid = Grid::from_lines(&RING_8X8).context("Built-in pattern is malformed")?;
    let report = execute(&grid, config)?;
    print_report(&report, config)
}

/// Run the pipeline on a pattern file.
pub fn run_recall(pattern: &Path, config: &Config) -> Result<()> {
    let text = fs::read_to_string(pattern)
        .with_context(|| format!("Failed to read pattern file {}", pattern.display()))?;
    let grid = Grid::parse(&text)
        .with_context(|| format!("Invalid pattern in {}", pattern.display()))?;
    let report = execute(&grid, config)?;
    print_report(&report, config)
}

fn execute(grid: &Grid, config: &Config) -> Result<RecallReport> {
    let pipeline =
        RecallPipeline::new(config.recall.clone()).context("Invalid recall configuration")?;
    pipeline.run(grid).context("Recall failed")
}

fn print_report(report: &RecallReport, config: &Config) -> Result<()> {
    if config.json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{}", format_report(report));
    }
    Ok(())
}
