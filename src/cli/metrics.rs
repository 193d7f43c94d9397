//! Metrics command - print graph statistics

use anyhow::Result;
use bioguard_graph::reporters::{self, OutputFormat};
use bioguard_graph::ConflictEngine;

pub fn run(engine: &ConflictEngine, format: &str) -> Result<()> {
    let format: OutputFormat = format.parse()?;
    let output = reporters::metrics_with_format(&engine.metrics(), format)?;
    println!("{}", output);
    Ok(())
}
