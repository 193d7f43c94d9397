//! Export command - dump every node and edge as JSON

use anyhow::{Context, Result};
use bioguard_graph::ConflictEngine;
use console::style;
use std::path::Path;

pub fn run(engine: &ConflictEngine, output: Option<&Path>) -> Result<()> {
    let export = engine.export();
    let json = serde_json::to_string_pretty(&export).context("Failed to serialize graph")?;

    match output {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!(
                "{} Exported {} nodes and {} edges to {}",
                style("✓").green(),
                export.nodes.len(),
                export.edges.len(),
                style(path.display()).cyan()
            );
        }
        None => println!("{}", json),
    }
    Ok(())
}
