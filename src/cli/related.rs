//! Related command - list conditions linked to one ingredient

use anyhow::Result;
use bioguard_graph::ConflictEngine;
use console::style;

pub fn run(engine: &ConflictEngine, ingredient: &str) -> Result<()> {
    let related = engine.related_conditions(ingredient);

    if related.is_empty() {
        println!("No related conditions for {}", style(ingredient).cyan());
        return Ok(());
    }

    println!(
        "{} related to {}:",
        style(related.len()).bold(),
        style(ingredient).cyan()
    );
    for condition in &related {
        println!("  {} {}", style("•").dim(), condition);
    }
    Ok(())
}
