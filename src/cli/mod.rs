//! CLI command definitions and handlers

mod check;
mod export;
mod init;
mod metrics;
mod related;

use anyhow::{Context, Result};
use bioguard_graph::config::load_config;
use bioguard_graph::{ConflictEngine, EngineConfig};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// BioGuard - ingredient and health profile conflict checks
#[derive(Parser, Debug)]
#[command(name = "bioguard-graph")]
#[command(
    version,
    about = "Check food ingredients against health conditions and allergies using a conflict graph",
    after_help = "\
Examples:
  bioguard-graph check -i sodium,sugar -c hypertension       Direct conflicts
  bioguard-graph check -i \"whey protein\" -a milk             Allergen family match
  bioguard-graph check -i sodium -c hypertension --format json --fail-on high
  bioguard-graph related sodium                                Conditions linked to an ingredient
  bioguard-graph export -o graph.json                          Dump the graph as JSON"
)]
pub struct Cli {
    /// Config file (default: ./bioguard.toml, ./.bioguard.json, then the user config dir)
    #[arg(long, global = true, env = "BIOGUARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check a product's ingredients against conditions and allergies
    Check {
        /// Ingredients, comma separated
        #[arg(long, short = 'i', required = true, value_delimiter = ',')]
        ingredients: Vec<String>,

        /// Health conditions, comma separated
        #[arg(long, short = 'c', value_delimiter = ',')]
        conditions: Vec<String>,

        /// Allergies, comma separated
        #[arg(long, short = 'a', value_delimiter = ',')]
        allergies: Vec<String>,

        /// Output format: text, json
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
        format: String,

        /// Exit with code 1 if any conflict is at or above this severity
        #[arg(long, value_parser = ["low", "medium", "high"])]
        fail_on: Option<String>,
    },

    /// List the conditions an ingredient is directly linked to
    Related {
        /// Ingredient name
        ingredient: String,
    },

    /// Show node/edge counts, density and average degree
    Metrics {
        /// Output format: text, json
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Export all nodes and edges as JSON
    Export {
        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Write an example bioguard.toml
    Init {
        /// Target directory
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}

/// Trim list items split from `a, b ,c`
fn trim_items(items: Vec<String>) -> Vec<String> {
    items.into_iter().map(|item| item.trim().to_string()).collect()
}

fn build_engine(config_path: Option<&std::path::Path>) -> Result<ConflictEngine> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let config: EngineConfig = match config_path {
        Some(path) => load_config(Some(path), &cwd)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => load_config(None, &cwd)?,
    };
    Ok(ConflictEngine::from_config(&config))
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Check {
            ingredients,
            conditions,
            allergies,
            format,
            fail_on,
        } => {
            let engine = build_engine(cli.config.as_deref())?;
            check::run(
                &engine,
                trim_items(ingredients),
                trim_items(conditions),
                trim_items(allergies),
                &format,
                fail_on.as_deref(),
            )
        }

        Commands::Related { ingredient } => {
            let engine = build_engine(cli.config.as_deref())?;
            related::run(&engine, &ingredient)
        }

        Commands::Metrics { format } => {
            let engine = build_engine(cli.config.as_deref())?;
            metrics::run(&engine, &format)
        }

        Commands::Export { output } => {
            let engine = build_engine(cli.config.as_deref())?;
            export::run(&engine, output.as_deref())
        }

        Commands::Init { path } => init::run(&path),
    }
}
