//! Engine configuration loading
//!
//! # Configuration Format
//!
//! ```toml
//! # bioguard.toml
//!
//! [resolver]
//! max_path_depth = 3
//!
//! [seed]
//! include_defaults = true
//!
//! [[seed.relationships]]
//! source = "msg"
//! target = "migraine"
//! relationship = "may_trigger"
//! severity = "medium"
//! ```

use crate::conflicts::MAX_PATH_DEPTH;
use crate::error::{EngineError, EngineResult};
use crate::graph::{default_relationships, SeedRelationship};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const CONFIG_FILE_NAME: &str = "bioguard.toml";
pub const JSON_CONFIG_FILE_NAME: &str = ".bioguard.json";

const MIN_CONFIG_PATH_DEPTH: usize = 2;
const MAX_CONFIG_PATH_DEPTH: usize = 5;

/// Commented example written by `bioguard-graph init`
pub const EXAMPLE_CONFIG: &str = r#"# BioGuard conflict graph configuration

[resolver]
# Longest ingredient -> condition path considered, in nodes (2-5).
# 3 allows one intermediate node.
max_path_depth = 3

[seed]
# Load the built-in ingredient -> condition relationships
include_defaults = true

# Extra relationships, added after the defaults.
# severity: low, medium, high
# [[seed.relationships]]
# source = "msg"
# target = "migraine"
# relationship = "may_trigger"
# severity = "medium"
"#;

/// Full engine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub resolver: ResolverConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

/// Conflict resolver settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Longest path, in nodes, searched for indirect conflicts
    #[serde(default = "default_max_path_depth")]
    pub max_path_depth: usize,
}

fn default_max_path_depth() -> usize {
    MAX_PATH_DEPTH
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_path_depth: MAX_PATH_DEPTH,
        }
    }
}

impl ResolverConfig {
    pub fn validate(&self) -> EngineResult<()> {
        if !(MIN_CONFIG_PATH_DEPTH..=MAX_CONFIG_PATH_DEPTH).contains(&self.max_path_depth) {
            return Err(EngineError::OutOfRange {
                field: "resolver.max_path_depth",
                value: self.max_path_depth,
                min: MIN_CONFIG_PATH_DEPTH,
                max: MAX_CONFIG_PATH_DEPTH,
            });
        }
        Ok(())
    }
}

/// Relationships loaded into the graph at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default = "default_true")]
    pub include_defaults: bool,
    #[serde(default)]
    pub relationships: Vec<SeedRelationship>,
}

fn default_true() -> bool {
    true
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            include_defaults: true,
            relationships: Vec::new(),
        }
    }
}

impl SeedConfig {
    /// Defaults (when enabled) followed by configured relationships
    pub fn relationships(&self) -> Vec<SeedRelationship> {
        let mut all = if self.include_defaults {
            default_relationships()
        } else {
            Vec::new()
        };
        all.extend(self.relationships.iter().cloned());
        all
    }
}

impl EngineConfig {
    pub fn from_toml_str(content: &str) -> EngineResult<Self> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(content: &str) -> EngineResult<Self> {
        let config: EngineConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> EngineResult<()> {
        self.resolver.validate()
    }

    /// `~/.config/bioguard/config.toml` (platform equivalent)
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("bioguard").join("config.toml"))
    }
}

/// Load one config file; `.json` files are parsed as JSON, anything else as TOML
pub fn load_config_file(path: &Path) -> EngineResult<EngineConfig> {
    let content = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        EngineConfig::from_json_str(&content)
    } else {
        EngineConfig::from_toml_str(&content)
    }
}

/// Load configuration for a run
///
/// An explicitly named file must load. Otherwise the usual locations under
/// `dir` and the user config directory are searched.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> EngineResult<EngineConfig> {
    match explicit {
        Some(path) => {
            let config = load_config_file(path)?;
            debug!("Loaded config from {}", path.display());
            Ok(config)
        }
        None => Ok(discover_config(dir)),
    }
}

/// Search `dir` and then the user config directory; defaults if nothing loads
pub fn discover_config(dir: &Path) -> EngineConfig {
    let mut candidates = vec![dir.join(CONFIG_FILE_NAME), dir.join(JSON_CONFIG_FILE_NAME)];
    candidates.extend(EngineConfig::user_config_path());
    first_loadable(&candidates)
}

fn first_loadable(candidates: &[PathBuf]) -> EngineConfig {
    for path in candidates {
        if !path.exists() {
            continue;
        }
        match load_config_file(path) {
            Ok(config) => {
                debug!("Loaded config from {}", path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", path.display(), e);
            }
        }
    }

    debug!("No config found, using defaults");
    EngineConfig::default()
}
