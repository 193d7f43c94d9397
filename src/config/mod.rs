//! Configuration for the conflict engine
//!
//! This module handles:
//! - Resolver settings (`[resolver]`)
//! - Seed relationships loaded into the graph at startup (`[seed]`)
//! - Config file discovery (`bioguard.toml`, `.bioguard.json`, user config dir)

mod engine_config;

pub use engine_config::{
    discover_config,
    load_config,
    load_config_file,
    EngineConfig,
    ResolverConfig,
    SeedConfig,
    CONFIG_FILE_NAME,
    EXAMPLE_CONFIG,
    JSON_CONFIG_FILE_NAME,
};
