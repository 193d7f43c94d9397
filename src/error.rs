//! Error types for the conflict graph engine
//!
//! Only configuration loading and severity parsing can fail. Graph
//! mutation and conflict queries are total and never return an error.

use thiserror::Error;

/// Errors that can occur while loading configuration or parsing input
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid severity '{0}'. Valid severities: low, medium, high")]
    InvalidSeverity(String),

    #[error("{field} out of range: {value} (must be {min}-{max})")]
    OutOfRange {
        field: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },

    #[error("Failed to parse TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;
