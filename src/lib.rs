//! BioGuard - ingredient/health conflict graph engine
//!
//! Keeps a directed knowledge graph of ingredients and the health
//! conditions they affect, and answers "which of these ingredients conflict
//! with this user's conditions and allergies?" through direct edges,
//! bounded multi-hop paths and allergen family lookups.
//!
//! ```no_run
//! use bioguard_graph::ConflictEngine;
//!
//! let engine = ConflictEngine::default();
//! let conflicts = engine.find_conflicts(&["Sodium"], &["hypertension"], &["peanut"]);
//! for c in &conflicts {
//!     println!("{} -> {} ({})", c.ingredient, c.health_condition, c.severity);
//! }
//! ```

pub mod config;
pub mod conflicts;
pub mod engine;
pub mod error;
pub mod graph;
pub mod matching;
pub mod models;
pub mod reporters;

pub use config::EngineConfig;
pub use conflicts::ConflictResolver;
pub use engine::ConflictEngine;
pub use error::{EngineError, EngineResult};
pub use graph::{GraphQuery, GraphStore};
pub use models::{ConflictRecord, ConflictReport, ConflictSummary, HealthProfile, Severity};
