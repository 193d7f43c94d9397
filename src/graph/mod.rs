//! Ingredient-health knowledge graph
//!
//! A simple directed graph keyed by normalized labels. Ingredient nodes point
//! at the health conditions they affect; edges carry a relationship label and
//! a severity.

pub mod seed;
pub mod store;
pub mod store_models;
pub mod traits;

pub use seed::{default_relationships, SeedRelationship, DEFAULT_RELATIONSHIPS};
pub use store::{GraphStore, GraphView};
pub use store_models::{ExportEdge, ExportNode, GraphEdge, GraphExport, GraphMetrics};

pub use traits::GraphQuery;
