//! Static seed relationships loaded into the graph at startup

use crate::models::Severity;
use serde::{Deserialize, Serialize};

/// One ingredient -> condition relationship as written in configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedRelationship {
    pub source: String,
    pub target: String,
    pub relationship: String,
    pub severity: Severity,
}

impl SeedRelationship {
    pub fn new(source: &str, target: &str, relationship: &str, severity: Severity) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
            relationship: relationship.to_string(),
            severity,
        }
    }
}

/// Built-in ingredient -> health impact relationships
pub const DEFAULT_RELATIONSHIPS: &[(&str, &str, &str, Severity)] = &[
    ("sodium", "hypertension", "increases_risk", Severity::High),
    ("sodium", "blood_pressure", "increases", Severity::High),
    ("sugar", "diabetes", "increases_risk", Severity::High),
    ("sugar", "glucose_spike", "causes", Severity::High),
    ("saturated_fat", "cholesterol", "increases", Severity::High),
    ("preservatives", "digestive_health", "harms", Severity::Medium),
    ("artificial_colors", "hyperactivity", "may_trigger", Severity::Low),
    ("gluten", "celiac_disease", "triggers", Severity::High),
    ("lactose", "lactose_intolerance", "triggers", Severity::High),
    ("peanuts", "peanut_allergy", "triggers", Severity::High),
    ("trans_fat", "heart_disease", "increases_risk", Severity::High),
];

pub fn default_relationships() -> Vec<SeedRelationship> {
    DEFAULT_RELATIONSHIPS
        .iter()
        .map(|&(source, target, relationship, severity)| {
            SeedRelationship::new(source, target, relationship, severity)
        })
        .collect()
}
