//! Core data models for the conflict engine
//!
//! These are the values handed back to callers: one `ConflictRecord` per
//! detected conflict, plus the summaries the reporters render.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Severity attached to graph edges and conflicts
///
/// Ordered `Low < Medium < High` so the worst of several severities is `max()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// All levels, highest first
    pub const DESCENDING: [Severity; 3] = [Severity::High, Severity::Medium, Severity::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            _ => Err(EngineError::InvalidSeverity(s.to_string())),
        }
    }
}

/// A single detected ingredient/condition conflict
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictRecord {
    /// Ingredient exactly as supplied by the caller
    pub ingredient: String,
    /// Matched condition, or `Allergy: <name>` for allergen matches
    pub health_condition: String,
    pub relationship: String,
    pub severity: Severity,
    /// False only for multi-hop matches
    pub direct: bool,
    /// Normalized node keys from ingredient to condition (indirect matches only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<String>>,
}

impl ConflictRecord {
    pub fn direct(
        ingredient: &str,
        health_condition: impl Into<String>,
        relationship: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            ingredient: ingredient.to_string(),
            health_condition: health_condition.into(),
            relationship: relationship.into(),
            severity,
            direct: true,
            path: None,
        }
    }

    pub fn indirect(
        ingredient: &str,
        health_condition: &str,
        relationship: String,
        severity: Severity,
        path: Vec<String>,
    ) -> Self {
        Self {
            ingredient: ingredient.to_string(),
            health_condition: health_condition.to_string(),
            relationship,
            severity,
            direct: false,
            path: Some(path),
        }
    }

    /// Key used to deduplicate a result list
    pub fn pair(&self) -> (&str, &str) {
        (&self.ingredient, &self.health_condition)
    }
}

/// Medical conditions and allergies of the user being checked
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthProfile {
    #[serde(default)]
    pub conditions: Vec<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
}

impl HealthProfile {
    pub fn new(conditions: Vec<String>, allergies: Vec<String>) -> Self {
        Self {
            conditions,
            allergies,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty() && self.allergies.is_empty()
    }
}

/// Count of conflicts by severity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictSummary {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub total: usize,
}

impl ConflictSummary {
    pub fn from_conflicts(conflicts: &[ConflictRecord]) -> Self {
        let mut summary = Self::default();
        for c in conflicts {
            match c.severity {
                Severity::High => summary.high += 1,
                Severity::Medium => summary.medium += 1,
                Severity::Low => summary.low += 1,
            }
            summary.total += 1;
        }
        summary
    }

    pub fn count(&self, severity: Severity) -> usize {
        match severity {
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
        }
    }
}

/// Result of checking one product against one profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictReport {
    pub ingredients: Vec<String>,
    pub profile: HealthProfile,
    pub conflicts: Vec<ConflictRecord>,
    pub summary: ConflictSummary,
}

impl ConflictReport {
    pub fn new(ingredients: Vec<String>, profile: HealthProfile, conflicts: Vec<ConflictRecord>) -> Self {
        let summary = ConflictSummary::from_conflicts(&conflicts);
        Self {
            ingredients,
            profile,
            conflicts,
            summary,
        }
    }

    /// Highest severity among the conflicts, if any
    pub fn worst_severity(&self) -> Option<Severity> {
        self.conflicts.iter().map(|c| c.severity).max()
    }

    /// Conflicts at exactly `severity`, in result order
    pub fn by_severity(&self, severity: Severity) -> impl Iterator<Item = &ConflictRecord> {
        self.conflicts.iter().filter(move |c| c.severity == severity)
    }
}
