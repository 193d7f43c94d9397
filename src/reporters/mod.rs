//! Output reporters for conflict checks
//!
//! Supports two output formats:
//! - `text` - Terminal output with colors, grouped by severity
//! - `json` - Machine-readable JSON

mod json;
mod text;

use crate::graph::GraphMetrics;
use crate::models::ConflictReport;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("Unknown format '{}'. Valid formats: text, json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render a conflict report in the specified format
pub fn report(report: &ConflictReport, format: &str) -> Result<String> {
    let fmt = OutputFormat::from_str(format)?;
    report_with_format(report, fmt)
}

/// Render a conflict report using an OutputFormat enum
pub fn report_with_format(report: &ConflictReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(report),
        OutputFormat::Json => json::render(report),
    }
}

/// Render graph metrics
pub fn metrics_with_format(metrics: &GraphMetrics, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::render_metrics(metrics)),
        OutputFormat::Json => json::render_metrics(metrics),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::{ConflictRecord, HealthProfile, Severity};

    /// A report with one conflict at each severity, plus an indirect one
    pub(crate) fn test_report() -> ConflictReport {
        let conflicts = vec![
            ConflictRecord::direct("Sodium", "hypertension", "increases_risk", Severity::High),
            ConflictRecord::direct("Red 40", "hyperactivity", "may_trigger", Severity::Low),
            ConflictRecord::indirect(
                "whey",
                "gut",
                "indirect (lactose)".to_string(),
                Severity::Medium,
                vec!["whey".into(), "lactose".into(), "gut".into()],
            ),
            ConflictRecord::direct("peanut oil", "Allergy: peanut", "allergen_present", Severity::High),
        ];

        ConflictReport::new(
            vec!["Sodium".into(), "Red 40".into(), "whey".into(), "peanut oil".into()],
            HealthProfile::new(
                vec!["hypertension".into(), "hyperactivity".into(), "gut".into()],
                vec!["peanut".into()],
            ),
            conflicts,
        )
    }

    pub(crate) fn empty_report() -> ConflictReport {
        ConflictReport::new(
            vec!["water".into()],
            HealthProfile::new(vec!["hypertension".into()], vec![]),
            vec![],
        )
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("terminal").unwrap(), OutputFormat::Text);
        assert!(OutputFormat::from_str("sarif").is_err());
    }

    #[test]
    fn test_report_dispatch() {
        let report = test_report();
        assert!(super::report(&report, "json").unwrap().trim_start().starts_with('{'));
        assert!(super::report(&report, "text").unwrap().contains("CONFLICTS"));
        assert!(super::report(&report, "xml").is_err());
    }
}
