//! JSON reporter
//!
//! Outputs the full ConflictReport as pretty-printed JSON for piping to jq
//! or handing to another service.

use crate::graph::GraphMetrics;
use crate::models::ConflictReport;
use anyhow::Result;

/// Render report as JSON
pub fn render(report: &ConflictReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn render_metrics(metrics: &GraphMetrics) -> Result<String> {
    Ok(serde_json::to_string_pretty(metrics)?)
}
