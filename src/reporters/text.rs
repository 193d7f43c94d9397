//! Text (terminal) reporter with colors and formatting

use crate::graph::GraphMetrics;
use crate::models::{ConflictReport, Severity};
use anyhow::Result;

/// Severity colors
fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "\x1b[31m",   // Red
        Severity::Medium => "\x1b[33m", // Yellow
        Severity::Low => "\x1b[34m",    // Blue
    }
}

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

fn severity_tag(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "[H]",
        Severity::Medium => "[M]",
        Severity::Low => "[L]",
    }
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}

/// Render report as formatted terminal output
///
/// Conflicts are grouped by severity, highest first, keeping result order
/// within a group.
pub fn render(report: &ConflictReport) -> Result<String> {
    let mut out = String::new();

    out.push_str(&format!("\n{BOLD}BioGuard Conflict Check{RESET}\n"));
    out.push_str(&format!("{DIM}──────────────────────────────────────{RESET}\n"));
    out.push_str(&format!("Ingredients: {}\n", join_or_none(&report.ingredients)));
    out.push_str(&format!(
        "Conditions: {}  Allergies: {}\n\n",
        join_or_none(&report.profile.conditions),
        join_or_none(&report.profile.allergies)
    ));

    let summary = &report.summary;
    out.push_str(&format!("{BOLD}CONFLICTS{RESET} ({} total)\n", summary.total));

    if summary.total == 0 {
        out.push_str("  No conflicts found.\n");
        return Ok(out);
    }

    let summary_parts: Vec<String> = Severity::DESCENDING
        .iter()
        .filter(|&&sev| summary.count(sev) > 0)
        .map(|&sev| format!("{}{} {}{RESET}", severity_color(sev), summary.count(sev), sev))
        .collect();
    out.push_str(&format!("  {}\n", summary_parts.join(" | ")));

    for severity in Severity::DESCENDING {
        let mut group = report.by_severity(severity).peekable();
        if group.peek().is_none() {
            continue;
        }

        let color = severity_color(severity);
        out.push_str(&format!(
            "\n{color}{BOLD}{}{RESET}\n",
            severity.as_str().to_uppercase()
        ));

        for conflict in group {
            out.push_str(&format!(
                "  {color}{}{RESET}  {} -> {}  {DIM}{}{RESET}\n",
                severity_tag(severity),
                conflict.ingredient,
                conflict.health_condition,
                conflict.relationship
            ));
            if let Some(path) = &conflict.path {
                out.push_str(&format!("       {DIM}path: {}{RESET}\n", path.join(" -> ")));
            }
        }
    }

    Ok(out)
}

pub fn render_metrics(metrics: &GraphMetrics) -> String {
    format!(
        "{BOLD}GRAPH{RESET}\n  Nodes: {}  Edges: {}\n  Density: {:.4}  Avg degree: {:.2}\n",
        metrics.node_count, metrics.edge_count, metrics.density, metrics.avg_degree
    )
}
