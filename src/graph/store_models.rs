//! Graph model types: edge metadata and the snapshots handed to tooling

use crate::models::Severity;
use serde::{Deserialize, Serialize};

/// Metadata carried by a directed ingredient -> condition edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    /// Free-text label, e.g. "increases_risk" or "triggers"
    pub relationship: String,
    pub severity: Severity,
}

impl GraphEdge {
    pub fn new(relationship: impl Into<String>, severity: Severity) -> Self {
        Self {
            relationship: relationship.into(),
            severity,
        }
    }
}

/// Structural statistics of the graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphMetrics {
    pub node_count: usize,
    pub edge_count: usize,
    /// `edges / (nodes * (nodes - 1))`, 0 for fewer than two nodes
    pub density: f64,
    /// `2 * edges / nodes` (in- plus out-degree), 0 for an empty graph
    pub avg_degree: f64,
}

impl GraphMetrics {
    pub fn compute(node_count: usize, edge_count: usize) -> Self {
        let density = if node_count > 1 {
            edge_count as f64 / (node_count as f64 * (node_count as f64 - 1.0))
        } else {
            0.0
        };
        let avg_degree = if node_count > 0 {
            2.0 * edge_count as f64 / node_count as f64
        } else {
            0.0
        };

        Self {
            node_count,
            edge_count,
            density,
            avg_degree,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportNode {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportEdge {
    pub source: String,
    pub target: String,
    pub relationship: String,
    pub severity: Severity,
}

/// Full snapshot of the graph for visualization tooling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphExport {
    pub nodes: Vec<ExportNode>,
    pub edges: Vec<ExportEdge>,
    pub metrics: GraphMetrics,
}
