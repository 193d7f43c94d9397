//! In-memory graph store using petgraph
//!
//! The whole graph (petgraph `DiGraph` plus the key -> index map) sits behind
//! one `RwLock`: queries share the read lock, structural mutation takes the
//! write lock. Nodes are created implicitly by the first edge that names them
//! and are never removed, so `NodeIndex` and `EdgeIndex` order is insertion
//! order.

use super::seed::SeedRelationship;
use super::store_models::{ExportEdge, ExportNode, GraphEdge, GraphExport, GraphMetrics};
use super::traits::GraphQuery;
use crate::matching::{denormalize, normalize};
use crate::models::Severity;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info};

/// Graph data guarded by the store's lock
#[derive(Debug, Default)]
struct HealthGraph {
    graph: DiGraph<String, GraphEdge>,
    /// Node lookup by normalized key
    node_index: HashMap<String, NodeIndex>,
}

impl HealthGraph {
    fn index_of(&self, key: &str) -> Option<NodeIndex> {
        self.node_index.get(&normalize(key)).copied()
    }

    fn ensure_node(&mut self, key: String) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(&key) {
            return idx;
        }
        let idx = self.graph.add_node(key.clone());
        self.node_index.insert(key, idx);
        idx
    }

    /// Insert or overwrite the edge between two (unnormalized) labels
    fn insert(&mut self, source: &str, target: &str, edge: GraphEdge) {
        let from = self.ensure_node(normalize(source));
        let to = self.ensure_node(normalize(target));
        self.graph.update_edge(from, to, edge);
    }

    fn has_node(&self, key: &str) -> bool {
        self.index_of(key).is_some()
    }

    fn successors(&self, key: &str) -> Vec<String> {
        let Some(idx) = self.index_of(key) else {
            return Vec::new();
        };

        // petgraph walks a node's edge list newest first
        let mut edges: Vec<_> = self.graph.edges_directed(idx, Direction::Outgoing).collect();
        edges.sort_by_key(|e| e.id());
        edges
            .into_iter()
            .map(|e| self.graph[e.target()].clone())
            .collect()
    }

    fn edge(&self, source: &str, target: &str) -> Option<GraphEdge> {
        let from = self.index_of(source)?;
        let to = self.index_of(target)?;
        let edge_idx = self.graph.find_edge(from, to)?;
        Some(self.graph[edge_idx].clone())
    }

    fn metrics(&self) -> GraphMetrics {
        GraphMetrics::compute(self.graph.node_count(), self.graph.edge_count())
    }

    fn export(&self) -> GraphExport {
        let nodes = self
            .graph
            .node_weights()
            .map(|key| ExportNode {
                id: key.clone(),
                label: denormalize(key),
            })
            .collect();

        let edges = self
            .graph
            .edge_references()
            .map(|e| ExportEdge {
                source: self.graph[e.source()].clone(),
                target: self.graph[e.target()].clone(),
                relationship: e.weight().relationship.clone(),
                severity: e.weight().severity,
            })
            .collect();

        GraphExport {
            nodes,
            edges,
            metrics: self.metrics(),
        }
    }
}

/// Shared ingredient-health graph
///
/// Construct once at startup, share behind an `Arc`, and query from any
/// number of threads.
#[derive(Debug, Default)]
pub struct GraphStore {
    inner: RwLock<HealthGraph>,
}

impl GraphStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store populated with the given relationships
    pub fn with_relationships(relationships: &[SeedRelationship]) -> Self {
        let store = Self::new();
        store.add_edges_batch(relationships);
        store
    }

    // ==================== Lock Helpers ====================
    //
    // A poisoned lock means a writer panicked mid-insert. Edge insertion
    // leaves the graph structurally valid at every step, so the data is
    // still usable and queries keep answering instead of panicking.

    fn read(&self) -> RwLockReadGuard<'_, HealthGraph> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HealthGraph> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Hold the read lock for a sequence of queries that must see one graph
    pub fn view(&self) -> GraphView<'_> {
        GraphView { guard: self.read() }
    }

    /// Remove all nodes and edges
    pub fn clear(&self) {
        let mut inner = self.write();
        inner.graph.clear();
        inner.node_index.clear();
    }

    // ==================== Mutation ====================

    /// Add or overwrite the edge `source -> target`
    ///
    /// Both endpoints are normalized and created if missing. Never fails.
    pub fn add_edge(
        &self,
        source: &str,
        target: &str,
        relationship: impl Into<String>,
        severity: Severity,
    ) {
        let edge = GraphEdge::new(relationship, severity);
        debug!(
            "Adding relationship {} -> {} ({}, {})",
            source, target, edge.relationship, edge.severity
        );
        self.write().insert(source, target, edge);
    }

    /// Add many relationships under a single write lock
    pub fn add_edges_batch(&self, relationships: &[SeedRelationship]) -> usize {
        let mut inner = self.write();
        for rel in relationships {
            inner.insert(
                &rel.source,
                &rel.target,
                GraphEdge::new(rel.relationship.clone(), rel.severity),
            );
        }

        info!(
            "Loaded {} relationships ({} nodes, {} edges)",
            relationships.len(),
            inner.graph.node_count(),
            inner.graph.edge_count()
        );
        relationships.len()
    }

    // ==================== Queries ====================

    pub fn has_node(&self, key: &str) -> bool {
        self.read().has_node(key)
    }

    /// Direct successors in edge insertion order; empty for unknown nodes
    pub fn successors(&self, key: &str) -> Vec<String> {
        self.read().successors(key)
    }

    pub fn edge(&self, source: &str, target: &str) -> Option<GraphEdge> {
        self.read().edge(source, target)
    }

    pub fn node_count(&self) -> usize {
        self.read().graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.read().graph.edge_count()
    }

    pub fn metrics(&self) -> GraphMetrics {
        self.read().metrics()
    }

    /// Snapshot of every node and edge plus metrics
    pub fn export(&self) -> GraphExport {
        self.read().export()
    }
}

impl GraphQuery for GraphStore {
    fn has_node(&self, key: &str) -> bool {
        GraphStore::has_node(self, key)
    }

    fn successors(&self, key: &str) -> Vec<String> {
        GraphStore::successors(self, key)
    }

    fn edge(&self, source: &str, target: &str) -> Option<GraphEdge> {
        GraphStore::edge(self, source, target)
    }
}

/// Read-locked view of a `GraphStore`
///
/// Writers block until the view is dropped, so keep it scoped to one query.
pub struct GraphView<'a> {
    guard: RwLockReadGuard<'a, HealthGraph>,
}

impl GraphView<'_> {
    pub fn node_count(&self) -> usize {
        self.guard.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.guard.graph.edge_count()
    }
}

impl GraphQuery for GraphView<'_> {
    fn has_node(&self, key: &str) -> bool {
        self.guard.has_node(key)
    }

    fn successors(&self, key: &str) -> Vec<String> {
        self.guard.successors(key)
    }

    fn edge(&self, source: &str, target: &str) -> Option<GraphEdge> {
        self.guard.edge(source, target)
    }
}
