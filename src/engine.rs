//! Conflict engine facade
//!
//! `ConflictEngine` ties a shared [`GraphStore`] to resolver settings. Hosts
//! build one explicitly and hand clones of it (or of its graph) to whatever
//! needs to run checks.

use crate::config::{EngineConfig, ResolverConfig};
use crate::conflicts::ConflictResolver;
use crate::graph::{GraphExport, GraphMetrics, GraphStore};
use crate::matching::denormalize;
use crate::models::{ConflictRecord, HealthProfile, Severity};
use rayon::prelude::*;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ConflictEngine {
    graph: Arc<GraphStore>,
    config: ResolverConfig,
}

impl ConflictEngine {
    pub fn new(graph: Arc<GraphStore>, config: ResolverConfig) -> Self {
        Self { graph, config }
    }

    /// Build a fresh graph seeded from `config`
    pub fn from_config(config: &EngineConfig) -> Self {
        let graph = GraphStore::with_relationships(&config.seed.relationships());
        Self::new(Arc::new(graph), config.resolver)
    }

    pub fn graph(&self) -> &Arc<GraphStore> {
        &self.graph
    }

    pub fn resolver_config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn add_relationship(
        &self,
        source: &str,
        target: &str,
        relationship: impl Into<String>,
        severity: Severity,
    ) {
        self.graph.add_edge(source, target, relationship, severity);
    }

    /// All conflicts between `ingredients` and the given conditions/allergies
    ///
    /// The whole query runs against one read snapshot of the graph.
    pub fn find_conflicts<I, C, A>(
        &self,
        ingredients: &[I],
        conditions: &[C],
        allergies: &[A],
    ) -> Vec<ConflictRecord>
    where
        I: AsRef<str>,
        C: AsRef<str>,
        A: AsRef<str>,
    {
        let view = self.graph.view();
        let conflicts = ConflictResolver::new(&view)
            .with_max_path_depth(self.config.max_path_depth)
            .find_conflicts(ingredients, conditions, allergies);
        conflicts
    }

    pub fn check_profile<I: AsRef<str>>(
        &self,
        ingredients: &[I],
        profile: &HealthProfile,
    ) -> Vec<ConflictRecord> {
        self.find_conflicts(ingredients, &profile.conditions, &profile.allergies)
    }

    /// Check many products against one profile in parallel
    ///
    /// Output order matches `products`.
    pub fn screen_products(
        &self,
        products: &[Vec<String>],
        profile: &HealthProfile,
    ) -> Vec<Vec<ConflictRecord>> {
        debug!("Screening {} products", products.len());
        products
            .par_iter()
            .map(|ingredients| self.check_profile(ingredients, profile))
            .collect()
    }

    /// Conditions directly linked from `ingredient`, in display form
    pub fn related_conditions(&self, ingredient: &str) -> Vec<String> {
        self.graph
            .successors(ingredient)
            .iter()
            .map(|key| denormalize(key))
            .collect()
    }

    pub fn metrics(&self) -> GraphMetrics {
        self.graph.metrics()
    }

    pub fn export(&self) -> GraphExport {
        self.graph.export()
    }
}

impl Default for ConflictEngine {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}
