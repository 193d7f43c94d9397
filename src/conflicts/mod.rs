//! Conflict resolution between ingredients and a health profile
//!
//! A query runs three passes against the graph and concatenates them:
//!
//! 1. **Direct** - an ingredient node with an edge to a node matching one of
//!    the user's conditions.
//! 2. **Indirect** - paths of 2+ edges from the ingredient to a condition node,
//!    bounded by `max_path_depth` nodes.
//! 3. **Allergy** - allergy text or allergen family found in the ingredient.
//!
//! The list is then reduced to the first record per
//! `(ingredient, health_condition)` pair. Queries never fail: unknown nodes
//! and blank inputs simply contribute nothing.

pub mod allergens;
pub mod paths;
pub mod severity;

pub use allergens::{allergy_conflicts, ALLERGEN_FAMILIES};
pub use paths::{find_paths, MAX_PATH_DEPTH};
pub use severity::{aggregate, path_severity};

use crate::graph::GraphQuery;
use crate::matching::{matches, normalize};
use crate::models::ConflictRecord;
use rustc_hash::FxHashSet;
use tracing::debug;

/// Runs conflict queries against one graph
pub struct ConflictResolver<'g, G: GraphQuery + ?Sized> {
    graph: &'g G,
    max_path_depth: usize,
}

impl<'g, G: GraphQuery + ?Sized> ConflictResolver<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        Self {
            graph,
            max_path_depth: MAX_PATH_DEPTH,
        }
    }

    pub fn with_max_path_depth(mut self, max_path_depth: usize) -> Self {
        self.max_path_depth = max_path_depth;
        self
    }

    /// Find all conflicts for a product's ingredients and a user's profile
    ///
    /// Order is deterministic: direct, then indirect, then allergy conflicts,
    /// each in input order, with later duplicates of a pair dropped.
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
        let ingredients = non_blank(ingredients);
        let conditions = non_blank(conditions);
        let allergies = non_blank(allergies);

        let direct = self.direct_conflicts(&ingredients, &conditions);
        let indirect = self.indirect_conflicts(&ingredients, &conditions);
        let allergy = allergy_conflicts(&ingredients, &allergies);

        debug!(
            "Found {} direct, {} indirect, {} allergy conflicts for {} ingredients",
            direct.len(),
            indirect.len(),
            allergy.len(),
            ingredients.len()
        );

        dedup(direct.into_iter().chain(indirect).chain(allergy))
    }

    /// Ingredient -> successor edges whose successor matches a user condition
    ///
    /// One record per (ingredient, successor): the first matching condition wins.
    fn direct_conflicts(&self, ingredients: &[&str], conditions: &[&str]) -> Vec<ConflictRecord> {
        let mut conflicts = Vec::new();

        for &ingredient in ingredients {
            let key = normalize(ingredient);
            if !self.graph.has_node(&key) {
                continue;
            }

            for successor in self.graph.successors(&key) {
                let Some(&condition) = conditions.iter().find(|&&c| matches(&successor, c)) else {
                    continue;
                };
                if let Some(edge) = self.graph.edge(&key, &successor) {
                    conflicts.push(ConflictRecord::direct(
                        ingredient,
                        condition,
                        edge.relationship,
                        edge.severity,
                    ));
                }
            }
        }

        conflicts
    }

    /// Multi-hop paths from each ingredient to each condition node
    fn indirect_conflicts(&self, ingredients: &[&str], conditions: &[&str]) -> Vec<ConflictRecord> {
        let mut conflicts = Vec::new();

        for &ingredient in ingredients {
            let key = normalize(ingredient);
            if !self.graph.has_node(&key) {
                continue;
            }

            for &condition in conditions {
                for path in find_paths(self.graph, &key, condition, self.max_path_depth) {
                    if path.len() <= 2 {
                        continue;
                    }
                    let severity = path_severity(self.graph, &path);
                    let relationship = format!("indirect ({})", path[1..path.len() - 1].join(" -> "));
                    conflicts.push(ConflictRecord::indirect(
                        ingredient,
                        condition,
                        relationship,
                        severity,
                        path,
                    ));
                }
            }
        }

        conflicts
    }
}

/// Drop empty and whitespace-only entries
fn non_blank<S: AsRef<str>>(items: &[S]) -> Vec<&str> {
    items
        .iter()
        .map(AsRef::as_ref)
        .filter(|s| !s.trim().is_empty())
        .collect()
}

/// Keep the first record for each (ingredient, health_condition) pair
fn dedup(conflicts: impl IntoIterator<Item = ConflictRecord>) -> Vec<ConflictRecord> {
    let mut seen: FxHashSet<(String, String)> = FxHashSet::default();
    conflicts
        .into_iter()
        .filter(|c| seen.insert((c.ingredient.clone(), c.health_condition.clone())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{default_relationships, GraphStore};
    use crate::models::Severity;

    const NONE: &[&str] = &[];

    fn seeded() -> GraphStore {
        GraphStore::with_relationships(&default_relationships())
    }

    #[test]
    fn test_direct_conflict() {
        let store = seeded();
        let resolver = ConflictResolver::new(&store);

        let conflicts = resolver.find_conflicts(&["Sodium"], &["hypertension"], NONE);

        assert_eq!(conflicts.len(), 1);
        let c = &conflicts[0];
        assert_eq!(c.ingredient, "Sodium");
        assert_eq!(c.health_condition, "hypertension");
        assert_eq!(c.relationship, "increases_risk");
        assert_eq!(c.severity, Severity::High);
        assert!(c.direct);
        assert!(c.path.is_none());
    }

    #[test]
    fn test_direct_uses_fuzzy_condition_match() {
        let store = seeded();
        let resolver = ConflictResolver::new(&store);

        let conflicts = resolver.find_conflicts(&["sugar"], &["Type 2 Diabetes"], NONE);

        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].health_condition, "Type 2 Diabetes");
        assert_eq!(conflicts[0].relationship, "increases_risk");
    }

    #[test]
    fn test_first_condition_wins_per_successor() {
        let store = seeded();
        let resolver = ConflictResolver::new(&store);

        // both conditions match the celiac_disease node
        let conflicts = resolver.find_conflicts(&["gluten"], &["celiac", "celiac disease"], NONE);

        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].health_condition, "celiac");
    }

    #[test]
    fn test_one_record_per_pair() {
        let store = GraphStore::new();
        store.add_edge("salt", "hypertension", "increases_risk", Severity::High);
        store.add_edge("salt", "essential_hypertension", "increases_risk", Severity::Medium);
        let resolver = ConflictResolver::new(&store);

        let conflicts = resolver.find_conflicts(&["salt"], &["hypertension"], NONE);

        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].severity, Severity::High);
    }

    #[test]
    fn test_indirect_conflict() {
        let store = GraphStore::new();
        store.add_edge("sugar", "insulin_resistance", "causes", Severity::Medium);
        store.add_edge("insulin_resistance", "diabetes", "leads_to", Severity::High);
        let resolver = ConflictResolver::new(&store);

        let conflicts = resolver.find_conflicts(&["Sugar"], &["diabetes"], NONE);

        assert_eq!(conflicts.len(), 1);
        let c = &conflicts[0];
        assert!(!c.direct);
        assert_eq!(c.relationship, "indirect (insulin_resistance)");
        assert_eq!(c.severity, Severity::High);
        assert_eq!(
            c.path.as_deref(),
            Some(&["sugar".to_string(), "insulin_resistance".to_string(), "diabetes".to_string()][..])
        );
    }

    #[test]
    fn test_indirect_severity_from_path() {
        let store = GraphStore::new();
        store.add_edge("msg", "glutamate_sensitivity", "triggers", Severity::Low);
        store.add_edge("glutamate_sensitivity", "migraine", "provokes", Severity::Medium);
        let resolver = ConflictResolver::new(&store);

        let conflicts = resolver.find_conflicts(&["MSG"], &["migraine"], NONE);

        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].severity, Severity::Medium);
    }

    #[test]
    fn test_direct_takes_precedence_over_indirect() {
        let store = GraphStore::new();
        store.add_edge("sugar", "diabetes", "increases_risk", Severity::Medium);
        store.add_edge("sugar", "insulin_resistance", "causes", Severity::High);
        store.add_edge("insulin_resistance", "diabetes", "leads_to", Severity::High);
        let resolver = ConflictResolver::new(&store);

        let conflicts = resolver.find_conflicts(&["sugar"], &["diabetes"], NONE);

        assert_eq!(conflicts.len(), 1);
        assert!(conflicts[0].direct);
        assert_eq!(conflicts[0].severity, Severity::Medium);
    }

    #[test]
    fn test_long_chains_not_reported() {
        let store = GraphStore::new();
        store.add_edge("a", "b", "r", Severity::High);
        store.add_edge("b", "c", "r", Severity::High);
        store.add_edge("c", "zzz", "r", Severity::High);
        let resolver = ConflictResolver::new(&store);

        assert!(resolver.find_conflicts(&["a"], &["zzz"], NONE).is_empty());

        let deeper = ConflictResolver::new(&store).with_max_path_depth(4);
        let conflicts = deeper.find_conflicts(&["a"], &["zzz"], NONE);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].relationship, "indirect (b -> c)");
    }

    #[test]
    fn test_allergy_conflicts_follow_graph_conflicts() {
        let store = seeded();
        let resolver = ConflictResolver::new(&store);

        let conflicts = resolver.find_conflicts(&["peanuts", "salt"], &["peanut allergy"], &["peanut"]);

        let pairs: Vec<_> = conflicts.iter().map(|c| c.pair()).collect();
        assert_eq!(
            pairs,
            vec![("peanuts", "peanut allergy"), ("peanuts", "Allergy: peanut")]
        );
        assert_eq!(conflicts[1].relationship, "allergen_present");
    }

    #[test]
    fn test_unknown_nodes_are_skipped() {
        let store = seeded();
        let resolver = ConflictResolver::new(&store);

        assert!(resolver
            .find_conflicts(&["unknown_xyz"], &["unknown_cond"], NONE)
            .is_empty());
        assert!(resolver.find_conflicts(NONE, NONE, NONE).is_empty());
    }

    #[test]
    fn test_blank_inputs_contribute_nothing() {
        let store = seeded();
        let resolver = ConflictResolver::new(&store);

        // a blank condition would otherwise substring-match every node
        assert!(resolver.find_conflicts(&["sodium"], &["", "  "], NONE).is_empty());
        // a blank allergy would otherwise be "contained" in every ingredient
        assert!(resolver.find_conflicts(&["water"], NONE, &[""]).is_empty());
        assert!(resolver.find_conflicts(&["", " "], &["hypertension"], &["milk"]).is_empty());
    }

    #[test]
    fn test_deterministic() {
        let store = seeded();
        store.add_edge("sodium", "fluid_retention", "causes", Severity::Medium);
        store.add_edge("fluid_retention", "hypertension", "worsens", Severity::Low);
        let resolver = ConflictResolver::new(&store);

        let ingredients = ["Sodium", "sugar", "whey", "peanut oil"];
        let conditions = ["hypertension", "diabetes"];
        let allergies = ["milk", "peanuts"];

        let first = resolver.find_conflicts(&ingredients, &conditions, &allergies);
        for _ in 0..10 {
            assert_eq!(resolver.find_conflicts(&ingredients, &conditions, &allergies), first);
        }
    }

    #[test]
    fn test_dedup_keeps_first() {
        let records = vec![
            ConflictRecord::direct("a", "x", "first", Severity::Low),
            ConflictRecord::direct("a", "y", "other", Severity::Low),
            ConflictRecord::direct("a", "x", "second", Severity::High),
        ];
        let unique = dedup(records);
        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].relationship, "first");
    }

    #[test]
    fn test_works_with_owned_strings() {
        let store = seeded();
        let resolver = ConflictResolver::new(&store);

        let ingredients = vec!["Trans Fat".to_string()];
        let conditions = vec!["heart disease".to_string()];
        let conflicts = resolver.find_conflicts(&ingredients, &conditions, NONE);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].relationship, "increases_risk");
    }
}
