//! Allergen detection: declared allergy text and allergen families

use crate::matching::matches;
use crate::models::{ConflictRecord, Severity};

/// Allergen families and the ingredient substrings that signal them
pub const ALLERGEN_FAMILIES: &[(&str, &[&str])] = &[
    ("peanut", &["peanut", "groundnut", "arachis"]),
    ("tree_nut", &["almond", "walnut", "cashew", "pecan", "macadamia"]),
    ("milk", &["milk", "dairy", "lactose", "whey", "casein"]),
    ("egg", &["egg", "ovomucin"]),
    ("fish", &["fish", "anchovy", "cod", "salmon"]),
    ("shellfish", &["shrimp", "crab", "lobster", "clam", "oyster"]),
    ("soy", &["soy", "soybean", "tofu"]),
    ("wheat", &["wheat", "gluten", "barley", "rye"]),
];

/// Families with at least one variant inside `ingredient` (lower-cased), in table order
pub fn families_in(ingredient: &str) -> impl Iterator<Item = &'static str> + '_ {
    ALLERGEN_FAMILIES
        .iter()
        .filter(move |(_, variants)| variants.iter().any(|v| ingredient.contains(v)))
        .map(|&(family, _)| family)
}

/// First family present in `ingredient` whose name matches `allergy`
pub fn matching_family(ingredient: &str, allergy: &str) -> Option<&'static str> {
    families_in(ingredient).find(|family| matches(family, allergy))
}

/// Allergy conflicts for every ingredient/allergy pair
///
/// The allergy text appearing in the ingredient wins; otherwise the allergen
/// family table is consulted. Every allergy conflict is `High`.
pub fn allergy_conflicts(ingredients: &[&str], allergies: &[&str]) -> Vec<ConflictRecord> {
    let mut conflicts = Vec::new();

    for &ingredient in ingredients {
        let ingredient_lower = ingredient.trim().to_lowercase();

        for &allergy in allergies {
            let allergy_lower = allergy.trim().to_lowercase();
            let health_condition = format!("Allergy: {allergy}");

            if ingredient_lower.contains(&allergy_lower) {
                conflicts.push(ConflictRecord::direct(
                    ingredient,
                    health_condition,
                    "allergen_present",
                    Severity::High,
                ));
                continue;
            }

            if let Some(family) = matching_family(&ingredient_lower, &allergy_lower) {
                conflicts.push(ConflictRecord::direct(
                    ingredient,
                    health_condition,
                    format!("allergen_family ({family})"),
                    Severity::High,
                ));
            }
        }
    }

    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_families_in() {
        assert_eq!(families_in("whey protein isolate").collect::<Vec<_>>(), vec!["milk"]);
        assert_eq!(
            families_in("peanut butter with almonds").collect::<Vec<_>>(),
            vec!["peanut", "tree_nut"]
        );
        assert_eq!(families_in("water").count(), 0);
    }

    #[test]
    fn test_allergen_present() {
        let conflicts = allergy_conflicts(&["Whole Milk Powder"], &["Milk"]);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].ingredient, "Whole Milk Powder");
        assert_eq!(conflicts[0].health_condition, "Allergy: Milk");
        assert_eq!(conflicts[0].relationship, "allergen_present");
        assert_eq!(conflicts[0].severity, Severity::High);
        assert!(conflicts[0].direct);
    }

    #[test]
    fn test_allergen_family() {
        let conflicts = allergy_conflicts(&["whey protein"], &["milk"]);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].relationship, "allergen_family (milk)");
        assert_eq!(conflicts[0].severity, Severity::High);
        assert!(conflicts[0].direct);
    }

    #[test]
    fn test_family_name_is_fuzzy_matched() {
        let conflicts = allergy_conflicts(&["roasted cashews"], &["tree nuts"]);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].relationship, "allergen_family (tree_nut)");
        assert_eq!(conflicts[0].health_condition, "Allergy: tree nuts");
    }

    #[test]
    fn test_no_conflict() {
        assert!(allergy_conflicts(&["water"], &["milk"]).is_empty());
        assert!(allergy_conflicts(&["sugar"], &["peanuts", "shellfish"]).is_empty());
    }

    #[test]
    fn test_present_checked_before_family() {
        let conflicts = allergy_conflicts(&["egg white", "casein"], &["egg", "milk"]);
        let relationships: Vec<_> = conflicts.iter().map(|c| c.relationship.as_str()).collect();
        assert_eq!(relationships, vec!["allergen_present", "allergen_family (milk)"]);
    }

    #[test]
    fn test_skips_families_that_do_not_match() {
        // peanut is present first in table order but does not match "tree nut"
        let conflicts = allergy_conflicts(&["peanut butter with almonds"], &["tree nut"]);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].relationship, "allergen_family (tree_nut)");
    }
}
