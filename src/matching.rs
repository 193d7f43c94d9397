//! Label normalization and fuzzy matching
//!
//! Node keys are normalized labels: lower-cased, trimmed, internal spaces
//! replaced with underscores. `matches` decides whether a graph label and a
//! user supplied label name the same concept.
//!
//! The last matching stage is a crude character-overlap score, not an edit
//! distance. It is order-insensitive and asymmetric (only characters of the
//! first label are counted), so unrelated words that share many letters can
//! match: `matches("diabetes", "beasts")` is true. It is kept as-is so
//! results stay comparable with existing deployments; a proper metric is a
//! candidate replacement.

/// Overlap score a pair must exceed to count as a match
pub const SIMILARITY_THRESHOLD: f64 = 0.7;

/// Normalize a label into a node key
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase().replace(' ', "_")
}

/// Turn a node key back into a display label
pub fn denormalize(key: &str) -> String {
    key.replace('_', " ")
}

/// Fraction of `a`'s characters that occur anywhere in `b`, over the longer length.
///
/// Lengths are counted in chars. Returns 0.0 when either side is empty.
pub fn string_similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let common = a.chars().filter(|&c| b.contains(c)).count();
    let longest = a.chars().count().max(b.chars().count());
    common as f64 / longest as f64
}

/// Whether two labels refer to the same concept
///
/// Exact match, then substring containment in either direction, then
/// `string_similarity > SIMILARITY_THRESHOLD` on the normalized forms.
pub fn matches(a: &str, b: &str) -> bool {
    let a = normalize(a);
    let b = normalize(b);

    if a == b {
        return true;
    }

    if a.contains(b.as_str()) || b.contains(a.as_str()) {
        return true;
    }

    string_similarity(&a, &b) > SIMILARITY_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Trans Fat "), "trans_fat");
        assert_eq!(normalize("Celiac Disease"), "celiac_disease");
        assert_eq!(normalize("sodium"), "sodium");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for label in ["High Blood Pressure", " sugar ", "already_normal", "MSG"] {
            let once = normalize(label);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_denormalize() {
        assert_eq!(denormalize("blood_pressure"), "blood pressure");
        assert_eq!(denormalize("sodium"), "sodium");
    }

    #[test]
    fn test_exact_and_case_insensitive() {
        assert!(matches("Hypertension", "hypertension"));
        assert!(matches("blood pressure", "blood_pressure"));
    }

    #[test]
    fn test_substring_either_direction() {
        assert!(matches("diabetes", "type 2 diabetes"));
        assert!(matches("type_2_diabetes", "diabetes"));
        assert!(matches("peanut_allergy", "peanut"));
    }

    #[test]
    fn test_unrelated_labels_do_not_match() {
        assert!(!matches("hypertension", "diabetes"));
        assert!(!matches("cholesterol", "hyperactivity"));
        assert!(!matches("milk", "peanuts"));
    }

    #[test]
    fn test_character_overlap_false_positive() {
        // 6 of 8 chars of "diabetes" appear in "beasts": 0.75
        assert!((string_similarity("diabetes", "beasts") - 0.75).abs() < 1e-9);
        assert!(matches("diabetes", "beasts"));
    }

    #[test]
    fn test_similarity_is_asymmetric() {
        assert!((string_similarity("aaa", "abc") - 1.0).abs() < 1e-9);
        assert!((string_similarity("abc", "aaa") - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_similarity_threshold_is_strict() {
        // 7 of 10 shared: exactly 0.7 is not a match
        assert!((string_similarity("abcdefgxyz", "abcdefgqrs") - 0.7).abs() < 1e-9);
        assert!(!matches("abcdefgxyz", "abcdefgqrs"));
    }

    #[test]
    fn test_similarity_empty() {
        assert_eq!(string_similarity("", "abc"), 0.0);
        assert_eq!(string_similarity("abc", ""), 0.0);
    }
}
