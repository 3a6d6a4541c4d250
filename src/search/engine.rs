//! Catalog name search
//!
//! Case-insensitive exact substring search with a fuzzy edit-distance
//! fallback. The two stages are never blended: exact matches always win, and
//! fuzzy results only appear when there is no exact match at all.

use super::levenshtein::similarity;

/// Similarity cutoff for the fuzzy fallback in [`search_smart`]
pub const SMART_FUZZY_THRESHOLD: f64 = 0.6;

/// Case-insensitive substring search, preserving catalog order
///
/// An empty query matches every name.
pub fn search_exact(query: &str, names: &[String]) -> Vec<String> {
    let query = query.to_lowercase();

    names
        .iter()
        .filter(|name| name.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

/// Names whose similarity to the query strictly exceeds the threshold
///
/// Both sides are lowercased before comparison; catalog order is preserved
/// among matches. A name exactly at the threshold is excluded.
///
/// # Panics
///
/// Panics if `threshold` is negative.
pub fn search_fuzzy(query: &str, names: &[String], threshold: f64) -> Vec<String> {
    assert!(
        threshold >= 0.0,
        "similarity threshold must be non-negative, got {}",
        threshold
    );

    let query = query.to_lowercase();

    names
        .iter()
        .filter(|name| similarity(&query, &name.to_lowercase()) > threshold)
        .cloned()
        .collect()
}

/// Exact matches when any exist, otherwise the fuzzy fallback
///
/// The defining two-stage policy: if the substring search finds anything,
/// exactly those names are returned; only an empty exact result falls
/// through to fuzzy matching at [`SMART_FUZZY_THRESHOLD`].
pub fn search_smart(query: &str, names: &[String]) -> Vec<String> {
    let exact = search_exact(query, names);
    if !exact.is_empty() {
        return exact;
    }

    search_fuzzy(query, names, SMART_FUZZY_THRESHOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exact_is_case_insensitive() {
        let catalog = names(&["Chicken Soup", "Beef Stew"]);
        assert_eq!(search_exact("chicken", &catalog), vec!["Chicken Soup"]);
        assert_eq!(search_exact("BEEF", &catalog), vec!["Beef Stew"]);
    }

    #[test]
    fn test_exact_preserves_catalog_order() {
        let catalog = names(&["Egg Fried Rice", "Shrimp Fried Rice", "Lentil Soup"]);
        assert_eq!(
            search_exact("fried rice", &catalog),
            vec!["Egg Fried Rice", "Shrimp Fried Rice"]
        );
    }

    #[test]
    fn test_exact_empty_query_matches_everything() {
        let catalog = names(&["Avocado Toast", "Vegan Chili"]);
        assert_eq!(search_exact("", &catalog), catalog);
    }

    #[test]
    fn test_exact_no_match_is_empty() {
        let catalog = names(&["Avocado Toast"]);
        assert!(search_exact("chicken", &catalog).is_empty());
    }

    #[test]
    fn test_fuzzy_threshold_is_strict() {
        let catalog = names(&["abce"]);
        // similarity("abcd", "abce") is exactly 0.75
        assert!(search_fuzzy("abcd", &catalog, 0.75).is_empty());
        assert_eq!(search_fuzzy("abcd", &catalog, 0.7), vec!["abce"]);
    }

    #[test]
    fn test_fuzzy_near_one_threshold_excludes_near_misses() {
        let catalog = names(&["Chicken Soup", "Chickpea Curry"]);
        assert!(search_fuzzy("chicken", &catalog, 0.99).is_empty());
        // Only an identical name survives a near-1.0 threshold
        let catalog = names(&["Chicken"]);
        assert_eq!(search_fuzzy("chicken", &catalog, 0.99), vec!["Chicken"]);
    }

    #[test]
    fn test_fuzzy_is_case_insensitive() {
        let catalog = names(&["CHICKEN"]);
        assert_eq!(search_fuzzy("chiken", &catalog, 0.6), vec!["CHICKEN"]);
    }

    #[test]
    #[should_panic(expected = "threshold must be non-negative")]
    fn test_fuzzy_negative_threshold_panics() {
        search_fuzzy("a", &names(&["b"]), -0.1);
    }

    #[test]
    fn test_smart_exact_wins() {
        let catalog = names(&["Chicken Soup", "Beef Stew"]);
        assert_eq!(search_smart("chicken", &catalog), vec!["Chicken Soup"]);
    }

    #[test]
    fn test_smart_falls_back_to_fuzzy() {
        // No substring match for the typo; similarity("chiken", "chicken")
        // is 6/7, well above the fallback threshold
        let catalog = names(&["Chicken", "Beef Stew"]);
        assert_eq!(search_smart("chiken", &catalog), vec!["Chicken"]);
    }

    #[test]
    fn test_smart_does_not_blend_stages() {
        // "rice" matches exactly once; the fuzzy stage would also admit
        // "Ride" (similarity 3/4) but must not run at all
        let catalog = names(&["Rice", "Ride"]);
        assert_eq!(search_smart("rice", &catalog), vec!["Rice"]);
    }

    #[test]
    fn test_smart_no_match_at_all() {
        let catalog = names(&["Avocado Toast"]);
        assert!(search_smart("zzzzzz", &catalog).is_empty());
    }
}
