//! Token-set and character-level similarity functions.
//!
//! Two coarse measures back the row evaluator: Jaccard overlap between
//! model token sets, and a character-level sequence ratio used for fuzzy
//! model matching.

use std::collections::HashSet;

/// Jaccard similarity between two token sequences, treated as sets.
///
/// Duplicates collapse. Returns 0.0 if either sequence is empty — an
/// explicit zero-similarity convention, not an error.
#[must_use]
pub fn jaccard(a: &[String], b: &[String]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let set_a: HashSet<&str> = a.iter().map(String::as_str).collect();
    let set_b: HashSet<&str> = b.iter().map(String::as_str).collect();

    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.union(&set_b).count();

    intersection as f64 / union as f64
}

/// Character-level sequence similarity: `2·LCS(a, b) / (|a| + |b|)`.
///
/// The conventional longest-common-subsequence ratio in [0, 1]. Two
/// empty strings are defined as identical (1.0).
#[must_use]
pub fn lcs_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    // Single-row DP over the shorter string
    let (outer, inner) = if a.len() >= b.len() { (&a, &b) } else { (&b, &a) };
    let mut row = vec![0_usize; inner.len() + 1];

    for &oc in outer.iter() {
        let mut diag = 0; // row[j-1] from the previous iteration
        for (j, &ic) in inner.iter().enumerate() {
            let up = row[j + 1];
            row[j + 1] = if oc == ic {
                diag + 1
            } else {
                up.max(row[j])
            };
            diag = up;
        }
    }

    let lcs = row[inner.len()];
    2.0 * lcs as f64 / (a.len() + b.len()) as f64
}

/// Fuzzy comparison of two token sequences.
///
/// Each sequence is joined into a single space-separated string; the
/// match succeeds when [`lcs_ratio`] meets the threshold. Empty
/// sequences never match.
#[must_use]
pub fn fuzzy_match(a: &[String], b: &[String], threshold: f64) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    lcs_ratio(&a.join(" "), &b.join(" ")) >= threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn test_jaccard_identical() {
        let a = toks(&["camry", "le"]);
        assert_eq!(jaccard(&a, &a), 1.0);
    }

    #[test]
    fn test_jaccard_symmetry() {
        let a = toks(&["golf", "gti"]);
        let b = toks(&["golf", "r32"]);
        assert_eq!(jaccard(&a, &b), jaccard(&b, &a));
    }

    #[test]
    fn test_jaccard_partial_overlap() {
        let a = toks(&["golf", "gti"]);
        let b = toks(&["golf", "r32"]);
        // intersection {golf} = 1, union {golf, gti, r32} = 3
        assert!((jaccard(&a, &b) - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_jaccard_empty_convention() {
        let a = toks(&["civic"]);
        let empty: Vec<String> = Vec::new();
        assert_eq!(jaccard(&empty, &a), 0.0);
        assert_eq!(jaccard(&a, &empty), 0.0);
        assert_eq!(jaccard(&empty, &empty), 0.0);
    }

    #[test]
    fn test_jaccard_duplicates_collapse() {
        let a = toks(&["red", "red"]);
        let b = toks(&["red"]);
        assert_eq!(jaccard(&a, &b), 1.0);
    }

    #[test]
    fn test_lcs_ratio_identical() {
        assert_eq!(lcs_ratio("civic", "civic"), 1.0);
    }

    #[test]
    fn test_lcs_ratio_disjoint() {
        assert_eq!(lcs_ratio("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_lcs_ratio_known_value() {
        // LCS("camry", "camr") = 4 -> 2*4/(5+4)
        assert!((lcs_ratio("camry", "camr") - 8.0 / 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_lcs_ratio_empty_conventions() {
        assert_eq!(lcs_ratio("", ""), 1.0);
        assert_eq!(lcs_ratio("a", ""), 0.0);
    }

    #[test]
    fn test_fuzzy_match_close_spelling() {
        let a = toks(&["camry"]);
        let b = toks(&["camri"]);
        // LCS("camry", "camri") = 4 -> ratio 0.8, meets default threshold
        assert!(fuzzy_match(&a, &b, 0.8));
        assert!(!fuzzy_match(&a, &b, 0.9));
    }

    #[test]
    fn test_fuzzy_match_empty_never_matches() {
        let a = toks(&["civic"]);
        let empty: Vec<String> = Vec::new();
        assert!(!fuzzy_match(&a, &empty, 0.0));
        assert!(!fuzzy_match(&empty, &empty, 0.0));
    }
}
