//! Category resolution for statement formats that carry no category data
//!
//! Exact lookup in the configured merchant table first, then a best-match
//! fuzzy scan over every table key. The scan is O(table size) per key with
//! a quadratic-in-length similarity ratio per comparison, which is fine for
//! a statement file of a few hundred rows but would need a resolved-key
//! cache before bulk reprocessing of large archives.

use std::collections::{BTreeMap, HashMap};

use tracing_log::log::debug;

use crate::configuration::Settings;
use crate::model::UNKNOWN_CATEGORY;

/// Maps cleaned merchant text to a category label.
#[derive(Debug, Clone)]
pub struct CategoryResolver {
    /// Known merchant name (lowercase) -> category label. Iteration order is
    /// the table's sorted key order; fuzzy ties go to the first key seen.
    table: BTreeMap<String, String>,
    threshold: f64,
}

impl CategoryResolver {
    #[must_use]
    pub fn new(table: BTreeMap<String, String>, threshold: f64) -> Self {
        Self { table, threshold }
    }

    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.categories.clone(), settings.fuzzy_threshold)
    }

    /// Resolve a merchant key to a category label.
    ///
    /// Exact (lowercased) table hits return immediately. Otherwise the most
    /// similar table key wins, unless its score is below the acceptance
    /// threshold, in which case the `"Unknown"` sentinel is returned.
    #[must_use]
    pub fn resolve(&self, key: &str) -> String {
        let key = key.to_lowercase();

        if let Some(category) = self.table.get(&key) {
            return category.clone();
        }

        let mut best_name: Option<&String> = None;
        let mut best_score = 0.0;

        for name in self.table.keys() {
            let score = similarity_ratio(&key, name);
            if score > best_score {
                best_name = Some(name);
                best_score = score;
            }
        }

        if best_score < self.threshold {
            return UNKNOWN_CATEGORY.to_string();
        }

        match best_name {
            Some(name) => {
                let category = self.table[name].clone();
                debug!(
                    "Fuzzy match: {} vs. {} Category: {} Score: {:.1}",
                    key, name, category, best_score
                );
                category
            }
            None => UNKNOWN_CATEGORY.to_string(),
        }
    }
}

/// Similarity of two strings on a 0-100 scale.
///
/// `2 * M / (len(a) + len(b)) * 100`, where `M` counts the characters in
/// the longest matching blocks (recursively: the longest common substring,
/// then the longest match on each side of it).
#[must_use]
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() && b.is_empty() {
        return 100.0;
    }

    let matched = matching_chars(&a, &b);
    #[allow(clippy::cast_precision_loss)]
    let ratio = 2.0 * matched as f64 / (a.len() + b.len()) as f64;
    ratio * 100.0
}

fn matching_chars(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let (a_start, b_start, size) = longest_match(a, b);
    if size == 0 {
        return 0;
    }

    size + matching_chars(&a[..a_start], &b[..b_start])
        + matching_chars(&a[a_start + size..], &b[b_start + size..])
}

// Longest common substring as (start in a, start in b, length). Scanning
// both sequences in ascending order keeps the leftmost block on ties.
fn longest_match(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    let mut run_lengths: HashMap<usize, usize> = HashMap::new();

    for (i, &ca) in a.iter().enumerate() {
        let mut new_runs: HashMap<usize, usize> = HashMap::new();
        for (j, &cb) in b.iter().enumerate() {
            if ca == cb {
                let len = if j == 0 {
                    1
                } else {
                    run_lengths.get(&(j - 1)).copied().unwrap_or(0) + 1
                };
                new_runs.insert(j, len);
                if len > best.2 {
                    best = (i + 1 - len, j + 1 - len, len);
                }
            }
        }
        run_lengths = new_runs;
    }

    best
}

// -- Tests ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::test::sample_table;

    #[test]
    fn ratio_of_identical_strings_is_100() {
        assert_eq!(similarity_ratio("publix", "publix"), 100.0);
    }

    #[test]
    fn ratio_of_disjoint_strings_is_0() {
        assert_eq!(similarity_ratio("abc", "xyz"), 0.0);
    }

    #[test]
    fn ratio_counts_matching_blocks() {
        // Blocks: "bcd" -> 2 * 3 / 8 = 75
        assert_eq!(similarity_ratio("abcd", "bcde"), 75.0);
    }

    #[test]
    fn exact_match_bypasses_fuzzy_scoring() {
        // Arrange
        let resolver = CategoryResolver::new(sample_table(), 70.0);

        // Act / Assert: case-folded exact hit, regardless of other keys
        assert_eq!(resolver.resolve("PUBLIX"), "Groceries");
        assert_eq!(resolver.resolve("winn dixie"), "Groceries");
    }

    #[test]
    fn fuzzy_match_accepts_noisy_key() {
        let resolver = CategoryResolver::new(sample_table(), 70.0);

        // "publix #123" vs "publix": 2 * 6 / 17 = 70.6
        assert_eq!(resolver.resolve("PUBLIX #123"), "Groceries");
    }

    #[test]
    fn low_score_returns_unknown() {
        let resolver = CategoryResolver::new(sample_table(), 70.0);

        assert_eq!(resolver.resolve("zzzzzzzz"), "Unknown");
    }

    #[test]
    fn threshold_is_overridable() {
        let resolver = CategoryResolver::new(sample_table(), 90.0);

        // Same key that passes at 70 fails at 90
        assert_eq!(resolver.resolve("PUBLIX #123"), "Unknown");
    }

    #[test]
    fn ties_go_to_the_first_table_key() {
        // Arrange: two keys scoring identically against the input
        let mut table = std::collections::BTreeMap::new();
        table.insert("ax".to_string(), "First".to_string());
        table.insert("ay".to_string(), "Second".to_string());
        let resolver = CategoryResolver::new(table, 40.0);

        // Act / Assert: both score 50; "ax" iterates first
        assert_eq!(resolver.resolve("ab"), "First");
    }

    #[test]
    fn resolution_is_deterministic() {
        let resolver = CategoryResolver::new(sample_table(), 70.0);

        let first = resolver.resolve("winn dixie #5");
        for _ in 0..10 {
            assert_eq!(resolver.resolve("winn dixie #5"), first);
        }
    }

    #[test]
    fn empty_table_resolves_unknown() {
        let resolver = CategoryResolver::new(std::collections::BTreeMap::new(), 70.0);

        assert_eq!(resolver.resolve("publix"), "Unknown");
    }
}
