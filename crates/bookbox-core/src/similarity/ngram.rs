//! NgramOracle - cosine similarity over character trigram counts

use std::collections::{BTreeMap, BTreeSet};

use super::{cosine_similarity, SimilarityOracle};

const GRAM: usize = 3;

/// Embeds each string as a bag of padded word trigrams and compares the bags
/// with cosine similarity. Scores lie in [0, 1].
///
/// Word padding makes "alice wonderland" share every trigram with
/// "Alice in Wonderland" while word order and small insertions cost little.
#[derive(Debug, Clone, Copy, Default)]
pub struct NgramOracle;

impl NgramOracle {
    pub fn new() -> Self {
        Self
    }
}

impl SimilarityOracle for NgramOracle {
    fn similarity(&self, candidate: &str, query: &str) -> f64 {
        let a = trigram_counts(candidate);
        let b = trigram_counts(query);

        let vocabulary: BTreeSet<&str> = a.keys().chain(b.keys()).map(String::as_str).collect();
        let embed = |counts: &BTreeMap<String, f32>| -> Vec<f32> {
            vocabulary
                .iter()
                .map(|gram| counts.get(*gram).copied().unwrap_or(0.0))
                .collect()
        };

        cosine_similarity(&embed(&a), &embed(&b)) as f64
    }
}

/// Trigram counts of each alphanumeric word, lowercased and padded with spaces.
fn trigram_counts(text: &str) -> BTreeMap<String, f32> {
    let mut counts = BTreeMap::new();
    for word in text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
    {
        let padded: Vec<char> = std::iter::once(' ')
            .chain(word.chars().flat_map(char::to_lowercase))
            .chain(std::iter::once(' '))
            .collect();
        for window in padded.windows(GRAM) {
            *counts.entry(window.iter().collect::<String>()).or_insert(0.0) += 1.0;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigram_counts() {
        let counts = trigram_counts("Ab");
        assert_eq!(counts.len(), 2);
        assert_eq!(counts.get(" ab"), Some(&1.0));
        assert_eq!(counts.get("ab "), Some(&1.0));
    }

    #[test]
    fn test_identical_text() {
        let score = NgramOracle.similarity("Alice in Wonderland", "alice in wonderland");
        assert!((score - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_partial_title() {
        let oracle = NgramOracle;
        let score = oracle.similarity("Alice in Wonderland", "alice wonderland");
        assert!(score > 0.9, "got {}", score);
    }

    #[test]
    fn test_no_shared_grams() {
        assert_eq!(NgramOracle.similarity("xyz", "abc"), 0.0);
    }

    #[test]
    fn test_punctuation_only_scores_zero() {
        assert_eq!(NgramOracle.similarity("Dune", "!!!"), 0.0);
    }
}
