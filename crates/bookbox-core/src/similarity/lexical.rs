//! LexicalOracle - strategy-cascade scoring over lowercased text

use super::strategies;
use super::SimilarityOracle;
use strsim::jaro_winkler;
use tracing::trace;

/// Tuning for the lexical cascade
#[derive(Debug, Clone)]
pub struct LexicalConfig {
    pub max_edit_distance: usize,
    pub min_fuzzy_length: usize,
    /// Weight applied to raw Jaro-Winkler when no strategy claims the pair
    pub fallback_weight: f64,
}

impl Default for LexicalConfig {
    fn default() -> Self {
        Self {
            max_edit_distance: 2,
            min_fuzzy_length: 3,
            fallback_weight: 0.5,
        }
    }
}

/// Scores by the first matching strategy, case-insensitively.
///
/// Pairs no strategy accepts still get a graded score (weighted Jaro-Winkler,
/// at most `fallback_weight`), so a best guess exists for every query.
#[derive(Debug, Clone, Default)]
pub struct LexicalOracle {
    config: LexicalConfig,
}

impl LexicalOracle {
    /// Create a new LexicalOracle with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom configuration
    pub fn with_config(config: LexicalConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LexicalConfig {
        &self.config
    }
}

impl SimilarityOracle for LexicalOracle {
    fn similarity(&self, candidate: &str, query: &str) -> f64 {
        let query_lower = query.trim().to_lowercase();
        let item_lower = candidate.trim().to_lowercase();

        match strategies::score_match(
            &query_lower,
            &item_lower,
            self.config.min_fuzzy_length,
            self.config.max_edit_distance,
        ) {
            Some(m) => {
                trace!(candidate, query, strategy = m.strategy, score = m.score, "lexical match");
                m.score
            }
            None => jaro_winkler(&query_lower, &item_lower) * self.config.fallback_weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_is_case_insensitive() {
        let oracle = LexicalOracle::new();
        assert_eq!(oracle.similarity("Lewis Carroll", "lewis carroll"), 1.0);
    }

    #[test]
    fn test_prefix_outranks_fallback() {
        let oracle = LexicalOracle::new();
        let prefix = oracle.similarity("The Lord of the Rings", "the lord");
        let unrelated = oracle.similarity("A Tale of Two Cities", "the lord");
        assert!(prefix > unrelated);
    }

    #[test]
    fn test_fallback_is_bounded() {
        let oracle = LexicalOracle::new();
        let score = oracle.similarity("A Tale of Two Cities", "zzzz");
        assert!(score <= oracle.config().fallback_weight);
        assert!(score >= 0.0);
    }

    #[test]
    fn test_misspelled_author() {
        let oracle = LexicalOracle::new();
        let hit = oracle.similarity("Charles Dickens", "charles dikens");
        let miss = oracle.similarity("J.K. Rowling", "charles dikens");
        assert!(hit > miss);
    }

    #[test]
    fn test_fallback_weight_is_configurable() {
        let muted = LexicalOracle::with_config(LexicalConfig {
            fallback_weight: 0.0,
            ..LexicalConfig::default()
        });
        assert_eq!(muted.similarity("A Tale of Two Cities", "zzzz"), 0.0);
        assert_eq!(muted.similarity("Dune", "dune"), 1.0);
    }
}
