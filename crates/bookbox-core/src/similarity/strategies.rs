//! Lexical matching strategies
//!
//! Each strategy takes lowercased inputs and either claims the pair with a score
//! or passes. Scores fall into fixed bands so a more specific strategy always
//! outranks a looser one.

use strsim::{jaro_winkler, levenshtein};

/// Match result from a strategy
#[derive(Debug, Clone)]
pub struct StrategyMatch {
    pub score: f64,
    pub strategy: &'static str,
}

impl StrategyMatch {
    fn new(score: f64, strategy: &'static str) -> Self {
        Self { score, strategy }
    }
}

/// Try exact match (score: 1.0)
#[inline]
pub fn exact_match(query: &str, item: &str) -> Option<StrategyMatch> {
    (query == item).then(|| StrategyMatch::new(1.0, "exact"))
}

/// Try prefix match (score: 0.9)
#[inline]
pub fn prefix_match(query: &str, item: &str) -> Option<StrategyMatch> {
    item.starts_with(query)
        .then(|| StrategyMatch::new(0.9, "prefix"))
}

/// Try word boundary match (score: 0.85)
/// Matches when query equals a complete word in item (split on whitespace, punctuation)
#[inline]
pub fn word_boundary_match(query: &str, item: &str) -> Option<StrategyMatch> {
    item.split(|c: char| c.is_whitespace() || c.is_ascii_punctuation())
        .any(|word| word == query)
        .then(|| StrategyMatch::new(0.85, "word_boundary"))
}

/// Try substring match (score: 0.65-0.75)
/// Earlier occurrences score higher.
#[inline]
pub fn substring_match(query: &str, item: &str) -> Option<StrategyMatch> {
    let pos = item.find(query)?;
    let pos_penalty = (pos as f64 / item.len() as f64) * 0.1;
    let score = (0.75 - pos_penalty).max(0.65);
    Some(StrategyMatch::new(score, "substring"))
}

/// Try Jaro-Winkler similarity (score: 0.6-0.82)
#[inline]
pub fn jaro_winkler_match(query: &str, item: &str) -> Option<StrategyMatch> {
    let jw_score = jaro_winkler(query, item);
    if jw_score > 0.85 {
        // Scale to our scoring range: maps 0.85-1.0 to 0.6-0.825
        let score = (0.6 + (jw_score - 0.85) * 1.5).min(0.82);
        Some(StrategyMatch::new(score, "jaro_winkler"))
    } else {
        None
    }
}

/// Try Levenshtein edit distance (score: 0.6-0.8)
#[inline]
pub fn levenshtein_match(query: &str, item: &str, max_edit_distance: usize) -> Option<StrategyMatch> {
    let edit_dist = levenshtein(query, item);
    if edit_dist > max_edit_distance {
        return None;
    }
    let max_len = query.chars().count().max(item.chars().count());
    if max_len == 0 {
        return None;
    }
    let score = 0.8 - (edit_dist as f64 / max_len as f64) * 0.4;
    (score >= 0.6).then(|| StrategyMatch::new(score, "levenshtein"))
}

/// Apply all strategies in order, return first match
pub fn score_match(
    query_lower: &str,
    item_lower: &str,
    min_fuzzy_length: usize,
    max_edit_distance: usize,
) -> Option<StrategyMatch> {
    exact_match(query_lower, item_lower)
        .or_else(|| prefix_match(query_lower, item_lower))
        .or_else(|| word_boundary_match(query_lower, item_lower))
        .or_else(|| substring_match(query_lower, item_lower))
        .or_else(|| {
            // Skip fuzzy matching for short queries
            if query_lower.chars().count() < min_fuzzy_length {
                return None;
            }
            jaro_winkler_match(query_lower, item_lower)
                .or_else(|| levenshtein_match(query_lower, item_lower, max_edit_distance))
        })
}
