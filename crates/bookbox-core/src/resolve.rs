//! Best-match resolution of a free-text query against catalog candidates
//!
//! The resolver scores every candidate with a [`SimilarityOracle`] and returns the
//! single highest-scoring one. Ties keep the first candidate seen, so the result
//! depends only on the candidate order and the oracle.
//!
//! # Example
//!
//! ```rust
//! use bookbox_core::resolve::resolve;
//! use bookbox_core::similarity::NgramOracle;
//!
//! let titles = vec![
//!     "The Lord of the Rings".to_string(),
//!     "Alice in Wonderland".to_string(),
//! ];
//! let best = resolve("alice wonderland", &titles, &NgramOracle).unwrap();
//! assert_eq!(best, "Alice in Wonderland");
//! ```

use thiserror::Error;
use tracing::trace;

use crate::similarity::SimilarityOracle;

/// Reasons a query cannot be resolved
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Query was empty or whitespace
    #[error("search text is empty")]
    EmptyQuery,

    /// Nothing in the catalog to compare against
    #[error("no candidates to search")]
    NoCandidates,
}

/// A candidate paired with its score, alive for one resolution only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate<'a> {
    pub value: &'a str,
    pub score: f64,
}

/// Return the candidate most similar to `query`.
///
/// # Errors
///
/// `EmptyQuery` if `query` is blank (checked before any scoring),
/// `NoCandidates` if `candidates` is empty.
pub fn resolve<'a, O>(
    query: &str,
    candidates: &'a [String],
    oracle: &O,
) -> Result<&'a str, ResolveError>
where
    O: SimilarityOracle + ?Sized,
{
    resolve_scored(query, candidates, oracle).map(|best| best.value)
}

/// Like [`resolve`], also reporting the winning score.
pub fn resolve_scored<'a, O>(
    query: &str,
    candidates: &'a [String],
    oracle: &O,
) -> Result<ScoredCandidate<'a>, ResolveError>
where
    O: SimilarityOracle + ?Sized,
{
    if query.trim().is_empty() {
        return Err(ResolveError::EmptyQuery);
    }

    let mut scored = candidates.iter().map(|candidate| ScoredCandidate {
        value: candidate.as_str(),
        score: oracle.similarity(candidate, query),
    });

    let first = scored.next().ok_or(ResolveError::NoCandidates)?;

    // Only a strictly greater score replaces the current best; NaN never does.
    let best = scored.fold(first, |best, next| {
        trace!(candidate = next.value, score = next.score, "scored candidate");
        if next.score > best.score || (best.score.is_nan() && !next.score.is_nan()) {
            next
        } else {
            best
        }
    });

    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::similarity::{LexicalOracle, NgramOracle};

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn by_length(candidate: &str, _query: &str) -> f64 {
        candidate.len() as f64
    }

    #[test]
    fn test_picks_highest_score() {
        let candidates = strings(&["ab", "abcd", "abc"]);
        assert_eq!(resolve("q", &candidates, &by_length).unwrap(), "abcd");
    }

    #[test]
    fn test_tie_keeps_first_occurrence() {
        let candidates = strings(&["low", "first", "again", "x"]);
        let oracle = |candidate: &str, _query: &str| match candidate {
            "first" | "again" => 0.9,
            _ => 0.1,
        };
        assert_eq!(resolve("q", &candidates, &oracle).unwrap(), "first");

        let reversed = strings(&["again", "first"]);
        assert_eq!(resolve("q", &reversed, &oracle).unwrap(), "again");
    }

    #[test]
    fn test_all_equal_scores_returns_first() {
        let candidates = strings(&["one", "two", "three"]);
        let flat = |_: &str, _: &str| 0.5;
        assert_eq!(resolve("anything", &candidates, &flat).unwrap(), "one");
    }

    #[test]
    fn test_empty_candidates() {
        let candidates: Vec<String> = Vec::new();
        assert_eq!(
            resolve("alice", &candidates, &NgramOracle),
            Err(ResolveError::NoCandidates)
        );
    }

    #[test]
    fn test_empty_query_never_calls_oracle() {
        let candidates = strings(&["a"]);
        let panicking = |_: &str, _: &str| -> f64 { panic!("oracle must not be called") };
        assert_eq!(
            resolve("", &candidates, &panicking),
            Err(ResolveError::EmptyQuery)
        );
        assert_eq!(
            resolve("   ", &candidates, &panicking),
            Err(ResolveError::EmptyQuery)
        );
    }

    #[test]
    fn test_empty_query_checked_before_candidates() {
        let candidates: Vec<String> = Vec::new();
        assert_eq!(
            resolve("", &candidates, &NgramOracle),
            Err(ResolveError::EmptyQuery)
        );
    }

    #[test]
    fn test_result_is_always_a_candidate() {
        let candidates = strings(&[
            "A Tale of Two Cities",
            "The Lord of the Rings",
            "Alice in Wonderland",
        ]);
        for query in ["zzz", "tale", "rings of lord", "ALICE", "?"] {
            let best = resolve(query, &candidates, &LexicalOracle::new()).unwrap();
            assert!(candidates.iter().any(|c| c == best));
            let best = resolve(query, &candidates, &NgramOracle).unwrap();
            assert!(candidates.iter().any(|c| c == best));
        }
    }

    #[test]
    fn test_nan_scores_never_win() {
        let candidates = strings(&["nan", "real"]);
        let oracle = |candidate: &str, _: &str| {
            if candidate == "nan" {
                f64::NAN
            } else {
                0.1
            }
        };
        assert_eq!(resolve("q", &candidates, &oracle).unwrap(), "real");
    }

    #[test]
    fn test_scored_reports_score() {
        let candidates = strings(&["ab", "abc"]);
        let best = resolve_scored("q", &candidates, &by_length).unwrap();
        assert_eq!(best.value, "abc");
        assert_eq!(best.score, 3.0);
    }

    #[test]
    fn test_dyn_oracle() {
        let candidates = strings(&["Lewis Carroll", "C.S. Lewis"]);
        let oracle: Box<dyn SimilarityOracle> = Box::new(NgramOracle);
        assert_eq!(
            resolve("lewis carol", &candidates, oracle.as_ref()).unwrap(),
            "Lewis Carroll"
        );
    }
}
