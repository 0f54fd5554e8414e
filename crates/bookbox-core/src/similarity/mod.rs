//! Similarity oracles
//!
//! The resolver treats similarity as a black box: two strings in, one score out.
//! Two oracles ship with the crate:
//!
//! - [`NgramOracle`]: cosine similarity of character-trigram count vectors (default)
//! - [`LexicalOracle`]: strategy cascade (exact, prefix, word boundary, substring,
//!   Jaro-Winkler, Levenshtein)
//!
//! Any `Fn(&str, &str) -> f64` is also an oracle, which keeps resolver tests free of
//! real scoring.
//!
//! # Example
//!
//! ```rust
//! use bookbox_core::similarity::{NgramOracle, SimilarityOracle};
//!
//! let oracle = NgramOracle::new();
//! let close = oracle.similarity("Alice in Wonderland", "alice wonderland");
//! let far = oracle.similarity("The Lord of the Rings", "alice wonderland");
//! assert!(close > far);
//! ```

mod lexical;
mod ngram;
mod strategies;

pub use lexical::{LexicalConfig, LexicalOracle};
pub use ngram::NgramOracle;

/// Scores how similar a catalog candidate is to a user query.
///
/// Implementations must be deterministic. Symmetry is not required.
pub trait SimilarityOracle {
    fn similarity(&self, candidate: &str, query: &str) -> f64;
}

impl<F> SimilarityOracle for F
where
    F: Fn(&str, &str) -> f64,
{
    fn similarity(&self, candidate: &str, query: &str) -> f64 {
        self(candidate, query)
    }
}

/// Cosine similarity between two f32 slices.
///
/// Returns 0.0 if either vector has zero magnitude.
/// Panics if slices have different lengths.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(
        a.len(),
        b.len(),
        "vector dimension mismatch: {} vs {}",
        a.len(),
        b.len()
    );

    let (dot, norm_a, norm_b) = a
        .iter()
        .zip(b)
        .fold((0.0f32, 0.0f32, 0.0f32), |(dot, na, nb), (x, y)| {
            (dot + x * y, na + x * x, nb + y * y)
        });

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 {
        return 0.0;
    }

    dot / denom
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_vectors() {
        let v = vec![1.0, 2.0, 3.0];
        let sim = cosine_similarity(&v, &v);
        assert!(
            (sim - 1.0).abs() < 1e-6,
            "identical vectors should have similarity ~1.0, got {}",
            sim
        );
    }

    #[test]
    fn orthogonal_vectors() {
        let sim = cosine_similarity(&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]);
        assert!(sim.abs() < 1e-6);
    }

    #[test]
    fn zero_vector() {
        let sim = cosine_similarity(&[1.0, 2.0, 3.0], &[0.0, 0.0, 0.0]);
        assert_eq!(sim, 0.0, "zero vector should yield similarity 0.0");
    }

    #[test]
    #[should_panic(expected = "vector dimension mismatch")]
    fn dimension_mismatch() {
        cosine_similarity(&[1.0, 2.0], &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn known_similarity() {
        let sim = cosine_similarity(&[1.0, 0.0], &[1.0, 1.0]);
        // cos(45°) = 1/√2 ≈ 0.7071
        assert!((sim - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-6);
    }

    #[test]
    fn closures_are_oracles() {
        let oracle = |candidate: &str, _query: &str| candidate.len() as f64;
        assert_eq!(oracle.similarity("abcd", "x"), 4.0);
    }
}
