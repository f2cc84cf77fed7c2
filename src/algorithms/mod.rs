//! Character-level string metrics
//!
//! These compare individual tokens with each other. The soft and fuzzy
//! intersection types use them to let near-identical tokens count as
//! partially shared.

pub mod damerau;
pub mod levenshtein;
pub mod normalize;

pub use damerau::*;
pub use levenshtein::*;

/// Trait for all similarity metrics.
/// Returns a value between 0.0 (completely different) and 1.0 (identical).
///
/// Token coefficients may return NaN for indeterminate pairs; check with
/// `f64::is_nan` rather than comparing.
pub trait Similarity: Send + Sync {
    fn similarity(&self, a: &str, b: &str) -> f64;

    /// Convenience method for distance (1.0 - similarity)
    fn distance(&self, a: &str, b: &str) -> f64 {
        1.0 - self.similarity(a, b)
    }

    /// Name of the metric for debugging/logging
    fn name(&self) -> &'static str;
}

/// Trait for edit distance algorithms that return integer distances
pub trait EditDistance: Send + Sync {
    fn distance(&self, a: &str, b: &str) -> usize;

    /// Normalized similarity: `1 - distance / longer length`, 1.0 for two empty strings
    fn similarity(&self, a: &str, b: &str) -> f64 {
        normalized_similarity(self.distance(a, b), a, b)
    }

    fn name(&self) -> &'static str;
}

/// Blanket implementation: any EditDistance is also a Similarity
impl<T: EditDistance> Similarity for T {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        EditDistance::similarity(self, a, b)
    }

    fn name(&self) -> &'static str {
        EditDistance::name(self)
    }
}

#[inline]
pub(crate) fn normalized_similarity(dist: usize, a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        1.0
    } else {
        1.0 - (dist as f64 / max_len as f64)
    }
}
