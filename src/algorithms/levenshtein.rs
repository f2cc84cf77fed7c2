//! Levenshtein (edit) distance between tokens
//!
//! Tokens are short (q-grams, syllables, words), so a single-row DP over
//! `char`s kept in inline buffers is all the fuzzy intersection needs.

use super::{normalized_similarity, EditDistance};
use smallvec::SmallVec;

/// Levenshtein distance calculator
///
/// # Complexity
/// - Time: O(m*n) where m and n are token lengths
/// - Space: O(min(m,n)) using single-row DP
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Levenshtein;

impl Levenshtein {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EditDistance for Levenshtein {
    fn distance(&self, a: &str, b: &str) -> usize {
        levenshtein(a, b)
    }

    fn name(&self) -> &'static str {
        "levenshtein"
    }
}

/// Single-row DP over char slices
fn dp_distance(a: &[char], b: &[char]) -> usize {
    // Shorter slice on the column axis
    let (target, source) = if a.len() < b.len() { (a, b) } else { (b, a) };
    let n_target = target.len();

    let mut row: SmallVec<[usize; 32]> = (0..=n_target).collect();

    for (i, &sc) in source.iter().enumerate() {
        let mut prev = row[0];
        row[0] = i + 1;

        for (j, &tc) in target.iter().enumerate() {
            let cost = usize::from(sc != tc);
            let substitution = prev + cost;
            prev = row[j + 1];
            row[j + 1] = substitution.min(row[j + 1] + 1).min(row[j] + 1);
        }
    }

    row[n_target]
}

/// Levenshtein distance counted in Unicode scalar values
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    let a_chars: SmallVec<[char; 32]> = a.chars().collect();
    let b_chars: SmallVec<[char; 32]> = b.chars().collect();
    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }
    dp_distance(&a_chars, &b_chars)
}

/// Normalized similarity (0.0 to 1.0)
#[inline]
#[must_use]
pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    normalized_similarity(levenshtein(a, b), a, b)
}
