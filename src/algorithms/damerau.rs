//! Damerau-Levenshtein distance and common-prefix length
//!
//! Used by the soft intersection: the membership of a token pair is the
//! better of its edit-distance overlap and its shared prefix.
//!
//! Only the restricted variant (optimal string alignment) is provided, where
//! no substring is edited more than once.

use super::{normalized_similarity, EditDistance};
use smallvec::SmallVec;

/// Damerau-Levenshtein (optimal string alignment) calculator
///
/// # Complexity
/// - Time: O(m*n)
/// - Space: O(n), three rolling rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DamerauLevenshtein;

impl DamerauLevenshtein {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EditDistance for DamerauLevenshtein {
    fn distance(&self, a: &str, b: &str) -> usize {
        damerau_levenshtein(a, b)
    }

    fn name(&self) -> &'static str {
        "damerau_levenshtein"
    }
}

/// Optimal string alignment distance
#[must_use]
pub fn damerau_levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_chars: SmallVec<[char; 32]> = a.chars().collect();
    let b_chars: SmallVec<[char; 32]> = b.chars().collect();
    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev2_row: SmallVec<[usize; 32]> = smallvec::smallvec![0; n + 1];
    let mut prev_row: SmallVec<[usize; 32]> = (0..=n).collect();
    let mut curr_row: SmallVec<[usize; 32]> = smallvec::smallvec![0; n + 1];

    for i in 1..=m {
        curr_row[0] = i;
        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            curr_row[j] = (prev_row[j] + 1)
                .min(curr_row[j - 1] + 1)
                .min(prev_row[j - 1] + cost);

            if i > 1
                && j > 1
                && a_chars[i - 1] == b_chars[j - 2]
                && a_chars[i - 2] == b_chars[j - 1]
            {
                curr_row[j] = curr_row[j].min(prev2_row[j - 2] + 1);
            }
        }
        std::mem::swap(&mut prev2_row, &mut prev_row);
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}

/// Normalized OSA similarity (0.0 to 1.0)
#[inline]
#[must_use]
pub fn damerau_levenshtein_similarity(a: &str, b: &str) -> f64 {
    normalized_similarity(damerau_levenshtein(a, b), a, b)
}

/// Length of the longest common prefix, in chars
#[must_use]
pub fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).take_while(|(x, y)| x == y).count()
}
