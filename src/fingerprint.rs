//! Count fingerprint (Cisłak & Grabowski 2017)
//!
//! Packs the occurrence count (mod 4) of the most common letters of a
//! language into 2-bit groups. Two words whose fingerprints differ in many
//! groups cannot be close, which makes it a cheap prefilter before a full
//! token comparison.

use ahash::AHashMap;
use std::borrow::Cow;

use crate::error::{Result, TokenStatError};

/// English letters by descending frequency
pub static MOST_COMMON_LETTERS_CG: [char; 26] = [
    'e', 't', 'a', 'o', 'i', 'n', 's', 'h', 'r', 'd', 'l', 'c', 'u', 'm', 'w', 'f', 'g', 'y',
    'p', 'b', 'v', 'k', 'j', 'x', 'q', 'z',
];

/// Default fingerprint width
pub const DEFAULT_FINGERPRINT_BITS: u32 = 16;

#[derive(Debug, Clone)]
pub struct CountFingerprint {
    n_bits: u32,
    most_common: Cow<'static, [char]>,
}

impl Default for CountFingerprint {
    fn default() -> Self {
        Self {
            n_bits: DEFAULT_FINGERPRINT_BITS,
            most_common: Cow::Borrowed(&MOST_COMMON_LETTERS_CG),
        }
    }
}

impl CountFingerprint {
    /// Fingerprint of `n_bits` bits (odd widths are rounded up), at most 64
    pub fn new(n_bits: u32) -> Result<Self> {
        if n_bits > 64 {
            return Err(TokenStatError::invalid(
                "n_bits",
                format!("must be at most 64, got {}", n_bits),
            ));
        }
        Ok(Self {
            n_bits,
            ..Default::default()
        })
    }

    /// Use a different letter ranking
    #[must_use]
    pub fn with_most_common(mut self, letters: Vec<char>) -> Self {
        self.most_common = Cow::Owned(letters);
        self
    }

    #[must_use]
    pub fn n_bits(&self) -> u32 {
        self.n_bits
    }

    #[must_use]
    pub fn fingerprint(&self, word: &str) -> u64 {
        let mut counts: AHashMap<char, u64> = AHashMap::new();
        for c in word.chars() {
            *counts.entry(c).or_insert(0) += 1;
        }

        let mut remaining = self.n_bits + self.n_bits % 2;
        let mut fingerprint = 0u64;
        for letter in self.most_common.iter() {
            if remaining == 0 {
                break;
            }
            let count = counts.get(letter).copied().unwrap_or(0);
            fingerprint = (fingerprint << 2) | (count & 3);
            remaining -= 2;
        }

        // Left-align when the ranking is shorter than the width
        fingerprint.checked_shl(remaining).unwrap_or(0)
    }
}

/// Count fingerprint over [`MOST_COMMON_LETTERS_CG`]
pub fn count_fingerprint(word: &str, n_bits: u32) -> Result<u64> {
    Ok(CountFingerprint::new(n_bits)?.fingerprint(word))
}
