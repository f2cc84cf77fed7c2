//! Alphabet sizing for the unobserved contingency cell
//!
//! Coefficients that correct for chance need to know how many tokens
//! *could* have occurred, not only those that did. The resolved size feeds
//! `neither`/`total_complement`:
//!
//! - `None`: open world, the unobserved term is 0
//! - `Some(0)`: sentinel that disables the unobserved term, also 0
//! - `Some(n)`: closed world, `max(0, n - observed)`

use serde::{Deserialize, Serialize};

use crate::tokenizer::Tokenizer;

/// Symbols assumed by the inferred q-gram alphabet (letters plus two padding symbols)
const INFERRED_QGRAM_SYMBOLS: u64 = 28;
/// Assumed alphabet for unigrams
const INFERRED_UNIGRAM_SYMBOLS: u64 = 26;

/// How the size of the token universe is determined
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alphabet {
    /// Derived from the tokenizer: `28^q` for q-grams (`26` when `q = 1`),
    /// open world for every other strategy
    #[default]
    Inferred,
    /// Explicit size. `Size(0)` disables the unobserved term.
    Size(u64),
    /// Distinct characters of the string; raised to the power `q` for
    /// q-gram tokenizers, together with their padding symbols
    Symbols(String),
}

impl Alphabet {
    /// Resolve against a tokenizer. `None` means open world.
    #[must_use]
    pub fn resolve(&self, tokenizer: &Tokenizer) -> Option<u64> {
        let qgrams = tokenizer.as_qgrams();
        match self {
            Self::Inferred => qgrams.map(|qgrams| {
                if qgrams.q() > 1 {
                    saturating_pow(INFERRED_QGRAM_SYMBOLS, qgrams.q())
                } else {
                    INFERRED_UNIGRAM_SYMBOLS
                }
            }),
            Self::Size(size) => Some(*size),
            Self::Symbols(symbols) => {
                let mut distinct: Vec<char> = symbols.chars().collect();
                if let Some((start, stop)) = qgrams.and_then(|q| q.padding_symbols()) {
                    distinct.extend([start, stop]);
                }
                distinct.sort_unstable();
                distinct.dedup();
                let count = distinct.len() as u64;
                Some(match qgrams {
                    Some(qgrams) => saturating_pow(count, qgrams.q()),
                    None => count,
                })
            }
        }
    }
}

impl From<u64> for Alphabet {
    fn from(size: u64) -> Self {
        Self::Size(size)
    }
}

impl From<&str> for Alphabet {
    fn from(symbols: &str) -> Self {
        Self::Symbols(symbols.to_string())
    }
}

fn saturating_pow(base: u64, exp: usize) -> u64 {
    base.saturating_pow(u32::try_from(exp).unwrap_or(u32::MAX))
}
