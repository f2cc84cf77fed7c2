//! Q-gram and skip-gram tokenizer
//!
//! Slides a window of `q` characters over the input, optionally padded with
//! `q-1` start and stop symbols so that word edges produce their own
//! q-grams. A skip of `k` takes every `(k+1)`-th character inside the
//! window, which turns q-grams into skip-grams.
//!
//! # Edge cases
//! - Empty input yields no tokens (padding is not applied to it).
//! - Input shorter than the window yields exactly one token per skip: the
//!   whole (padded) string.
//! - `q = 0` and `q > MAX_Q` are rejected at construction.
//! - A skip so large that the window span overflows `usize` behaves like any
//!   other window longer than the input.

use super::{Scaler, TokenBag, Tokenize};
use crate::error::{Result, TokenStatError};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Default start-of-string padding symbol
pub const DEFAULT_START: char = '$';
/// Default end-of-string padding symbol
pub const DEFAULT_STOP: char = '#';

/// Widest accepted window, which bounds the padding inserted per side
pub const MAX_Q: usize = u16::MAX as usize;

/// Configuration for the q-gram tokenizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QGramsConfig {
    /// Window width (typically 2-3)
    pub q: usize,
    /// Whether to pad strings for edge matching
    pub pad: bool,
    /// Symbol repeated `q-1` times before the string
    pub start: char,
    /// Symbol repeated `q-1` times after the string
    pub stop: char,
}

impl Default for QGramsConfig {
    fn default() -> Self {
        Self {
            q: 2,
            pad: true,
            start: DEFAULT_START,
            stop: DEFAULT_STOP,
        }
    }
}

/// Q-gram tokenizer
///
/// # Complexity
/// - Time: O(n · q · skips)
/// - Space: O(n · skips) tokens
#[derive(Debug, Clone)]
pub struct QGrams {
    q: usize,
    pad: bool,
    start: char,
    stop: char,
    skips: SmallVec<[usize; 2]>,
    scaler: Scaler,
}

impl Default for QGrams {
    fn default() -> Self {
        let config = QGramsConfig::default();
        Self {
            q: config.q,
            pad: config.pad,
            start: config.start,
            stop: config.stop,
            skips: smallvec::smallvec![0],
            scaler: Scaler::Identity,
        }
    }
}

impl QGrams {
    /// Padded q-grams of width `q`
    pub fn new(q: usize) -> Result<Self> {
        Self::from_config(QGramsConfig {
            q,
            ..Default::default()
        })
    }

    /// Create from configuration
    pub fn from_config(config: QGramsConfig) -> Result<Self> {
        if config.q == 0 || config.q > MAX_Q {
            return Err(TokenStatError::invalid(
                "q",
                format!("must be in range [1, {}], got {}", MAX_Q, config.q),
            ));
        }
        Ok(Self {
            q: config.q,
            pad: config.pad,
            start: config.start,
            stop: config.stop,
            ..Default::default()
        })
    }

    /// Get current configuration
    #[must_use]
    pub fn config(&self) -> QGramsConfig {
        QGramsConfig {
            q: self.q,
            pad: self.pad,
            start: self.start,
            stop: self.stop,
        }
    }

    #[must_use]
    pub fn with_padding(mut self, pad: bool) -> Self {
        self.pad = pad;
        self
    }

    #[must_use]
    pub fn with_start_stop(mut self, start: char, stop: char) -> Self {
        self.start = start;
        self.stop = stop;
        self
    }

    /// Replace the skip list. Tokens for each skip are appended in order.
    pub fn with_skips<I: IntoIterator<Item = usize>>(mut self, skips: I) -> Result<Self> {
        let skips: SmallVec<[usize; 2]> = skips.into_iter().collect();
        if skips.is_empty() {
            return Err(TokenStatError::invalid("skip", "at least one skip value is required"));
        }
        self.skips = skips;
        Ok(self)
    }

    #[must_use]
    pub fn with_scaler(mut self, scaler: Scaler) -> Self {
        self.scaler = scaler;
        self
    }

    #[inline]
    #[must_use]
    pub fn q(&self) -> usize {
        self.q
    }

    #[inline]
    #[must_use]
    pub fn pad(&self) -> bool {
        self.pad
    }

    /// Padding symbols actually inserted, if any
    #[must_use]
    pub fn padding_symbols(&self) -> Option<(char, char)> {
        (self.pad && self.q > 1).then_some((self.start, self.stop))
    }

    #[must_use]
    pub fn skips(&self) -> &[usize] {
        &self.skips
    }

    #[must_use]
    pub fn scaler(&self) -> &Scaler {
        &self.scaler
    }

    /// Extract q-grams in production order
    #[must_use]
    pub fn extract(&self, s: &str) -> Vec<String> {
        if s.is_empty() {
            return Vec::new();
        }

        let chars: Vec<char> = match self.padding_symbols() {
            Some((start, stop)) => {
                let mut padded = Vec::with_capacity(s.len().saturating_add(2 * (self.q - 1)));
                padded.extend(std::iter::repeat(start).take(self.q - 1));
                padded.extend(s.chars());
                padded.extend(std::iter::repeat(stop).take(self.q - 1));
                padded
            }
            None => s.chars().collect(),
        };

        let mut tokens = Vec::with_capacity(chars.len() * self.skips.len());
        for &skip in &self.skips {
            // (q - 1)(skip + 1) + 1 chars, None when it does not fit in usize
            let span = (self.q - 1)
                .checked_mul(skip)
                .and_then(|gaps| gaps.checked_add(self.q));

            match span {
                Some(span) if span <= chars.len() => {
                    for i in 0..=chars.len() - span {
                        tokens.push((0..self.q).map(|k| chars[i + k * skip + k]).collect());
                    }
                }
                _ => tokens.push(chars.iter().collect()),
            }
        }
        tokens
    }
}

impl Tokenize for QGrams {
    fn tokenize(&self, s: &str) -> TokenBag {
        TokenBag::from_tokens(self.extract(s), &self.scaler)
    }

    fn name(&self) -> &'static str {
        "qgrams"
    }
}
