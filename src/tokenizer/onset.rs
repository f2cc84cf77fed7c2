//! Trainable syllable tokenizer based on the legality principle
//!
//! A consonant cluster is a legal syllable onset if words of the language
//! begin with it often enough. Training collects word-initial clusters from a
//! corpus; tokenizing then cuts a syllable at each position where the
//! longest legal onset matches, taking the vowels that follow it.
//!
//! An untrained tokenizer knows no onsets and yields single characters.

use super::{is_vowel, Scaler, TokenBag, Tokenize};
use crate::algorithms::normalize::{normalize_string, NormalizationMode};
use crate::error::{Result, TokenStatError};
use ahash::{AHashMap, AHashSet};
use tracing::debug;

/// Default minimum share of word-initial clusters for an onset to be legal
pub const DEFAULT_ONSET_THRESHOLD: f64 = 0.0002;

#[derive(Debug, Clone, Default)]
pub struct OnsetTokenizer {
    /// Lowercase onsets, longest first
    onsets: Vec<String>,
    scaler: Scaler,
}

impl OnsetTokenizer {
    /// Untrained tokenizer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenizer with a supplied onset list (empty entries are dropped)
    #[must_use]
    pub fn with_onsets<I, S>(onsets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tokenizer = Self::new();
        tokenizer.set_onsets(onsets.into_iter().map(|o| o.as_ref().to_lowercase()));
        tokenizer
    }

    #[must_use]
    pub fn with_scaler(mut self, scaler: Scaler) -> Self {
        self.scaler = scaler;
        self
    }

    /// Current onset list, longest first
    #[must_use]
    pub fn onsets(&self) -> &[String] {
        &self.onsets
    }

    /// Replace the onset list with onsets learned from `corpus`.
    ///
    /// An onset is kept when its share of all word-initial clusters is
    /// strictly greater than `threshold`. With `clean`, the corpus is reduced
    /// to lowercase letters and whitespace first.
    pub fn train(&mut self, corpus: &str, threshold: f64, clean: bool) -> Result<()> {
        let learned = learn_onsets(corpus, threshold, clean)?;
        self.set_onsets(learned);
        Ok(())
    }

    /// Like [`train`](Self::train), but merges with the current list
    pub fn train_append(&mut self, corpus: &str, threshold: f64, clean: bool) -> Result<()> {
        let learned = learn_onsets(corpus, threshold, clean)?;
        let current = std::mem::take(&mut self.onsets);
        self.set_onsets(current.into_iter().chain(learned));
        Ok(())
    }

    fn set_onsets<I: IntoIterator<Item = String>>(&mut self, onsets: I) {
        let unique: AHashSet<String> = onsets.into_iter().filter(|o| !o.is_empty()).collect();
        let mut onsets: Vec<String> = unique.into_iter().collect();
        onsets.sort_by(|a, b| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        });
        self.onsets = onsets;
    }

    /// Length in chars of the longest onset matching `word` at `pos`
    fn longest_onset(&self, word: &[char], pos: usize) -> usize {
        self.onsets
            .iter()
            .map(|onset| match_onset(onset, word, pos))
            .find(|&len| len > 0)
            .unwrap_or(0)
    }

    /// Syllables of every whitespace-separated word, in order
    #[must_use]
    pub fn syllables(&self, s: &str) -> Vec<String> {
        let mut syllables = Vec::new();
        for word in s.split_whitespace() {
            let chars: Vec<char> = word.chars().collect();
            let mut i = 0;
            while i < chars.len() {
                let onset = self.longest_onset(&chars, i);
                if onset == 0 {
                    syllables.push(chars[i].to_string());
                    i += 1;
                    continue;
                }
                let mut end = i + onset;
                while end < chars.len() && is_vowel(chars[end]) {
                    end += 1;
                }
                syllables.push(chars[i..end].iter().collect());
                i = end;
            }
        }
        syllables
    }
}

/// Chars of `word` from `pos` whose full lowercase mapping spells `onset`,
/// or 0 when it does not match
fn match_onset(onset: &str, word: &[char], pos: usize) -> usize {
    let mut rest = onset;
    let mut len = 0;
    while !rest.is_empty() {
        let Some(&c) = word.get(pos + len) else {
            return 0;
        };
        for lower in c.to_lowercase() {
            match rest.strip_prefix(lower) {
                Some(tail) => rest = tail,
                None => return 0,
            }
        }
        len += 1;
    }
    len
}

/// Word-initial consonant clusters whose share exceeds `threshold`
fn learn_onsets(corpus: &str, threshold: f64, clean: bool) -> Result<Vec<String>> {
    if !threshold.is_finite() || !(0.0..1.0).contains(&threshold) {
        return Err(TokenStatError::invalid(
            "threshold",
            format!("must be in range [0.0, 1.0), got {}", threshold),
        ));
    }

    let text = if clean {
        normalize_string(corpus, NormalizationMode::Letters)
    } else {
        corpus.to_lowercase()
    };

    let mut clusters: AHashMap<String, usize> = AHashMap::new();
    let mut total = 0usize;
    for word in text.split_whitespace() {
        // A word without vowels is one cluster
        let onset: String = word.chars().take_while(|&c| !is_vowel(c)).collect();
        if onset.is_empty() {
            continue;
        }
        *clusters.entry(onset).or_insert(0) += 1;
        total += 1;
    }

    let onsets: Vec<String> = clusters
        .into_iter()
        .filter(|&(_, count)| count as f64 / total as f64 > threshold)
        .map(|(onset, _)| onset)
        .collect();

    debug!(
        onsets = onsets.len(),
        clusters = total,
        threshold,
        "trained syllable onsets"
    );
    Ok(onsets)
}

impl Tokenize for OnsetTokenizer {
    fn tokenize(&self, s: &str) -> TokenBag {
        TokenBag::from_tokens(self.syllables(s), &self.scaler)
    }

    fn name(&self) -> &'static str {
        "onset"
    }
}
