//! Tokenizers
//!
//! Every strategy turns a string into a [`TokenBag`]. Tokenizing is a pure
//! function of the input and the tokenizer's configuration, so a single
//! instance can be shared across threads; only training mutates it.
//!
//! # Strategies
//! - **QGrams**: fixed-width windows, optional padding and skip-grams
//! - **Whitespace**: one token per word
//! - **Saps**: rule-based syllables, no training
//! - **Onset**: syllables cut at trained legal onsets

pub mod bag;
pub mod onset;
pub mod qgrams;
pub mod saps;
pub mod scaler;
pub mod shared;
pub mod whitespace;

pub use bag::TokenBag;
pub use onset::{OnsetTokenizer, DEFAULT_ONSET_THRESHOLD};
pub use qgrams::{QGrams, QGramsConfig};
pub use saps::SapsTokenizer;
pub use scaler::Scaler;
pub use shared::SharedTokenizer;
pub use whitespace::WhitespaceTokenizer;

use crate::error::{Result, TokenStatError};

/// Vowels recognized by the syllable tokenizers
pub static VOWELS: [char; 12] = ['a', 'e', 'i', 'o', 'u', 'y', 'A', 'E', 'I', 'O', 'U', 'Y'];

#[inline]
pub(crate) fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Capability shared by all tokenizer strategies
pub trait Tokenize: Send + Sync {
    /// Tokenize a string into a fresh bag
    fn tokenize(&self, s: &str) -> TokenBag;

    /// Name of the strategy for debugging/logging
    fn name(&self) -> &'static str;
}

/// Closed set of tokenizer strategies, selected at construction
#[derive(Debug, Clone)]
pub enum Tokenizer {
    QGrams(QGrams),
    Whitespace(WhitespaceTokenizer),
    Saps(SapsTokenizer),
    Onset(OnsetTokenizer),
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::QGrams(QGrams::default())
    }
}

impl Tokenizer {
    /// Padded q-grams of width `q`
    pub fn qgrams(q: usize) -> Result<Self> {
        QGrams::new(q).map(Self::QGrams)
    }

    #[must_use]
    pub fn whitespace() -> Self {
        Self::Whitespace(WhitespaceTokenizer::new())
    }

    #[must_use]
    pub fn saps() -> Self {
        Self::Saps(SapsTokenizer::new())
    }

    /// Untrained onset tokenizer
    #[must_use]
    pub fn onset() -> Self {
        Self::Onset(OnsetTokenizer::new())
    }

    /// Build a strategy by name. `q` is only used by `"qgrams"`.
    pub fn from_name(name: &str, q: usize) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "qgrams" | "qgram" => Self::qgrams(q),
            "whitespace" => Ok(Self::whitespace()),
            "saps" => Ok(Self::saps()),
            "onset" | "legalipy" => Ok(Self::onset()),
            _ => Err(TokenStatError::UnknownStrategy(name.to_string())),
        }
    }

    /// Train the strategy on a corpus. Only the onset tokenizer is trainable.
    pub fn train(&mut self, corpus: &str, threshold: f64, clean: bool) -> Result<()> {
        match self {
            Self::Onset(tokenizer) => tokenizer.train(corpus, threshold, clean),
            other => Err(TokenStatError::NotTrainable(other.name())),
        }
    }

    #[must_use]
    pub fn is_trainable(&self) -> bool {
        matches!(self, Self::Onset(_))
    }

    /// The q-gram configuration, when this is a q-gram tokenizer
    #[must_use]
    pub fn as_qgrams(&self) -> Option<&QGrams> {
        match self {
            Self::QGrams(qgrams) => Some(qgrams),
            _ => None,
        }
    }
}

impl Tokenize for Tokenizer {
    fn tokenize(&self, s: &str) -> TokenBag {
        match self {
            Self::QGrams(t) => t.tokenize(s),
            Self::Whitespace(t) => t.tokenize(s),
            Self::Saps(t) => t.tokenize(s),
            Self::Onset(t) => t.tokenize(s),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::QGrams(t) => t.name(),
            Self::Whitespace(t) => t.name(),
            Self::Saps(t) => t.name(),
            Self::Onset(t) => t.name(),
        }
    }
}

impl From<QGrams> for Tokenizer {
    fn from(t: QGrams) -> Self {
        Self::QGrams(t)
    }
}

impl From<WhitespaceTokenizer> for Tokenizer {
    fn from(t: WhitespaceTokenizer) -> Self {
        Self::Whitespace(t)
    }
}

impl From<SapsTokenizer> for Tokenizer {
    fn from(t: SapsTokenizer) -> Self {
        Self::Saps(t)
    }
}

impl From<OnsetTokenizer> for Tokenizer {
    fn from(t: OnsetTokenizer) -> Self {
        Self::Onset(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_padded_bigrams() {
        let bag = Tokenizer::default().tokenize("AT");
        assert_eq!(bag.tokens(), &["$A", "AT", "T#"].map(String::from));
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Tokenizer::from_name("saps", 2).unwrap().name(), "saps");
        assert_eq!(Tokenizer::from_name("LegaliPy", 2).unwrap().name(), "onset");
        assert_eq!(
            Tokenizer::from_name("qgrams", 3).unwrap().as_qgrams().map(QGrams::q),
            Some(3)
        );
        assert!(matches!(
            Tokenizer::from_name("qgrams", 0),
            Err(TokenStatError::InvalidParameter { .. })
        ));
        assert!(matches!(
            Tokenizer::from_name("bpe", 2),
            Err(TokenStatError::UnknownStrategy(_))
        ));
    }

    #[test]
    fn test_only_onset_is_trainable() {
        let mut onset = Tokenizer::onset();
        assert!(onset.is_trainable());
        assert!(onset.train("", DEFAULT_ONSET_THRESHOLD, true).is_ok());

        let mut saps = Tokenizer::saps();
        assert_eq!(
            saps.train("corpus", DEFAULT_ONSET_THRESHOLD, true),
            Err(TokenStatError::NotTrainable("saps"))
        );
    }

    #[test]
    fn test_foreign_characters_are_tokens() {
        let bag = Tokenizer::qgrams(1).unwrap().tokenize("日本a");
        assert_eq!(bag.count("日"), 1);
        assert_eq!(bag.count("a"), 1);
    }

    #[test]
    fn test_shared_instance_across_threads() {
        let tokenizer = Tokenizer::default();
        std::thread::scope(|scope| {
            let a = scope.spawn(|| tokenizer.tokenize("night"));
            let b = scope.spawn(|| tokenizer.tokenize("nacht"));
            assert_eq!(a.join().unwrap().len(), 6);
            assert_eq!(b.join().unwrap().len(), 6);
        });
    }
}
