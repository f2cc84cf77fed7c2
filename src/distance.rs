//! Token distance engine
//!
//! [`TokenDistance`] bundles everything a token-based coefficient needs: the
//! tokenizer, the statistics configuration and an optional string
//! normalization applied before tokenizing. The alphabet size is resolved
//! once, when the tokenizer or alphabet changes.

use tracing::debug;

use crate::algorithms::normalize::{maybe_normalize, NormalizationMode};
use crate::error::Result;
use crate::statistics::{
    Alphabet, ContingencyTable, IntersectionType, Normalizer, StatisticsConfig, TokenStatistics,
};
use crate::tokenizer::{TokenBag, Tokenize, Tokenizer};

#[derive(Debug, Clone)]
pub struct TokenDistance {
    tokenizer: Tokenizer,
    config: StatisticsConfig,
    normalization: Option<NormalizationMode>,
    alphabet_size: Option<u64>,
}

impl Default for TokenDistance {
    /// Padded bigrams, crisp intersection, inferred alphabet
    fn default() -> Self {
        let tokenizer = Tokenizer::default();
        let config = StatisticsConfig::default();
        let alphabet_size = config.alphabet.resolve(&tokenizer);
        Self {
            tokenizer,
            config,
            normalization: None,
            alphabet_size,
        }
    }
}

impl TokenDistance {
    /// Build an engine, validating the configuration
    pub fn new(tokenizer: Tokenizer, config: StatisticsConfig) -> Result<Self> {
        config.validate()?;
        let mut engine = Self {
            tokenizer,
            config,
            normalization: None,
            alphabet_size: None,
        };
        engine.resolve_alphabet();
        Ok(engine)
    }

    /// Engine over `q`-grams with `$`/`#` padding, or whitespace tokens when `q == 0`
    pub fn with_qval(q: usize) -> Result<Self> {
        let tokenizer = if q == 0 {
            Tokenizer::whitespace()
        } else {
            Tokenizer::qgrams(q)?
        };
        Self::new(tokenizer, StatisticsConfig::default())
    }

    fn resolve_alphabet(&mut self) {
        self.alphabet_size = self.config.alphabet.resolve(&self.tokenizer);
        debug!(
            tokenizer = self.tokenizer.name(),
            alphabet = ?self.alphabet_size,
            "resolved token alphabet"
        );
    }

    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self.resolve_alphabet();
        self
    }

    #[must_use]
    pub fn with_alphabet(mut self, alphabet: impl Into<Alphabet>) -> Self {
        self.config.alphabet = alphabet.into();
        self.resolve_alphabet();
        self
    }

    /// Replace the intersection type. Fails on an invalid fuzzy threshold.
    pub fn with_intersection(mut self, intersection: IntersectionType) -> Result<Self> {
        intersection.validate()?;
        self.config.intersection = intersection;
        Ok(self)
    }

    #[must_use]
    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.config.normalizer = normalizer;
        self
    }

    /// Normalize both strings before tokenizing
    #[must_use]
    pub fn with_normalization(mut self, mode: NormalizationMode) -> Self {
        self.normalization = Some(mode);
        self
    }

    #[must_use]
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    #[must_use]
    pub fn config(&self) -> &StatisticsConfig {
        &self.config
    }

    #[must_use]
    pub fn normalization(&self) -> Option<NormalizationMode> {
        self.normalization
    }

    /// Resolved closed-world alphabet size, `None` for open world
    #[must_use]
    pub fn alphabet_size(&self) -> Option<u64> {
        self.alphabet_size
    }

    /// Train the tokenizer on a corpus (onset tokenizer only)
    pub fn train(&mut self, corpus: &str, threshold: f64, clean: bool) -> Result<()> {
        self.tokenizer.train(corpus, threshold, clean)
    }

    #[must_use]
    pub fn tokenize(&self, s: &str) -> TokenBag {
        self.tokenizer.tokenize(&maybe_normalize(s, self.normalization))
    }

    #[must_use]
    pub fn tokenize_pair(&self, src: &str, tar: &str) -> (TokenBag, TokenBag) {
        (self.tokenize(src), self.tokenize(tar))
    }

    #[must_use]
    pub fn statistics(&self, src: &str, tar: &str) -> TokenStatistics {
        let (src, tar) = self.tokenize_pair(src, tar);
        self.statistics_for_bags(&src, &tar)
    }

    /// Statistics for already tokenized (or hand-built) bags
    #[must_use]
    pub fn statistics_for_bags(&self, src: &TokenBag, tar: &TokenBag) -> TokenStatistics {
        TokenStatistics::compute(src, tar, &self.config, self.alphabet_size)
    }

    #[must_use]
    pub fn contingency(&self, src: &str, tar: &str) -> ContingencyTable {
        self.statistics(src, tar).contingency()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TokenStatError;

    #[test]
    fn test_default_engine() {
        let engine = TokenDistance::default();
        assert_eq!(engine.alphabet_size(), Some(784));
        assert_eq!(engine.tokenizer().name(), "qgrams");

        let table = engine.contingency("cat", "hat");
        assert_eq!(table.a, 2.0);
        assert_eq!(table.b, 2.0);
        assert_eq!(table.c, 2.0);
        assert_eq!(table.d, 778.0);
    }

    #[test]
    fn test_with_qval() {
        let words = TokenDistance::with_qval(0).unwrap();
        assert_eq!(words.tokenizer().name(), "whitespace");
        assert_eq!(words.alphabet_size(), None);
        assert_eq!(words.statistics("the cat", "the hat").both(), 1);

        assert_eq!(TokenDistance::with_qval(1).unwrap().alphabet_size(), Some(26));
        assert_eq!(TokenDistance::with_qval(3).unwrap().alphabet_size(), Some(21952));
    }

    #[test]
    fn test_alphabet_override() {
        let engine = TokenDistance::default().with_alphabet(0u64);
        assert_eq!(engine.alphabet_size(), Some(0));
        assert_eq!(engine.statistics("cat", "hat").neither(), 0);

        let engine = engine.with_tokenizer(Tokenizer::saps()).with_alphabet(Alphabet::Inferred);
        assert_eq!(engine.alphabet_size(), None);
    }

    #[test]
    fn test_invalid_configuration() {
        let config = StatisticsConfig::new().with_intersection(IntersectionType::Fuzzy { threshold: 0.0 });
        assert!(matches!(
            TokenDistance::new(Tokenizer::default(), config),
            Err(TokenStatError::InvalidParameter { name: "threshold", .. })
        ));
        assert!(TokenDistance::default()
            .with_intersection(IntersectionType::Fuzzy { threshold: 2.0 })
            .is_err());
        assert!(TokenDistance::with_qval(2).is_ok());
    }

    #[test]
    fn test_normalization() {
        let engine = TokenDistance::default();
        assert_eq!(engine.statistics("Cat", "cat").only_src(), 2);

        let engine = engine.with_normalization(NormalizationMode::Lowercase);
        let stats = engine.statistics("Cat", "cat");
        assert_eq!(stats.only_src(), 0);
        assert_eq!(stats.both(), 4);
    }

    #[test]
    fn test_bags_and_strings_agree() {
        let engine = TokenDistance::default().with_normalizer(Normalizer::Log);
        let (src, tar) = engine.tokenize_pair("night", "nacht");
        assert_eq!(engine.statistics_for_bags(&src, &tar), engine.statistics("night", "nacht"));
    }

    #[test]
    fn test_trained_engine() {
        let mut engine = TokenDistance::new(Tokenizer::onset(), StatisticsConfig::default()).unwrap();
        assert_eq!(engine.tokenize("trap").len(), 4);
        engine.train("tree trunk", 0.0, true).unwrap();
        assert_eq!(engine.tokenize("trap").len(), 2);
        assert!(TokenDistance::default().train("tree", 0.0, true).is_err());
    }
}
