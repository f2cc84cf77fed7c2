//! Whitespace tokenizer: one token per whitespace-separated word

use super::{Scaler, TokenBag, Tokenize};

#[derive(Debug, Clone, Default)]
pub struct WhitespaceTokenizer {
    scaler: Scaler,
}

impl WhitespaceTokenizer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_scaler(mut self, scaler: Scaler) -> Self {
        self.scaler = scaler;
        self
    }
}

impl Tokenize for WhitespaceTokenizer {
    fn tokenize(&self, s: &str) -> TokenBag {
        TokenBag::from_tokens(s.split_whitespace().map(String::from).collect(), &self.scaler)
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words() {
        let bag = WhitespaceTokenizer::new().tokenize("the cat\tsat on\nthe mat");
        assert_eq!(bag.len(), 6);
        assert_eq!(bag.count("the"), 2);
        assert_eq!(bag.tokens()[1], "cat");
    }

    #[test]
    fn test_blank_input() {
        assert!(WhitespaceTokenizer::new().tokenize("   ").is_empty());
    }
}
