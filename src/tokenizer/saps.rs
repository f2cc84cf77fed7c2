//! Rule-based syllable tokenizer
//!
//! Syllable Alignment Pattern Searching splitter (Ruibin & Yun, 2005):
//! a syllable starts at the current character and takes every vowel that
//! immediately follows. If it then ends in a vowel, it also takes one
//! consonant, provided that consonant ends the word or is followed by
//! another consonant. No training is involved.

use super::{is_vowel, Scaler, TokenBag, Tokenize};

#[derive(Debug, Clone, Default)]
pub struct SapsTokenizer {
    scaler: Scaler,
}

impl SapsTokenizer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_scaler(mut self, scaler: Scaler) -> Self {
        self.scaler = scaler;
        self
    }

    /// Syllables of every whitespace-separated word, in order
    #[must_use]
    pub fn syllables(&self, s: &str) -> Vec<String> {
        let mut syllables = Vec::new();
        for word in s.split_whitespace() {
            split_word(&word.chars().collect::<Vec<_>>(), &mut syllables);
        }
        syllables
    }
}

fn split_word(w: &[char], out: &mut Vec<String>) {
    let mut i = 0;
    while i < w.len() {
        let mut syllable = String::new();
        syllable.push(w[i]);
        let mut last = w[i];
        i += 1;

        while i < w.len() && is_vowel(w[i]) {
            syllable.push(w[i]);
            last = w[i];
            i += 1;
        }

        if is_vowel(last) {
            let rest = w.len() - i;
            let coda = match rest {
                0 => false,
                1 => !is_vowel(w[i]),
                _ => !is_vowel(w[i]) && !is_vowel(w[i + 1]),
            };
            if coda {
                syllable.push(w[i]);
                i += 1;
            }
        }

        out.push(syllable);
    }
}

impl Tokenize for SapsTokenizer {
    fn tokenize(&self, s: &str) -> TokenBag {
        TokenBag::from_tokens(self.syllables(s), &self.scaler)
    }

    fn name(&self) -> &'static str {
        "saps"
    }
}
