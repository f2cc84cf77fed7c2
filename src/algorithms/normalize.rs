//! String normalization applied before tokenization
//!
//! Both strings of a comparison go through the same mode so their tokens
//! stay comparable. The onset tokenizer also uses [`NormalizationMode::Letters`]
//! to clean its training corpus.

use crate::error::TokenStatError;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::str::FromStr;
use unicode_normalization::UnicodeNormalization;

/// Normalization mode for string preprocessing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationMode {
    /// Convert to lowercase only
    Lowercase,
    /// Apply Unicode NFKD normalization
    UnicodeNfkd,
    /// Remove punctuation characters
    RemovePunctuation,
    /// Remove all whitespace
    RemoveWhitespace,
    /// Keep alphabetic characters and whitespace, lowercased
    Letters,
    /// NFKD, lowercase, no punctuation, no whitespace
    Strict,
}

impl FromStr for NormalizationMode {
    type Err = TokenStatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lowercase" => Ok(Self::Lowercase),
            "unicode_nfkd" | "nfkd" => Ok(Self::UnicodeNfkd),
            "remove_punctuation" => Ok(Self::RemovePunctuation),
            "remove_whitespace" => Ok(Self::RemoveWhitespace),
            "letters" => Ok(Self::Letters),
            "strict" => Ok(Self::Strict),
            _ => Err(TokenStatError::UnknownNormalization(s.to_string())),
        }
    }
}

/// Normalize a string according to the specified mode
#[must_use]
pub fn normalize_string(s: &str, mode: NormalizationMode) -> String {
    match mode {
        NormalizationMode::Lowercase => s.to_lowercase(),
        NormalizationMode::UnicodeNfkd => s.nfkd().collect(),
        NormalizationMode::RemovePunctuation => {
            s.chars().filter(|c| !c.is_ascii_punctuation()).collect()
        }
        NormalizationMode::RemoveWhitespace => s.chars().filter(|c| !c.is_whitespace()).collect(),
        NormalizationMode::Letters => s
            .chars()
            .filter(|c| c.is_alphabetic() || c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect(),
        NormalizationMode::Strict => s
            .nfkd()
            .flat_map(char::to_lowercase)
            .filter(|c| !c.is_ascii_punctuation() && !c.is_whitespace())
            .collect(),
    }
}

/// Normalize when a mode is set, borrow otherwise
#[must_use]
pub fn maybe_normalize(s: &str, mode: Option<NormalizationMode>) -> Cow<'_, str> {
    match mode {
        None => Cow::Borrowed(s),
        Some(mode) => Cow::Owned(normalize_string(s, mode)),
    }
}
