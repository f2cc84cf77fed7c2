//! Error types for tokenizer and statistics configuration.
//!
//! Every error is raised while building or configuring a component.
//! Tokenizing and computing statistics are total for any `&str` input,
//! and indeterminate numeric results are reported as `f64::NAN` instead.

use thiserror::Error;

/// Errors that can occur while configuring tokenizers and distance engines
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TokenStatError {
    /// A numeric parameter is outside its valid range
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: String,
    },

    /// Tokenizer strategy name not recognized
    #[error("Unknown tokenizer strategy: {0}")]
    UnknownStrategy(String),

    /// Normalizer name not recognized
    #[error("Unknown normalizer: {0}")]
    UnknownNormalizer(String),

    /// Intersection type name not recognized
    #[error("Unknown intersection type: {0}")]
    UnknownIntersection(String),

    /// Normalization mode name not recognized
    #[error("Unknown normalization mode: {0}")]
    UnknownNormalization(String),

    /// `train` was called on a strategy that has nothing to learn
    #[error("Tokenizer '{0}' does not support training")]
    NotTrainable(&'static str),
}

impl TokenStatError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, TokenStatError>;
