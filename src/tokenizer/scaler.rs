//! Count scaling applied to a token bag after tokenization
//!
//! The scaler runs elementwise over the token → count map. Both sides of a
//! comparison must be tokenized with the same scaler, otherwise their
//! weights are not comparable; nothing here enforces that.

use crate::error::TokenStatError;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Scaling function for token counts
#[derive(Clone, Default)]
pub enum Scaler {
    /// Raw counts
    #[default]
    Identity,
    /// Every positive count becomes 1 (multiset → set)
    Set,
    /// `ln(1 + x)`
    Log1p,
    /// `√x`
    Sqrt,
    /// `eˣ`
    Exp,
    /// Caller-supplied monotonic transform; negative or NaN results are clamped to 0
    Custom(Arc<dyn Fn(f64) -> f64 + Send + Sync>),
}

impl Scaler {
    /// Wrap a closure as a custom scaler
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(f))
    }

    /// Apply the scaler to one count
    #[inline]
    #[must_use]
    pub fn apply(&self, count: f64) -> f64 {
        match self {
            Self::Identity => count,
            Self::Set => {
                if count > 0.0 {
                    1.0
                } else {
                    count
                }
            }
            Self::Log1p => count.ln_1p(),
            Self::Sqrt => count.sqrt(),
            Self::Exp => count.exp(),
            Self::Custom(f) => f(count).max(0.0),
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Set => "set",
            Self::Log1p => "log1p",
            Self::Sqrt => "sqrt",
            Self::Exp => "exp",
            Self::Custom(_) => "custom",
        }
    }
}

impl fmt::Debug for Scaler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scaler::{}", self.name())
    }
}

impl FromStr for Scaler {
    type Err = TokenStatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "" | "none" | "identity" => Ok(Self::Identity),
            "set" => Ok(Self::Set),
            "log1p" | "log" => Ok(Self::Log1p),
            "sqrt" => Ok(Self::Sqrt),
            "exp" => Ok(Self::Exp),
            _ => Err(TokenStatError::invalid(
                "scaler",
                format!("unknown scaler '{}', expected none, set, log1p, sqrt or exp", s),
            )),
        }
    }
}
