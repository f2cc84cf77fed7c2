//! Normalizers for contingency quantities
//!
//! A normalizer maps a raw quantity `x` to `f(x, n)`, where `n` is the
//! number of contingency cells the quantity spans (1 for a single cell, 4 for
//! the whole population). Some normalizers also read the raw population.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{Result, TokenStatError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalizer {
    /// `x`
    #[default]
    None,
    /// `x / max(1, population)`
    Proportional,
    /// `ln(1 + x)`
    Log,
    /// `e^x`
    Exp,
    /// `x + n`, one pseudo-count per cell
    Laplace,
    /// `1 / x`, or the population when `x = 0`
    Inverse,
    /// `population - x`
    Complement,
}

impl Normalizer {
    #[inline]
    #[must_use]
    pub fn apply(self, x: f64, cells: u8, population: f64) -> f64 {
        match self {
            Self::None => x,
            Self::Proportional => x / population.max(1.0),
            Self::Log => x.ln_1p(),
            Self::Exp => x.exp(),
            Self::Laplace => x + f64::from(cells),
            Self::Inverse => {
                if x == 0.0 {
                    population
                } else {
                    1.0 / x
                }
            }
            Self::Complement => population - x,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Proportional => "proportional",
            Self::Log => "log",
            Self::Exp => "exp",
            Self::Laplace => "laplace",
            Self::Inverse => "inverse",
            Self::Complement => "complement",
        }
    }
}

impl FromStr for Normalizer {
    type Err = TokenStatError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "" | "none" | "identity" => Ok(Self::None),
            "proportional" => Ok(Self::Proportional),
            "log" => Ok(Self::Log),
            "exp" => Ok(Self::Exp),
            "laplace" => Ok(Self::Laplace),
            "inverse" => Ok(Self::Inverse),
            "complement" => Ok(Self::Complement),
            _ => Err(TokenStatError::UnknownNormalizer(s.to_string())),
        }
    }
}
