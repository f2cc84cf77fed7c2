//! Token-based coefficients
//!
//! Each coefficient is a pure function of a [`TokenStatistics`] table (or a
//! [`TokenPair`](crate::statistics::TokenPair) when it needs per-token
//! values). The structs wrap a [`TokenDistance`] engine so they can be used
//! directly on strings and through the [`Similarity`](crate::algorithms::Similarity)
//! trait.
//!
//! Indeterminate results (0/0) are returned as `f64::NAN`.

/// Implements [`Similarity`](crate::algorithms::Similarity) through [`Correlation::sim`].
///
/// A blanket impl would overlap with the one for `EditDistance`.
macro_rules! impl_similarity {
    ($ty:ty, $name:literal) => {
        impl $crate::algorithms::Similarity for $ty {
            fn similarity(&self, a: &str, b: &str) -> f64 {
                $crate::coefficients::Correlation::sim(self, a, b)
            }

            fn name(&self) -> &'static str {
                $name
            }
        }
    };
}

pub(crate) use impl_similarity;

pub mod baroni_urbani_buser;
pub mod cole;
pub mod lorentzian;
pub mod mcconnaughey;
pub mod ms_contingency;

pub use baroni_urbani_buser::{baroni_urbani_buser_ii, BaroniUrbaniBuserII};
pub use cole::{cole, Cole};
pub use lorentzian::{lorentzian_dist, lorentzian_dist_abs, Lorentzian};
pub use mcconnaughey::{mcconnaughey, McConnaughey};
pub use ms_contingency::{ms_contingency, MSContingency};

use crate::distance::TokenDistance;
use crate::statistics::TokenStatistics;

/// Coefficient in `[-1, 1]` computed from a statistics table
pub trait Correlation: Send + Sync {
    /// Engine used to tokenize and count
    fn engine(&self) -> &TokenDistance;

    /// Correlation for a precomputed table
    fn corr_from(&self, stats: &TokenStatistics) -> f64;

    fn corr(&self, src: &str, tar: &str) -> f64 {
        self.corr_from(&self.engine().statistics(src, tar))
    }

    /// `(1 + corr) / 2`
    fn sim(&self, src: &str, tar: &str) -> f64 {
        (1.0 + self.corr(src, tar)) / 2.0
    }

    fn dist(&self, src: &str, tar: &str) -> f64 {
        1.0 - self.sim(src, tar)
    }
}
