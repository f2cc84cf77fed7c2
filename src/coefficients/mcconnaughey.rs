//! McConnaughey correlation
//!
//! ```text
//! corr = (a² - bc) / ((a + b)(a + c))
//! ```
//!
//! There is no special case for empty input: an empty side makes the
//! denominator 0 and the result NaN.

use super::{impl_similarity, Correlation};
use crate::distance::TokenDistance;
use crate::statistics::TokenStatistics;

#[must_use]
pub fn mcconnaughey(stats: &TokenStatistics) -> f64 {
    let t = stats.contingency();
    (t.a * t.a - t.b * t.c) / (t.p1() * t.p2())
}

#[derive(Debug, Clone, Default)]
pub struct McConnaughey {
    engine: TokenDistance,
}

impl McConnaughey {
    #[must_use]
    pub fn new(engine: TokenDistance) -> Self {
        Self { engine }
    }
}

impl Correlation for McConnaughey {
    fn engine(&self) -> &TokenDistance {
        &self.engine
    }

    fn corr_from(&self, stats: &TokenStatistics) -> f64 {
        mcconnaughey(stats)
    }
}

impl_similarity!(McConnaughey, "mcconnaughey");
