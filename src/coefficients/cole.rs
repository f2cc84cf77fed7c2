//! Cole correlation
//!
//! The denominator depends on the sign of `ad - bc` and on which cells
//! dominate:
//!
//! ```text
//! ad ≥ bc         : (ad - bc) / ((a + b)(b + d))
//! ad < bc, d ≥ a  : (ad - bc) / ((a + b)(a + c))
//! ad < bc, d < a  : (ad - bc) / ((b + d)(c + d))
//! ```

use super::{impl_similarity, Correlation};
use crate::distance::TokenDistance;
use crate::statistics::TokenStatistics;

/// 1 for identical bags, 0 when `ad = bc`
#[must_use]
pub fn cole(stats: &TokenStatistics) -> f64 {
    if stats.is_identical() {
        return 1.0;
    }

    let t = stats.contingency();
    let ad_minus_bc = t.ad_minus_bc();
    if ad_minus_bc == 0.0 {
        return 0.0;
    }

    if t.a * t.d >= t.b * t.c {
        ad_minus_bc / (t.p1() * t.q2())
    } else if t.d >= t.a {
        ad_minus_bc / (t.p1() * t.p2())
    } else {
        ad_minus_bc / (t.q2() * t.q1())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Cole {
    engine: TokenDistance,
}

impl Cole {
    #[must_use]
    pub fn new(engine: TokenDistance) -> Self {
        Self { engine }
    }
}

impl Correlation for Cole {
    fn engine(&self) -> &TokenDistance {
        &self.engine
    }

    fn corr_from(&self, stats: &TokenStatistics) -> f64 {
        cole(stats)
    }
}

impl_similarity!(Cole, "cole");
