//! Mean squared contingency correlation
//!
//! ```text
//! corr = √2 (ad - bc) / √((ad - bc)² + (a + b)(c + d)(a + c)(b + d))
//! ```

use std::f64::consts::SQRT_2;

use super::{impl_similarity, Correlation};
use crate::distance::TokenDistance;
use crate::statistics::TokenStatistics;

/// 1 for identical bags, -1 when one side is empty, 0 when `ad = bc`
#[must_use]
pub fn ms_contingency(stats: &TokenStatistics) -> f64 {
    if stats.is_identical() {
        return 1.0;
    }
    if stats.has_empty_side() {
        return -1.0;
    }

    let t = stats.contingency();
    let ad_minus_bc = t.ad_minus_bc();
    if ad_minus_bc == 0.0 {
        return 0.0;
    }
    SQRT_2 * ad_minus_bc / (ad_minus_bc * ad_minus_bc + t.p1() * t.q1() * t.p2() * t.q2()).sqrt()
}

#[derive(Debug, Clone, Default)]
pub struct MSContingency {
    engine: TokenDistance,
}

impl MSContingency {
    #[must_use]
    pub fn new(engine: TokenDistance) -> Self {
        Self { engine }
    }
}

impl Correlation for MSContingency {
    fn engine(&self) -> &TokenDistance {
        &self.engine
    }

    fn corr_from(&self, stats: &TokenStatistics) -> f64 {
        ms_contingency(stats)
    }
}

impl_similarity!(MSContingency, "ms_contingency");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coefficients::test_utils::{approx_eq, no_d};

    #[test]
    fn test_base_cases() {
        let cmp = MSContingency::default();
        assert_eq!(cmp.corr("", ""), 1.0);
        assert_eq!(cmp.corr("abc", ""), -1.0);
        assert_eq!(cmp.corr("", "a"), -1.0);
        assert_eq!(cmp.corr("abc", "abc"), 1.0);
        assert_eq!(cmp.sim("a", ""), 0.0);
        assert_eq!(cmp.dist("abc", "abc"), 0.0);
        // disjoint, but the large unobserved cell keeps it near 0
        assert!(approx_eq(cmp.corr("abcd", "efgh"), -0.009076921903905553));
        assert!(approx_eq(cmp.sim("abcd", "efgh"), 0.49546153904804724));
    }

    #[test]
    fn test_closed_world() {
        let cmp = MSContingency::default();
        assert!(approx_eq(cmp.corr("Nigel", "Niall"), 0.628544465));
        assert!(approx_eq(cmp.corr("Coiln", "Colin"), 0.628544465));
        assert!(approx_eq(cmp.corr("ATCAACGAGT", "AACGATTAG"), 0.781408328));
        assert!(approx_eq(cmp.sim("Nigel", "Niall"), 0.8142722325));
        assert!(approx_eq(cmp.dist("Nigel", "Niall"), 0.1857277675));
        assert!(approx_eq(cmp.sim("ATCAACGAGT", "AACGATTAG"), 0.890704164));
    }

    #[test]
    fn test_without_unobserved_term() {
        let cmp = MSContingency::new(no_d());
        assert!(approx_eq(cmp.corr("abcd", "efgh"), -1.0));
        assert!(approx_eq(cmp.corr("Nigel", "Niall"), -0.632455532));
        assert!(approx_eq(cmp.corr("ATCAACGAGT", "AACGATTAG"), -0.4435327626));
        assert!(approx_eq(cmp.sim("Colin", "Coiln"), 0.183772234));
        assert!(approx_eq(cmp.sim("ATCAACGAGT", "AACGATTAG"), 0.2782336187));
    }

    #[test]
    fn test_independent_table_is_zero() {
        let unigrams = TokenDistance::with_qval(1).unwrap().with_alphabet(4u64);
        let cmp = MSContingency::new(unigrams);
        assert_eq!(cmp.corr("ab", "ac"), 0.0);
    }
}
