//! Baroni-Urbani & Buser II correlation
//!
//! ```text
//! corr = (√(ad) + a - b - c) / (√(ad) + a + b + c)
//! ```
//!
//! Identical bags correlate at 1, an empty side at -1, and a zero numerator
//! short-circuits to 0.

use super::{impl_similarity, Correlation};
use crate::distance::TokenDistance;
use crate::statistics::TokenStatistics;

#[must_use]
pub fn baroni_urbani_buser_ii(stats: &TokenStatistics) -> f64 {
    if stats.is_identical() {
        return 1.0;
    }
    if stats.has_empty_side() {
        return -1.0;
    }

    let t = stats.contingency();
    let sqrt_ad = (t.a * t.d).sqrt();
    let num = sqrt_ad + t.a - t.b - t.c;
    if num == 0.0 {
        return 0.0;
    }
    num / (sqrt_ad + t.a + t.b + t.c)
}

#[derive(Debug, Clone, Default)]
pub struct BaroniUrbaniBuserII {
    engine: TokenDistance,
}

impl BaroniUrbaniBuserII {
    #[must_use]
    pub fn new(engine: TokenDistance) -> Self {
        Self { engine }
    }
}

impl Correlation for BaroniUrbaniBuserII {
    fn engine(&self) -> &TokenDistance {
        &self.engine
    }

    fn corr_from(&self, stats: &TokenStatistics) -> f64 {
        baroni_urbani_buser_ii(stats)
    }
}

impl_similarity!(BaroniUrbaniBuserII, "baroni_urbani_buser_ii");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::Similarity;
    use crate::coefficients::test_utils::{approx_eq, no_d};

    #[test]
    fn test_base_cases() {
        for cmp in [BaroniUrbaniBuserII::default(), BaroniUrbaniBuserII::new(no_d())] {
            assert_eq!(cmp.corr("", ""), 1.0);
            assert_eq!(cmp.corr("a", ""), -1.0);
            assert_eq!(cmp.corr("", "abc"), -1.0);
            assert_eq!(cmp.corr("abc", "abc"), 1.0);
            assert_eq!(cmp.corr("abcd", "efgh"), -1.0);

            assert_eq!(cmp.sim("", ""), 1.0);
            assert_eq!(cmp.sim("abc", ""), 0.0);
            assert_eq!(cmp.dist("", "a"), 1.0);
            assert_eq!(cmp.dist("abc", "abc"), 0.0);
        }
    }

    #[test]
    fn test_closed_world() {
        let cmp = BaroniUrbaniBuserII::default();
        assert!(approx_eq(cmp.corr("Nigel", "Niall"), 0.7902767176));
        assert!(approx_eq(cmp.corr("Niall", "Nigel"), 0.7902767176));
        assert!(approx_eq(cmp.corr("Colin", "Coiln"), 0.7902767176));
        assert!(approx_eq(cmp.corr("ATCAACGAGT", "AACGATTAG"), 0.8398473871));
        assert!(approx_eq(cmp.sim("Nigel", "Niall"), 0.8951383588));
        assert!(approx_eq(cmp.dist("ATCAACGAGT", "AACGATTAG"), 0.0800763064));
    }

    #[test]
    fn test_without_unobserved_term() {
        let cmp = BaroniUrbaniBuserII::new(no_d());
        assert!(approx_eq(cmp.corr("Nigel", "Niall"), -1.0 / 3.0));
        assert!(approx_eq(cmp.sim("Coiln", "Colin"), 1.0 / 3.0));
        // zero numerator
        assert_eq!(cmp.corr("ATCAACGAGT", "AACGATTAG"), 0.0);
        assert_eq!(cmp.sim("ATCAACGAGT", "AACGATTAG"), 0.5);
    }

    #[test]
    fn test_similarity_trait() {
        let cmp = BaroniUrbaniBuserII::default();
        assert_eq!(Similarity::name(&cmp), "baroni_urbani_buser_ii");
        assert!(approx_eq(cmp.similarity("Nigel", "Niall"), 0.8951383588));
    }
}
