//! 2×2 contingency table for set-theoretic coefficients.
//!
//! ```text
//!               tar present   tar absent
//! src present        a             b        | p1
//! src absent         c             d        | q1
//!               ------------------------------
//!                   p2            q2        | n
//! ```
//!
//! `a` is the intersection, `b` and `c` the source-only and target-only
//! weights, `d` the unobserved alphabet complement. All four cells carry the
//! configured normalizer.

use serde::{Deserialize, Serialize};

use super::TokenStatistics;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ContingencyTable {
    /// Shared weight
    pub a: f64,
    /// Weight only in the source
    pub b: f64,
    /// Weight only in the target
    pub c: f64,
    /// Unobserved alphabet complement
    pub d: f64,
}

impl ContingencyTable {
    #[must_use]
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Source marginal, `a + b`
    #[inline]
    #[must_use]
    pub fn p1(&self) -> f64 {
        self.a + self.b
    }

    /// Target marginal, `a + c`
    #[inline]
    #[must_use]
    pub fn p2(&self) -> f64 {
        self.a + self.c
    }

    /// Source-absent marginal, `c + d`
    #[inline]
    #[must_use]
    pub fn q1(&self) -> f64 {
        self.c + self.d
    }

    /// Target-absent marginal, `b + d`
    #[inline]
    #[must_use]
    pub fn q2(&self) -> f64 {
        self.b + self.d
    }

    #[inline]
    #[must_use]
    pub fn n(&self) -> f64 {
        self.a + self.b + self.c + self.d
    }

    /// Cross-product difference, `ad - bc`
    #[inline]
    #[must_use]
    pub fn ad_minus_bc(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    /// `a / (a + b)`, NaN when both are 0
    #[must_use]
    pub fn precision(&self) -> f64 {
        self.a / self.p1()
    }

    /// `a / (a + c)`, NaN when both are 0
    #[must_use]
    pub fn recall(&self) -> f64 {
        self.a / self.p2()
    }

    /// F-beta score: weighted harmonic mean of precision and recall.
    ///
    /// F1 (beta = 1.0) weighs both equally; beta < 1 favors precision.
    #[must_use]
    pub fn f_score(&self, beta: f64) -> f64 {
        let p = self.precision();
        let r = self.recall();
        if p + r == 0.0 {
            return 0.0;
        }
        let beta_sq = beta * beta;
        (1.0 + beta_sq) * p * r / (beta_sq * p + r)
    }

    /// Swap source and target cells
    #[must_use]
    pub fn transposed(&self) -> Self {
        Self {
            a: self.a,
            b: self.c,
            c: self.b,
            d: self.d,
        }
    }
}

impl From<&TokenStatistics> for ContingencyTable {
    fn from(stats: &TokenStatistics) -> Self {
        Self {
            a: stats.intersection_card(),
            b: stats.src_only_card(),
            c: stats.tar_only_card(),
            d: stats.total_complement_card(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marginals() {
        let table = ContingencyTable::new(2.0, 1.0, 3.0, 10.0);
        assert_eq!(table.p1(), 3.0);
        assert_eq!(table.p2(), 5.0);
        assert_eq!(table.q1(), 13.0);
        assert_eq!(table.q2(), 11.0);
        assert_eq!(table.n(), 16.0);
        assert_eq!(table.ad_minus_bc(), 17.0);
    }

    #[test]
    fn test_precision_recall() {
        let table = ContingencyTable::new(2.0, 2.0, 0.0, 0.0);
        assert_eq!(table.precision(), 0.5);
        assert_eq!(table.recall(), 1.0);
        let f1 = table.f_score(1.0);
        assert!((f1 - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_is_nan() {
        let table = ContingencyTable::default();
        assert!(table.precision().is_nan());
        assert!(table.recall().is_nan());
        assert!(table.f_score(1.0).is_nan());
    }

    #[test]
    fn test_zero_overlap_f_score() {
        let table = ContingencyTable::new(0.0, 1.0, 1.0, 0.0);
        assert_eq!(table.f_score(1.0), 0.0);
    }

    #[test]
    fn test_transposed() {
        let table = ContingencyTable::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(table.transposed(), ContingencyTable::new(1.0, 3.0, 2.0, 4.0));
    }
}
