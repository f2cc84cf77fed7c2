//! Lorentzian distance
//!
//! Sums `ln(1 + |src_t - tar_t|)` over the union alphabet. The normalized
//! form divides by `Σ ln(1 + max(src_t, tar_t))`, its value when no token is
//! shared.

use crate::algorithms::Similarity;
use crate::distance::TokenDistance;
use crate::statistics::TokenPair;

#[must_use]
pub fn lorentzian_dist_abs(pair: &TokenPair<'_>) -> f64 {
    pair.entries().map(|e| e.abs_diff().ln_1p()).sum()
}

/// Normalized distance: 0 for identical bags, 1 when one side is empty
#[must_use]
pub fn lorentzian_dist(pair: &TokenPair<'_>) -> f64 {
    let mut dist = 0.0;
    let mut bound = 0.0;
    let mut identical = true;
    for e in pair.entries() {
        dist += e.abs_diff().ln_1p();
        bound += e.max().ln_1p();
        identical &= e.src == e.tar;
    }

    if identical {
        return 0.0;
    }
    if pair.src().is_empty() || pair.tar().is_empty() {
        return 1.0;
    }
    dist / bound
}

#[derive(Debug, Clone, Default)]
pub struct Lorentzian {
    engine: TokenDistance,
}

impl Lorentzian {
    #[must_use]
    pub fn new(engine: TokenDistance) -> Self {
        Self { engine }
    }

    #[must_use]
    pub fn engine(&self) -> &TokenDistance {
        &self.engine
    }

    #[must_use]
    pub fn dist_abs(&self, src: &str, tar: &str) -> f64 {
        let (src, tar) = self.engine.tokenize_pair(src, tar);
        lorentzian_dist_abs(&TokenPair::new(&src, &tar))
    }

    #[must_use]
    pub fn dist(&self, src: &str, tar: &str) -> f64 {
        let (src, tar) = self.engine.tokenize_pair(src, tar);
        lorentzian_dist(&TokenPair::new(&src, &tar))
    }

    #[must_use]
    pub fn sim(&self, src: &str, tar: &str) -> f64 {
        1.0 - self.dist(src, tar)
    }
}

impl Similarity for Lorentzian {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        self.sim(a, b)
    }

    fn name(&self) -> &'static str {
        "lorentzian"
    }
}
