//! Union-alphabet view over two token bags

use crate::tokenizer::TokenBag;

/// Weights of one token on both sides of a comparison
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenEntry<'a> {
    pub token: &'a str,
    pub src: f64,
    pub tar: f64,
}

impl TokenEntry<'_> {
    #[inline]
    #[must_use]
    pub fn total(&self) -> f64 {
        self.src + self.tar
    }

    #[inline]
    #[must_use]
    pub fn min(&self) -> f64 {
        self.src.min(self.tar)
    }

    #[inline]
    #[must_use]
    pub fn max(&self) -> f64 {
        self.src.max(self.tar)
    }

    #[inline]
    #[must_use]
    pub fn abs_diff(&self) -> f64 {
        (self.src - self.tar).abs()
    }

    /// Present (positive weight) on both sides
    #[inline]
    #[must_use]
    pub fn in_both(&self) -> bool {
        self.src > 0.0 && self.tar > 0.0
    }

    /// Source weight not matched by the target
    #[inline]
    #[must_use]
    pub fn src_excess(&self) -> f64 {
        (self.src - self.tar).max(0.0)
    }

    /// Target weight not matched by the source
    #[inline]
    #[must_use]
    pub fn tar_excess(&self) -> f64 {
        (self.tar - self.src).max(0.0)
    }
}

/// Borrowed pair of bags.
///
/// [`entries`](Self::entries) visits every token of the union alphabet once:
/// source tokens in first-occurrence order, then target-only tokens in
/// theirs. Coefficients that need per-token values (Lorentzian, for one)
/// read from here instead of the aggregated table.
#[derive(Debug, Clone, Copy)]
pub struct TokenPair<'a> {
    src: &'a TokenBag,
    tar: &'a TokenBag,
}

impl<'a> TokenPair<'a> {
    #[must_use]
    pub fn new(src: &'a TokenBag, tar: &'a TokenBag) -> Self {
        Self { src, tar }
    }

    #[must_use]
    pub fn src(&self) -> &'a TokenBag {
        self.src
    }

    #[must_use]
    pub fn tar(&self) -> &'a TokenBag {
        self.tar
    }

    /// Swap source and target
    #[must_use]
    pub fn swapped(&self) -> Self {
        Self {
            src: self.tar,
            tar: self.src,
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = TokenEntry<'a>> + 'a {
        let (src, tar) = (self.src, self.tar);
        let from_src = src.distinct_tokens().map(move |token| TokenEntry {
            token,
            src: src.weight(token),
            tar: tar.weight(token),
        });
        let from_tar = tar
            .distinct_tokens()
            .filter(move |token| !src.contains(token))
            .map(move |token| TokenEntry {
                token,
                src: 0.0,
                tar: tar.weight(token),
            });
        from_src.chain(from_tar)
    }

    /// Number of distinct tokens across both bags
    #[must_use]
    pub fn union_len(&self) -> usize {
        self.src.distinct_len()
            + self
                .tar
                .distinct_tokens()
                .filter(|token| !self.src.contains(token))
                .count()
    }

    /// Source tokens with unmatched weight, in source order
    pub(crate) fn src_excess(&self) -> Vec<(&'a str, f64)> {
        self.entries()
            .filter(|e| e.src_excess() > 0.0)
            .map(|e| (e.token, e.src_excess()))
            .collect()
    }

    /// Target tokens with unmatched weight, in target order
    pub(crate) fn tar_excess(&self) -> Vec<(&'a str, f64)> {
        let (src, tar) = (self.src, self.tar);
        tar.distinct_tokens()
            .filter_map(|token| {
                let excess = (tar.weight(token) - src.weight(token)).max(0.0);
                (excess > 0.0).then_some((token, excess))
            })
            .collect()
    }
}
