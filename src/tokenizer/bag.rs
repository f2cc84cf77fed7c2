//! Token multisets
//!
//! A [`TokenBag`] is what every tokenizer returns: the ordered token
//! sequence, the raw count of each distinct token and the scaled weights
//! that the statistics table reads.

use super::Scaler;
use ahash::AHashMap;

/// Tokenized form of one string
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenBag {
    /// Tokens in production order
    tokens: Vec<String>,
    /// Index into `tokens` of each distinct token's first occurrence
    first_seen: Vec<usize>,
    counts: AHashMap<String, usize>,
    weights: AHashMap<String, f64>,
}

impl TokenBag {
    /// Build a bag from an ordered token sequence, scaling counts with `scaler`
    #[must_use]
    pub fn from_tokens(tokens: Vec<String>, scaler: &Scaler) -> Self {
        let mut counts: AHashMap<String, usize> = AHashMap::with_capacity(tokens.len());
        let mut first_seen = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            match counts.get_mut(token) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(token.clone(), 1);
                    first_seen.push(i);
                }
            }
        }

        let weights = counts
            .iter()
            .map(|(token, &count)| (token.clone(), scaler.apply(count as f64)))
            .collect();

        Self {
            tokens,
            first_seen,
            counts,
            weights,
        }
    }

    /// Build a bag from pre-computed weights.
    ///
    /// The ordered sequence lists each token once, in the given order; raw
    /// counts are the weights rounded up.
    #[must_use]
    pub fn from_weights<I, S>(weights: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut bag = Self::default();
        for (token, weight) in weights {
            let token = token.into();
            let weight = weight.max(0.0);
            if let Some(existing) = bag.weights.get_mut(&token) {
                *existing += weight;
                bag.counts.insert(token, existing.ceil() as usize);
                continue;
            }
            bag.first_seen.push(bag.tokens.len());
            bag.tokens.push(token.clone());
            bag.counts.insert(token.clone(), weight.ceil() as usize);
            bag.weights.insert(token, weight);
        }
        bag
    }

    /// Ordered token sequence
    #[inline]
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Raw token → occurrence count
    #[inline]
    #[must_use]
    pub fn counts(&self) -> &AHashMap<String, usize> {
        &self.counts
    }

    /// Token → count after scaling
    #[inline]
    #[must_use]
    pub fn weights(&self) -> &AHashMap<String, f64> {
        &self.weights
    }

    /// Raw count of a token, 0 when absent
    #[inline]
    #[must_use]
    pub fn count(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Scaled weight of a token, 0.0 when absent
    #[inline]
    #[must_use]
    pub fn weight(&self, token: &str) -> f64 {
        self.weights.get(token).copied().unwrap_or(0.0)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.counts.contains_key(token)
    }

    /// Distinct tokens in first-occurrence order
    pub fn distinct_tokens(&self) -> impl Iterator<Item = &str> + '_ {
        self.first_seen.iter().map(move |&i| self.tokens[i].as_str())
    }

    /// Number of distinct tokens
    #[inline]
    #[must_use]
    pub fn distinct_len(&self) -> usize {
        self.first_seen.len()
    }

    /// Number of tokens produced (with repetitions)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Sum of scaled weights
    #[must_use]
    pub fn cardinality(&self) -> f64 {
        self.weights.values().sum()
    }
}
