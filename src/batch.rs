//! Batch statistics
//!
//! Computes tables for many string pairs at once. Every distinct input
//! string is tokenized exactly once, and work is spread over rayon's thread
//! pool once the batch reaches [`PARALLEL_THRESHOLD`] items. Smaller
//! batches run sequentially to avoid thread pool overhead.

use ahash::AHashMap;
use rayon::prelude::*;
use tracing::debug;

use crate::distance::TokenDistance;
use crate::statistics::TokenStatistics;
use crate::tokenizer::TokenBag;

/// Batch size at which processing switches to rayon
pub const PARALLEL_THRESHOLD: usize = 100;

/// Distinct inputs tokenized once, and the bag index of every input
struct TokenizedInputs {
    bags: Vec<TokenBag>,
    ids: Vec<usize>,
}

impl TokenizedInputs {
    fn new<'a, I>(engine: &TokenDistance, strings: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut index: AHashMap<&'a str, usize> = AHashMap::new();
        let mut distinct: Vec<&'a str> = Vec::new();
        let ids: Vec<usize> = strings
            .into_iter()
            .map(|s| {
                *index.entry(s).or_insert_with(|| {
                    distinct.push(s);
                    distinct.len() - 1
                })
            })
            .collect();

        let parallel = distinct.len() >= PARALLEL_THRESHOLD;
        let bags = if parallel {
            distinct.par_iter().map(|s| engine.tokenize(s)).collect()
        } else {
            distinct.iter().map(|s| engine.tokenize(s)).collect()
        };

        debug!(
            inputs = ids.len(),
            distinct = distinct.len(),
            parallel,
            "tokenized batch inputs"
        );
        Self { bags, ids }
    }

    #[inline]
    fn bag(&self, input: usize) -> &TokenBag {
        &self.bags[self.ids[input]]
    }
}

/// Statistics for each `(src, tar)` pair, in input order
pub fn batch_statistics<S>(engine: &TokenDistance, pairs: &[(S, S)]) -> Vec<TokenStatistics>
where
    S: AsRef<str> + Sync,
{
    let inputs = TokenizedInputs::new(
        engine,
        pairs
            .iter()
            .flat_map(|(src, tar)| [src.as_ref(), tar.as_ref()]),
    );
    let compute = |i: usize| engine.statistics_for_bags(inputs.bag(2 * i), inputs.bag(2 * i + 1));

    if pairs.len() >= PARALLEL_THRESHOLD {
        (0..pairs.len()).into_par_iter().map(compute).collect()
    } else {
        (0..pairs.len()).map(compute).collect()
    }
}

/// Score each pair with a coefficient over its statistics table.
///
/// ```
/// use tokenstat::batch::batch_scores;
/// use tokenstat::coefficients::baroni_urbani_buser_ii;
/// use tokenstat::TokenDistance;
///
/// let engine = TokenDistance::default();
/// let scores = batch_scores(&engine, &[("abc", "abc"), ("abc", "")], baroni_urbani_buser_ii);
/// assert_eq!(scores, vec![1.0, -1.0]);
/// ```
pub fn batch_scores<S, F>(engine: &TokenDistance, pairs: &[(S, S)], coefficient: F) -> Vec<f64>
where
    S: AsRef<str> + Sync,
    F: Fn(&TokenStatistics) -> f64 + Send + Sync,
{
    let stats = batch_statistics(engine, pairs);
    if stats.len() >= PARALLEL_THRESHOLD {
        stats.par_iter().map(&coefficient).collect()
    } else {
        stats.iter().map(&coefficient).collect()
    }
}

/// Statistics for every query against every choice.
///
/// `result[i][j]` compares `queries[i]` with `choices[j]`.
pub fn pairwise_statistics<S>(
    engine: &TokenDistance,
    queries: &[S],
    choices: &[S],
) -> Vec<Vec<TokenStatistics>>
where
    S: AsRef<str> + Sync,
{
    let inputs = TokenizedInputs::new(
        engine,
        queries.iter().chain(choices).map(|s| s.as_ref()),
    );
    let offset = queries.len();
    let row = |i: usize| -> Vec<TokenStatistics> {
        (0..choices.len())
            .map(|j| engine.statistics_for_bags(inputs.bag(i), inputs.bag(offset + j)))
            .collect()
    };

    let cells = queries.len().saturating_mul(choices.len());
    debug!(queries = queries.len(), choices = choices.len(), cells, "pairwise statistics");
    if cells >= PARALLEL_THRESHOLD {
        (0..queries.len()).into_par_iter().map(row).collect()
    } else {
        (0..queries.len()).map(row).collect()
    }
}

/// Coefficient matrix of every query against every choice
pub fn cdist<S, F>(engine: &TokenDistance, queries: &[S], choices: &[S], coefficient: F) -> Vec<Vec<f64>>
where
    S: AsRef<str> + Sync,
    F: Fn(&TokenStatistics) -> f64 + Send + Sync,
{
    pairwise_statistics(engine, queries, choices)
        .into_iter()
        .map(|row| row.iter().map(&coefficient).collect())
        .collect()
}
