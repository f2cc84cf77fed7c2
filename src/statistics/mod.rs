//! Multiset statistics table
//!
//! Given two token bags, [`TokenStatistics::compute`] walks the union
//! alphabet once and records every quantity the coefficients are built
//! from: cardinalities, intersection and union under the configured
//! intersection type, per-token min/max/total sums and the presence cells
//! of the contingency table.
//!
//! Raw values are available through plain getters. The `*_card()`
//! accessors apply the configured [`Normalizer`].

pub mod alphabet;
pub mod contingency;
pub mod intersection;
pub mod normalizer;
pub mod pair;

pub use alphabet::Alphabet;
pub use contingency::ContingencyTable;
pub use intersection::{IntersectionType, DEFAULT_FUZZY_THRESHOLD, DEFAULT_LINKAGE_THRESHOLD};
pub use normalizer::Normalizer;
pub use pair::{TokenEntry, TokenPair};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::tokenizer::TokenBag;

/// Configuration for computing statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatisticsConfig {
    /// Size of the token universe
    pub alphabet: Alphabet,
    /// How the intersection of the two bags is measured
    pub intersection: IntersectionType,
    /// Applied by the `*_card()` accessors
    pub normalizer: Normalizer,
}

impl StatisticsConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_alphabet(mut self, alphabet: impl Into<Alphabet>) -> Self {
        self.alphabet = alphabet.into();
        self
    }

    #[must_use]
    pub fn with_intersection(mut self, intersection: IntersectionType) -> Self {
        self.intersection = intersection;
        self
    }

    #[must_use]
    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.intersection.validate()
    }
}

/// Statistics of one source/target pair.
///
/// # Invariants
/// - `both + only_src + only_tar == observed`
/// - `observed + neither == alphabet_size()`
/// - with the crisp intersection, `intersection == min_sum` and
///   `union == max_sum`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenStatistics {
    src_card: f64,
    tar_card: f64,
    intersection: f64,
    union: f64,
    total: f64,
    min_sum: f64,
    max_sum: f64,
    src_only: f64,
    tar_only: f64,
    total_complement: f64,
    both: usize,
    only_src: usize,
    only_tar: usize,
    neither: usize,
    observed: usize,
    /// Resolved closed-world size, `None` for open world
    alphabet: Option<u64>,
    normalizer: Normalizer,
}

impl TokenStatistics {
    /// Compute the table for `src` against `tar`.
    ///
    /// `alphabet_size` is the resolved closed-world size (see
    /// [`Alphabet::resolve`]); `None` and `Some(0)` both leave `neither` at 0.
    #[must_use]
    pub fn compute(
        src: &TokenBag,
        tar: &TokenBag,
        config: &StatisticsConfig,
        alphabet_size: Option<u64>,
    ) -> Self {
        let pair = TokenPair::new(src, tar);
        let extra = config.intersection.extra_weights(&pair);

        let mut stats = Self {
            alphabet: alphabet_size,
            normalizer: config.normalizer,
            ..Default::default()
        };

        for entry in pair.entries() {
            let shared = entry.min() + extra.get(entry.token).copied().unwrap_or(0.0);

            stats.src_card += entry.src;
            stats.tar_card += entry.tar;
            stats.total += entry.total();
            stats.min_sum += entry.min();
            stats.max_sum += entry.max();
            stats.intersection += shared;
            stats.src_only += (entry.src - shared).max(0.0);
            stats.tar_only += (entry.tar - shared).max(0.0);
            stats.union += (entry.total() - shared).max(0.0);

            match (entry.src > 0.0, entry.tar > 0.0) {
                (true, true) => stats.both += 1,
                (true, false) => stats.only_src += 1,
                (false, true) => stats.only_tar += 1,
                (false, false) => {}
            }
        }

        stats.observed = stats.both + stats.only_src + stats.only_tar;
        stats.neither = alphabet_size
            .map(|size| size.saturating_sub(stats.observed as u64))
            .map_or(0, |n| usize::try_from(n).unwrap_or(usize::MAX));
        stats.total_complement = stats.neither as f64;
        stats
    }

    /// Crisp, unnormalized, open-world statistics
    #[must_use]
    pub fn crisp(src: &TokenBag, tar: &TokenBag) -> Self {
        Self::compute(src, tar, &StatisticsConfig::default(), None)
    }

    /// Contingency table of the normalized cells
    #[must_use]
    pub fn contingency(&self) -> ContingencyTable {
        ContingencyTable::from(self)
    }

    #[inline]
    fn norm(&self, x: f64, cells: u8) -> f64 {
        self.normalizer.apply(x, cells, self.population())
    }

    // Raw values

    /// Summed source weight
    #[must_use]
    pub fn src_weight(&self) -> f64 {
        self.src_card
    }

    /// Summed target weight
    #[must_use]
    pub fn tar_weight(&self) -> f64 {
        self.tar_card
    }

    #[must_use]
    pub fn intersection(&self) -> f64 {
        self.intersection
    }

    #[must_use]
    pub fn union(&self) -> f64 {
        self.union
    }

    /// Σ (src + tar) over the union alphabet
    #[must_use]
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Σ min(src, tar), the crisp intersection
    #[must_use]
    pub fn min_sum(&self) -> f64 {
        self.min_sum
    }

    /// Σ max(src, tar), the crisp union
    #[must_use]
    pub fn max_sum(&self) -> f64 {
        self.max_sum
    }

    #[must_use]
    pub fn src_only(&self) -> f64 {
        self.src_only
    }

    #[must_use]
    pub fn tar_only(&self) -> f64 {
        self.tar_only
    }

    #[must_use]
    pub fn symmetric_difference(&self) -> f64 {
        self.src_only + self.tar_only
    }

    /// Unobserved part of the alphabet
    #[must_use]
    pub fn total_complement(&self) -> f64 {
        self.total_complement
    }

    /// `total + total_complement`
    #[must_use]
    pub fn population(&self) -> f64 {
        self.total + self.total_complement
    }

    /// Distinct tokens present in both bags
    #[must_use]
    pub fn both(&self) -> usize {
        self.both
    }

    #[must_use]
    pub fn only_src(&self) -> usize {
        self.only_src
    }

    #[must_use]
    pub fn only_tar(&self) -> usize {
        self.only_tar
    }

    #[must_use]
    pub fn neither(&self) -> usize {
        self.neither
    }

    /// Distinct tokens present in at least one bag
    #[must_use]
    pub fn observed(&self) -> usize {
        self.observed
    }

    /// `observed + neither`
    #[must_use]
    pub fn alphabet_size(&self) -> usize {
        self.observed.saturating_add(self.neither)
    }

    /// Closed-world size the table was computed with
    #[must_use]
    pub fn configured_alphabet(&self) -> Option<u64> {
        self.alphabet
    }

    #[must_use]
    pub fn normalizer(&self) -> Normalizer {
        self.normalizer
    }

    /// Both bags carry the same weight for every token
    #[must_use]
    pub fn is_identical(&self) -> bool {
        self.min_sum == self.max_sum
    }

    /// At least one bag is empty
    #[must_use]
    pub fn has_empty_side(&self) -> bool {
        self.src_card == 0.0 || self.tar_card == 0.0
    }

    // Normalized values

    #[must_use]
    pub fn intersection_card(&self) -> f64 {
        self.norm(self.intersection, 1)
    }

    #[must_use]
    pub fn src_only_card(&self) -> f64 {
        self.norm(self.src_only, 1)
    }

    #[must_use]
    pub fn tar_only_card(&self) -> f64 {
        self.norm(self.tar_only, 1)
    }

    #[must_use]
    pub fn total_complement_card(&self) -> f64 {
        self.norm(self.total_complement, 1)
    }

    #[must_use]
    pub fn src_card(&self) -> f64 {
        self.norm(self.src_card, 2)
    }

    #[must_use]
    pub fn tar_card(&self) -> f64 {
        self.norm(self.tar_card, 2)
    }

    #[must_use]
    pub fn symmetric_difference_card(&self) -> f64 {
        self.norm(self.symmetric_difference(), 2)
    }

    #[must_use]
    pub fn total_card(&self) -> f64 {
        self.norm(self.total, 3)
    }

    #[must_use]
    pub fn union_card(&self) -> f64 {
        self.norm(self.union, 3)
    }

    #[must_use]
    pub fn population_card(&self) -> f64 {
        self.norm(self.population(), 4)
    }

    /// Population minus the normalized intersection
    #[must_use]
    pub fn population_unique_card(&self) -> f64 {
        self.norm(self.population() - self.intersection_card(), 4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::{QGrams, Scaler, Tokenize, Tokenizer};

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn unpadded(q: usize) -> QGrams {
        QGrams::new(q).unwrap().with_padding(false)
    }

    fn check_invariants(stats: &TokenStatistics) {
        assert_eq!(stats.both() + stats.only_src() + stats.only_tar(), stats.observed());
        assert_eq!(stats.observed() + stats.neither(), stats.alphabet_size());
        assert!(stats.src_only() >= 0.0 && stats.tar_only() >= 0.0);
        assert!(stats.intersection() >= 0.0 && stats.union() >= 0.0);
    }

    #[test]
    fn test_self_comparison() {
        let tokenizer = Tokenizer::default();
        for s in ["", "a", "hello", "banana", "entreatment", "日本語"] {
            let bag = tokenizer.tokenize(s);
            let stats = TokenStatistics::crisp(&bag, &bag);
            assert_eq!(stats.only_src(), 0, "{s}");
            assert_eq!(stats.only_tar(), 0, "{s}");
            assert_eq!(stats.both(), bag.distinct_len(), "{s}");
            assert_eq!(stats.src_only(), 0.0);
            assert_eq!(stats.intersection(), bag.cardinality());
            check_invariants(&stats);
        }
    }

    #[test]
    fn test_cat_hat() {
        let tokenizer = unpadded(2);
        let (cat, hat) = (tokenizer.tokenize("cat"), tokenizer.tokenize("hat"));
        let stats = TokenStatistics::crisp(&cat, &hat);
        assert_eq!(stats.both(), 1);
        assert_eq!(stats.only_src(), 1);
        assert_eq!(stats.only_tar(), 1);
        assert_eq!(stats.intersection(), 1.0);
        assert_eq!(stats.union(), 3.0);
        assert_eq!(stats.total(), 4.0);
        assert_eq!(stats.symmetric_difference(), 2.0);
    }

    #[test]
    fn test_disjoint_alphabets() {
        let tokenizer = QGrams::new(1).unwrap();
        let stats = TokenStatistics::crisp(&tokenizer.tokenize("abcd"), &tokenizer.tokenize("efgh"));
        assert_eq!(stats.both(), 0);
        assert_eq!(stats.intersection(), 0.0);
        assert_eq!(stats.only_src(), 4);
        assert_eq!(stats.only_tar(), 4);
    }

    #[test]
    fn test_symmetry() {
        let tokenizer = Tokenizer::default();
        for (a, b) in [("night", "nacht"), ("banana", "bandana"), ("", "abc")] {
            let (src, tar) = (tokenizer.tokenize(a), tokenizer.tokenize(b));
            let ab = TokenStatistics::crisp(&src, &tar);
            let ba = TokenStatistics::crisp(&tar, &src);
            assert_eq!(ab.both(), ba.both());
            assert_eq!(ab.total(), ba.total());
            assert_eq!(ab.min_sum(), ba.min_sum());
            assert_eq!(ab.max_sum(), ba.max_sum());
            assert_eq!(ab.intersection(), ba.intersection());
            assert_eq!(ab.only_src(), ba.only_tar());
            assert_eq!(ab.src_only(), ba.tar_only());
            assert_eq!(ab.contingency(), ba.contingency().transposed());
        }
    }

    #[test]
    fn test_empty_pair() {
        let empty = TokenBag::default();
        let stats = TokenStatistics::crisp(&empty, &empty);
        assert_eq!(stats.intersection(), 0.0);
        assert_eq!(stats.union(), 0.0);
        assert_eq!(stats.both(), 0);
        assert_eq!(stats.only_src(), 0);
        assert_eq!(stats.only_tar(), 0);
        assert_eq!(stats.alphabet_size(), 0);
        assert_eq!(stats.contingency(), ContingencyTable::default());
        assert!(stats.is_identical());
        assert!(stats.has_empty_side());
    }

    #[test]
    fn test_identity_ignores_token_order() {
        let words = Tokenizer::whitespace();
        let stats = TokenStatistics::crisp(&words.tokenize("b a"), &words.tokenize("a  b"));
        assert!(stats.is_identical());
        assert!(!stats.has_empty_side());

        let stats = TokenStatistics::crisp(&words.tokenize("a b"), &words.tokenize("a b b"));
        assert!(!stats.is_identical());
    }

    #[test]
    fn test_crisp_bounds() {
        let tokenizer = QGrams::new(1).unwrap();
        let (src, tar) = (tokenizer.tokenize("aaab"), tokenizer.tokenize("abbc"));
        let stats = TokenStatistics::crisp(&src, &tar);
        assert_eq!(stats.intersection(), stats.min_sum());
        assert_eq!(stats.union(), stats.max_sum());
        assert!(stats.intersection() <= stats.src_weight().min(stats.tar_weight()));
        // a: min(3, 1), b: min(1, 2)
        assert_eq!(stats.intersection(), 2.0);
        assert_eq!(stats.union(), 6.0);
        // "a" and "b" carry unmatched weight on opposite sides
        assert_eq!(stats.src_only(), 2.0);
        assert_eq!(stats.tar_only(), 2.0);
        assert_eq!(stats.both(), 2);
        assert_eq!(stats.only_tar(), 1);
    }

    #[test]
    fn test_closed_world() {
        let tokenizer = Tokenizer::default();
        let (cat, hat) = (tokenizer.tokenize("cat"), tokenizer.tokenize("hat"));
        let stats = TokenStatistics::compute(&cat, &hat, &StatisticsConfig::default(), Some(784));
        assert_eq!(stats.observed(), 6);
        assert_eq!(stats.neither(), 778);
        assert_eq!(stats.total_complement(), 778.0);
        assert_eq!(stats.alphabet_size(), 784);
        assert_eq!(stats.population(), 786.0);
        check_invariants(&stats);
    }

    #[test]
    fn test_zero_alphabet_disables_complement() {
        let tokenizer = Tokenizer::default();
        let (cat, hat) = (tokenizer.tokenize("cat"), tokenizer.tokenize("hat"));
        let sentinel = TokenStatistics::compute(&cat, &hat, &StatisticsConfig::default(), Some(0));
        assert_eq!(sentinel.neither(), 0);
        assert_eq!(sentinel.total_complement(), 0.0);
        // observed counts are untouched by the sentinel
        assert_eq!(sentinel.observed(), 6);
        assert_eq!(sentinel.alphabet_size(), 6);

        // an alphabet smaller than what was observed also leaves no complement
        let small = TokenStatistics::compute(&cat, &hat, &StatisticsConfig::default(), Some(3));
        assert_eq!(small.neither(), 0);
        check_invariants(&small);
    }

    #[test]
    fn test_normalizer_cells() {
        let tokenizer = unpadded(2);
        let (cat, hat) = (tokenizer.tokenize("cat"), tokenizer.tokenize("hat"));

        let laplace = StatisticsConfig::new().with_normalizer(Normalizer::Laplace);
        let stats = TokenStatistics::compute(&cat, &hat, &laplace, None);
        assert_eq!(stats.intersection_card(), 2.0);
        assert_eq!(stats.src_only_card(), 2.0);
        assert_eq!(stats.total_complement_card(), 1.0);
        assert_eq!(stats.src_card(), 4.0);
        assert_eq!(stats.symmetric_difference_card(), 4.0);
        assert_eq!(stats.total_card(), 7.0);
        assert_eq!(stats.union_card(), 6.0);
        assert_eq!(stats.population_card(), 8.0);
        // raw values are unaffected
        assert_eq!(stats.intersection(), 1.0);

        let proportional = StatisticsConfig::new().with_normalizer(Normalizer::Proportional);
        let stats = TokenStatistics::compute(&cat, &hat, &proportional, Some(10));
        assert_eq!(stats.neither(), 7);
        assert_eq!(stats.population(), 11.0);
        assert!(approx_eq(stats.intersection_card(), 1.0 / 11.0));
        assert!(approx_eq(stats.population_card(), 1.0));
        assert!(approx_eq(stats.population_unique_card(), (11.0 - 1.0 / 11.0) / 11.0));
    }

    #[test]
    fn test_soft_and_fuzzy_raise_intersection() {
        let words = Tokenizer::whitespace();
        let (src, tar) = (words.tokenize("color theory"), words.tokenize("colour theory"));

        let crisp = TokenStatistics::crisp(&src, &tar);
        assert_eq!(crisp.intersection(), 1.0);

        let soft = StatisticsConfig::new().with_intersection(IntersectionType::Soft);
        let stats = TokenStatistics::compute(&src, &tar, &soft, None);
        // color/colour: max(6 - 1, 4) / 6, split between both tokens
        assert!(approx_eq(stats.intersection(), 1.0 + 5.0 / 6.0));
        assert!(approx_eq(stats.src_only(), 1.0 - 5.0 / 12.0));
        assert!(approx_eq(stats.union(), 4.0 - stats.intersection()));
        assert!(stats.intersection() > stats.min_sum());
        check_invariants(&stats);

        let fuzzy = StatisticsConfig::new().with_intersection(IntersectionType::fuzzy());
        let stats = TokenStatistics::compute(&src, &tar, &fuzzy, None);
        assert!(approx_eq(stats.intersection(), 1.0 + 5.0 / 6.0));
        // presence cells count tokens, not similarity
        assert_eq!(stats.both(), 1);

        let linkage = StatisticsConfig::new().with_intersection(IntersectionType::linkage());
        let ab = TokenStatistics::compute(&src, &tar, &linkage, None);
        let ba = TokenStatistics::compute(&tar, &src, &linkage, None);
        // color/colour is the only assignable pair, OSA similarity 5/6
        assert!(approx_eq(ab.intersection(), 1.0 + 5.0 / 6.0));
        assert!(approx_eq(ab.intersection(), ba.intersection()));
        check_invariants(&ab);
    }

    #[test]
    fn test_scaled_weights() {
        let tokenizer = QGrams::new(1).unwrap().with_scaler(Scaler::Set);
        let stats = TokenStatistics::crisp(&tokenizer.tokenize("aaab"), &tokenizer.tokenize("ab"));
        assert_eq!(stats.intersection(), 2.0);
        assert_eq!(stats.src_only(), 0.0);
    }

    #[test]
    fn test_config_deserialize() {
        let config: StatisticsConfig =
            serde_json::from_str(r#"{"alphabet": {"size": 0}, "normalizer": "laplace"}"#).unwrap();
        assert_eq!(config.alphabet, Alphabet::Size(0));
        assert_eq!(config.intersection, IntersectionType::Crisp);
        assert_eq!(config.normalizer, Normalizer::Laplace);

        let fuzzy: StatisticsConfig =
            serde_json::from_str(r#"{"intersection": {"fuzzy": {"threshold": 0.9}}}"#).unwrap();
        assert_eq!(fuzzy.intersection, IntersectionType::Fuzzy { threshold: 0.9 });

        let linkage: StatisticsConfig =
            serde_json::from_str(r#"{"intersection": {"linkage": {"threshold": 0.3}}}"#).unwrap();
        assert_eq!(linkage.intersection, IntersectionType::Linkage { threshold: 0.3 });
    }

    #[test]
    fn test_statistics_serialize() {
        let tokenizer = unpadded(2);
        let stats = TokenStatistics::crisp(&tokenizer.tokenize("cat"), &tokenizer.tokenize("hat"));
        let json = serde_json::to_string(&stats).unwrap();
        let back: TokenStatistics = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stats);
    }
}
