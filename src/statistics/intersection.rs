//! Intersection semantics
//!
//! The crisp intersection is the per-token minimum of the two bags. Soft and
//! fuzzy intersections start from it and credit pairs of *different* tokens
//! that are similar as strings: the unmatched source weight of a token and
//! the unmatched target weight of another token each receive half of the
//! pair's similarity. Group linkage credits only the pairs of a maximum
//! weight one-to-one assignment between the unmatched tokens.

use ahash::AHashMap;
use pathfinding::prelude::{kuhn_munkres, Matrix};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::pair::TokenPair;
use crate::algorithms::{
    common_prefix_len, damerau_levenshtein, damerau_levenshtein_similarity, levenshtein_similarity,
};
use crate::error::{Result, TokenStatError};

/// Default similarity threshold for the fuzzy intersection
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.8;

/// Default similarity threshold for the group linkage intersection
pub const DEFAULT_LINKAGE_THRESHOLD: f64 = 0.1;

/// Fixed-point scale of similarities handed to the assignment solver
const ASSIGNMENT_SCALE: f64 = 1e9;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntersectionType {
    /// Per-token minimum
    #[default]
    Crisp,
    /// Greedy pairing by Damerau-Levenshtein/common-prefix membership (Russ 2014)
    Soft,
    /// Every pair at or above a Levenshtein similarity threshold (Wang 2014)
    Fuzzy { threshold: f64 },
    /// Maximum-weight assignment by Damerau-Levenshtein similarity, pairs
    /// below the threshold dropped (On 2007)
    Linkage { threshold: f64 },
}

impl IntersectionType {
    /// Fuzzy intersection with the default threshold
    #[must_use]
    pub fn fuzzy() -> Self {
        Self::Fuzzy {
            threshold: DEFAULT_FUZZY_THRESHOLD,
        }
    }

    /// Group linkage with the default threshold
    #[must_use]
    pub fn linkage() -> Self {
        Self::Linkage {
            threshold: DEFAULT_LINKAGE_THRESHOLD,
        }
    }

    pub fn validate(&self) -> Result<()> {
        match *self {
            Self::Fuzzy { threshold } if threshold.is_nan() || threshold <= 0.0 || threshold > 1.0 => {
                Err(TokenStatError::invalid(
                    "threshold",
                    format!("fuzzy threshold must be in range (0.0, 1.0], got {}", threshold),
                ))
            }
            Self::Linkage { threshold } if !(0.0..=1.0).contains(&threshold) => {
                Err(TokenStatError::invalid(
                    "threshold",
                    format!("linkage threshold must be in range [0.0, 1.0], got {}", threshold),
                ))
            }
            _ => Ok(()),
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Crisp => "crisp",
            Self::Soft => "soft",
            Self::Fuzzy { .. } => "fuzzy",
            Self::Linkage { .. } => "linkage",
        }
    }

    /// Weight added on top of the crisp minimum, per token.
    ///
    /// Empty for the crisp intersection.
    pub(crate) fn extra_weights<'a>(&self, pair: &TokenPair<'a>) -> AHashMap<&'a str, f64> {
        match *self {
            Self::Crisp => AHashMap::new(),
            Self::Soft => soft_extra(pair),
            Self::Fuzzy { threshold } => fuzzy_extra(pair, threshold),
            Self::Linkage { threshold } => linkage_extra(pair, threshold),
        }
    }
}

impl FromStr for IntersectionType {
    type Err = TokenStatError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "crisp" => Ok(Self::Crisp),
            "soft" => Ok(Self::Soft),
            "fuzzy" => Ok(Self::fuzzy()),
            "linkage" => Ok(Self::linkage()),
            _ => Err(TokenStatError::UnknownIntersection(s.to_string())),
        }
    }
}

/// `max(L - osa, lcp) / L` with `L` the longer length in chars
fn membership(src: &str, tar: &str) -> f64 {
    let longer = src.chars().count().max(tar.chars().count());
    if longer == 0 {
        return 0.0;
    }
    let edit = longer.saturating_sub(damerau_levenshtein(src, tar));
    edit.max(common_prefix_len(src, tar)) as f64 / longer as f64
}

fn soft_extra<'a>(pair: &TokenPair<'a>) -> AHashMap<&'a str, f64> {
    let mut src_only = pair.src_excess();
    let mut tar_only = pair.tar_excess();
    let mut extra = AHashMap::new();
    if src_only.is_empty() || tar_only.is_empty() {
        return extra;
    }

    let cols = tar_only.len();
    let mut memberships: Vec<Option<f64>> = src_only
        .iter()
        .flat_map(|&(s, _)| tar_only.iter().map(move |&(t, _)| Some(membership(s, t))))
        .collect();

    loop {
        // Highest membership left; the first pair in scan order wins ties
        let mut best: Option<(usize, f64)> = None;
        for (idx, m) in memberships.iter().enumerate() {
            if let Some(m) = *m {
                if best.map_or(true, |(_, b)| m > b) {
                    best = Some((idx, m));
                }
            }
        }
        let Some((idx, m)) = best else { break };
        if m <= 0.0 {
            break;
        }

        let (i, j) = (idx / cols, idx % cols);
        let pairings = src_only[i].1.min(tar_only[j].1);
        *extra.entry(src_only[i].0).or_insert(0.0) += m * pairings / 2.0;
        *extra.entry(tar_only[j].0).or_insert(0.0) += m * pairings / 2.0;
        src_only[i].1 -= pairings;
        tar_only[j].1 -= pairings;
        memberships[idx] = None;
    }
    extra
}

fn fuzzy_extra<'a>(pair: &TokenPair<'a>, threshold: f64) -> AHashMap<&'a str, f64> {
    let src_only = pair.src_excess();
    let tar_only = pair.tar_excess();
    let mut extra = AHashMap::new();

    for &(s, s_rem) in &src_only {
        for &(t, t_rem) in &tar_only {
            let sim = levenshtein_similarity(s, t);
            if sim >= threshold {
                *extra.entry(s).or_insert(0.0) += sim / 2.0 * s_rem;
                *extra.entry(t).or_insert(0.0) += sim / 2.0 * t_rem;
            }
        }
    }
    extra
}

fn linkage_extra<'a>(pair: &TokenPair<'a>, threshold: f64) -> AHashMap<&'a str, f64> {
    let mut src_only = pair.src_excess();
    let mut tar_only = pair.tar_excess();
    let mut extra = AHashMap::new();
    if src_only.is_empty() || tar_only.is_empty() {
        return extra;
    }
    src_only.sort_unstable_by(|a, b| a.0.cmp(b.0));
    tar_only.sort_unstable_by(|a, b| a.0.cmp(b.0));

    // The solver assigns every row, so rows are the shorter side
    let (rows, cols) = if src_only.len() <= tar_only.len() {
        (&src_only, &tar_only)
    } else {
        (&tar_only, &src_only)
    };

    let mut sims = Vec::with_capacity(rows.len() * cols.len());
    let mut weights = Matrix::new(rows.len(), cols.len(), 0i64);
    for (i, &(r, _)) in rows.iter().enumerate() {
        for (j, &(c, _)) in cols.iter().enumerate() {
            let sim = damerau_levenshtein_similarity(r, c);
            weights[(i, j)] = (sim * ASSIGNMENT_SCALE).round() as i64;
            sims.push(sim);
        }
    }

    let (_, assignment) = kuhn_munkres(&weights);
    for (i, j) in assignment.into_iter().enumerate() {
        let sim = sims[i * cols.len() + j];
        if sim >= threshold {
            let ((r, r_rem), (c, c_rem)) = (rows[i], cols[j]);
            *extra.entry(r).or_insert(0.0) += sim / 2.0 * r_rem;
            *extra.entry(c).or_insert(0.0) += sim / 2.0 * c_rem;
        }
    }
    extra
}
