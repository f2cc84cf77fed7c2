//! tokenstat - Token-based string comparison
//!
//! Splits strings into weighted token multisets and derives the 2x2
//! contingency statistics that token-based similarity coefficients are
//! defined over.
//!
//! # Features
//! - Tokenizers: q-grams (padded, skip-grams), whitespace, SAPS syllables,
//!   trainable legal-onset syllables
//! - Crisp, soft, fuzzy and group linkage token intersections
//! - Closed-world alphabets and cell normalizers
//! - Correlation coefficients (Baroni-Urbani & Buser II, MS contingency,
//!   McConnaughey, Cole) and the Lorentzian distance
//! - Parallel batch and pairwise processing
//!
//! ```
//! use tokenstat::coefficients::{BaroniUrbaniBuserII, Correlation};
//!
//! let cmp = BaroniUrbaniBuserII::default();
//! assert_eq!(cmp.corr("cat", "cat"), 1.0);
//! assert!(cmp.sim("Nigel", "Niall") > 0.89);
//! ```

pub mod algorithms;
pub mod batch;
pub mod coefficients;
pub mod distance;
pub mod error;
pub mod fingerprint;
pub mod statistics;
pub mod tokenizer;

pub use algorithms::{EditDistance, Similarity};
pub use batch::{batch_scores, batch_statistics, cdist, pairwise_statistics};
pub use distance::TokenDistance;
pub use error::{Result, TokenStatError};
pub use fingerprint::{count_fingerprint, CountFingerprint};
pub use statistics::{
    Alphabet, ContingencyTable, IntersectionType, Normalizer, StatisticsConfig, TokenStatistics,
};
pub use tokenizer::{Scaler, SharedTokenizer, TokenBag, Tokenize, Tokenizer};
