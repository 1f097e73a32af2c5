//! Similarity functions and matching configuration.

mod config;
mod similarity;

pub use config::MatchConfig;
pub use similarity::{fuzzy_match, jaccard, lcs_ratio};
