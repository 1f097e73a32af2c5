//! **A library for evaluating vehicle-description match predictions.**
//!
//! `vehicle-eval` scores the output of a vehicle recognition pipeline
//! against ground-truth descriptions. Each record pairs a ground-truth
//! description ("2012 Toyota Camry LE Silver") with a predicted one,
//! plus the expected and observed match labels. The library normalizes
//! both descriptions into structured form (make, model tokens, color),
//! compares them field by field, and aggregates the per-row verdicts
//! into a batch report with confusion-matrix metrics.
//!
//! ## Core Concepts & Modules
//!
//! - **[`lexicon`]**: Vocabulary tables consulted during normalization:
//!   body-style words, trim-level words, color words, and make-synonym
//!   aliases. Built-ins can be replaced from a YAML or JSON file.
//! - **[`normalize`]**: Turns a free-text description into a
//!   [`NormalizedDescription`], stripping years, body styles, and trims,
//!   capturing the first color, and canonicalizing the make.
//! - **[`matching`]**: Token-set Jaccard similarity and a fuzzy
//!   character-level ratio used for model-name comparison, tuned through
//!   [`MatchConfig`] presets.
//! - **[`eval`]**: Row evaluation ([`RowEvaluator`]) and batch
//!   aggregation ([`Report`]). The match-label confusion matrix is
//!   computed for every row; field comparisons only for rows where both
//!   descriptions normalize.
//! - **[`reports`]**: Human-readable summary and JSON report output.
//!
//! ## Getting Started
//!
//! ```no_run
//! use vehicle_eval::{Lexicon, MatchConfig, Record, Report, RowEvaluator};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let records = vec![Record::new(
//!         "2012 Toyota Camry LE Silver",
//!         "Toyota Camry Silver",
//!         true,
//!         true,
//!     )];
//!
//!     let evaluator = RowEvaluator::new(Lexicon::with_builtins(), MatchConfig::balanced());
//!     let verdicts = evaluator.evaluate_all(&records);
//!     let report = Report::from_verdicts(&verdicts);
//!
//!     println!("Accuracy: {:?}", report.accuracy);
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Cast safety: usize→f64 casts are pervasive in rate calculations and
    // all counts are bounded in practice
    clippy::cast_precision_loss,
    // Doc completeness: # Errors / # Panics sections are aspirational
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Variable names like `old`/`new` or `gt`/`pred` are clear in context
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod eval;
pub mod input;
pub mod lexicon;
pub mod matching;
pub mod normalize;
pub mod reports;

// Re-export main types for convenience
pub use config::{AnalyzeConfig, BehaviorConfig, InputSource, MatchingOptions, OutputConfig};
pub use error::{ErrorContext, Result, VehicleEvalError};
pub use eval::{
    evaluate, evaluate_all, Confusion, ConfusionCounts, FieldComparison, Record, Report,
    RowEvaluator, RowVerdict,
};
pub use lexicon::{Lexicon, LexiconFile};
pub use matching::{fuzzy_match, jaccard, lcs_ratio, MatchConfig};
pub use normalize::{normalize, NormalizedDescription};
pub use reports::ReportFormat;
