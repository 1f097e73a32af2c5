//! Per-row evaluation.
//!
//! Each record yields exactly one [`RowVerdict`]. Confusion-matrix
//! classification and field-level matching are independent computations:
//! classification comes solely from the record's labels and never
//! depends on whether the free text parsed.

use crate::eval::Record;
use crate::lexicon::Lexicon;
use crate::matching::{fuzzy_match, jaccard, MatchConfig};
use crate::normalize::{normalize, NormalizedDescription};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Confusion-matrix classification of one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confusion {
    TruePositive,
    FalsePositive,
    TrueNegative,
    FalseNegative,
}

impl Confusion {
    /// Classify from the record's expected/observed match labels.
    #[must_use]
    pub const fn classify(expected: bool, observed: bool) -> Self {
        match (expected, observed) {
            (true, true) => Self::TruePositive,
            (false, true) => Self::FalsePositive,
            (false, false) => Self::TrueNegative,
            (true, false) => Self::FalseNegative,
        }
    }
}

/// Field-level comparison results, present only when both descriptions
/// normalized successfully.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldComparison {
    /// Exact equality of canonical makes
    pub make_match: bool,
    /// Fuzzy model-token match
    pub model_match: bool,
    /// Both colors present and equal (absent-vs-absent is not a match)
    pub color_match: bool,
    /// Jaccard overlap of the model token sets
    pub jaccard: f64,
    /// Predicted make and leading model tokens all appear verbatim in
    /// the raw ground-truth text
    pub substring_heuristic: bool,
}

/// Structured verdict for one record. Created once, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowVerdict {
    pub confusion: Confusion,
    pub fields: Option<FieldComparison>,
}

/// Evaluates records against a lexicon and matching configuration.
#[derive(Debug, Clone, Default)]
pub struct RowEvaluator {
    lexicon: Lexicon,
    config: MatchConfig,
}

impl RowEvaluator {
    /// Create an evaluator with the given vocabulary and thresholds.
    #[must_use]
    pub fn new(lexicon: Lexicon, config: MatchConfig) -> Self {
        Self { lexicon, config }
    }

    /// Evaluate a single record.
    ///
    /// Every record produces a verdict. Field comparisons are skipped
    /// (`fields: None`) when either text fails to normalize.
    #[must_use]
    pub fn evaluate(&self, record: &Record) -> RowVerdict {
        let confusion = Confusion::classify(record.expected, record.observed);

        let fields = match (
            normalize(&record.ground_truth, &self.lexicon),
            normalize(&record.predicted, &self.lexicon),
        ) {
            (Some(gt), Some(pred)) => Some(self.compare_fields(&gt, &pred, &record.ground_truth)),
            _ => None,
        };

        RowVerdict { confusion, fields }
    }

    /// Evaluate a batch of records in parallel.
    ///
    /// Rows are independent and the aggregation over verdicts is
    /// order-independent, so the reduction is safe under any schedule.
    #[must_use]
    pub fn evaluate_all(&self, records: &[Record]) -> Vec<RowVerdict> {
        records.par_iter().map(|r| self.evaluate(r)).collect()
    }

    fn compare_fields(
        &self,
        gt: &NormalizedDescription,
        pred: &NormalizedDescription,
        raw_ground_truth: &str,
    ) -> FieldComparison {
        let make_match = gt.make == pred.make;
        let model_match = fuzzy_match(
            &gt.model_tokens,
            &pred.model_tokens,
            self.config.model_threshold,
        );
        let color_match = match (&gt.color, &pred.color) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        };
        let jaccard = jaccard(&gt.model_tokens, &pred.model_tokens);
        let substring_heuristic = substring_heuristic(raw_ground_truth, pred);

        FieldComparison {
            make_match,
            model_match,
            color_match,
            jaccard,
            substring_heuristic,
        }
    }
}

/// Evaluate one record with the given lexicon and config.
#[must_use]
pub fn evaluate(record: &Record, lexicon: &Lexicon, config: MatchConfig) -> RowVerdict {
    RowEvaluator::new(lexicon.clone(), config).evaluate(record)
}

/// Evaluate a batch of records in parallel with the given lexicon and config.
#[must_use]
pub fn evaluate_all(records: &[Record], lexicon: &Lexicon, config: MatchConfig) -> Vec<RowVerdict> {
    RowEvaluator::new(lexicon.clone(), config).evaluate_all(records)
}

/// Whether the predicted make and the first two predicted model tokens
/// (or all of them, if fewer) each appear as substrings of the lowercased
/// raw ground-truth text.
fn substring_heuristic(raw_ground_truth: &str, pred: &NormalizedDescription) -> bool {
    let raw = raw_ground_truth.to_lowercase();
    raw.contains(&pred.make)
        && pred
            .model_tokens
            .iter()
            .take(2)
            .all(|tok| raw.contains(tok.as_str()))
}
