//! Dataset-level metric aggregation.
//!
//! All aggregate statistics are simple sums and counts over the verdict
//! sequence, so the reduction is order-independent and recomputed in
//! full on every run.

use crate::eval::row::{Confusion, RowVerdict};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw confusion-matrix counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionCounts {
    pub true_positives: usize,
    pub false_positives: usize,
    pub true_negatives: usize,
    pub false_negatives: usize,
}

impl ConfusionCounts {
    fn add(&mut self, confusion: Confusion) {
        match confusion {
            Confusion::TruePositive => self.true_positives += 1,
            Confusion::FalsePositive => self.false_positives += 1,
            Confusion::TrueNegative => self.true_negatives += 1,
            Confusion::FalseNegative => self.false_negatives += 1,
        }
    }
}

/// Aggregate metrics over one batch of verdicts.
///
/// Rate fields are `None` when the batch is empty ("no data"), never a
/// division fault. `precision`/`recall`/`f1` follow the usual
/// zero-denominator convention of 0.0 for non-empty batches.
///
/// Field-accuracy rates (make, model, both, color, substring) use the
/// TOTAL row count as denominator: rows whose text failed to normalize
/// count as non-matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// When this report was computed
    pub generated_at: DateTime<Utc>,
    /// Total rows in the batch
    pub total_rows: usize,
    /// Rows where both descriptions normalized and fields were compared
    pub comparable_rows: usize,
    pub confusion: ConfusionCounts,
    pub accuracy: Option<f64>,
    pub precision: Option<f64>,
    pub recall: Option<f64>,
    pub f1: Option<f64>,
    pub make_match_rate: Option<f64>,
    pub model_match_rate: Option<f64>,
    pub make_and_model_rate: Option<f64>,
    pub color_match_rate: Option<f64>,
    /// Mean Jaccard over rows that produced a score; `None` if none did
    pub mean_jaccard: Option<f64>,
    pub substring_heuristic_rate: Option<f64>,
}

impl Report {
    /// Aggregate a sequence of row verdicts into dataset-level metrics.
    #[must_use]
    pub fn from_verdicts(verdicts: &[RowVerdict]) -> Self {
        let total = verdicts.len();

        let mut confusion = ConfusionCounts::default();
        let mut make_matches = 0_usize;
        let mut model_matches = 0_usize;
        let mut both_matches = 0_usize;
        let mut color_matches = 0_usize;
        let mut substring_matches = 0_usize;
        let mut comparable = 0_usize;
        let mut jaccard_sum = 0.0_f64;

        for verdict in verdicts {
            confusion.add(verdict.confusion);

            if let Some(fields) = &verdict.fields {
                comparable += 1;
                if fields.make_match {
                    make_matches += 1;
                }
                if fields.model_match {
                    model_matches += 1;
                }
                if fields.make_match && fields.model_match {
                    both_matches += 1;
                }
                if fields.color_match {
                    color_matches += 1;
                }
                if fields.substring_heuristic {
                    substring_matches += 1;
                }
                jaccard_sum += fields.jaccard;
            }
        }

        let tp = confusion.true_positives as f64;
        let fp = confusion.false_positives as f64;
        let tn = confusion.true_negatives as f64;
        let fn_ = confusion.false_negatives as f64;

        // Non-empty batch: 0.0 on zero denominators per convention
        let ratio_or_zero = |num: f64, den: f64| if den > 0.0 { num / den } else { 0.0 };

        let (accuracy, precision, recall, f1) = if total == 0 {
            (None, None, None, None)
        } else {
            let precision = ratio_or_zero(tp, tp + fp);
            let recall = ratio_or_zero(tp, tp + fn_);
            let f1 = ratio_or_zero(2.0 * precision * recall, precision + recall);
            (
                Some((tp + tn) / total as f64),
                Some(precision),
                Some(recall),
                Some(f1),
            )
        };

        let rate_of_total = |count: usize| {
            if total == 0 {
                None
            } else {
                Some(count as f64 / total as f64)
            }
        };

        Self {
            generated_at: Utc::now(),
            total_rows: total,
            comparable_rows: comparable,
            confusion,
            accuracy,
            precision,
            recall,
            f1,
            make_match_rate: rate_of_total(make_matches),
            model_match_rate: rate_of_total(model_matches),
            make_and_model_rate: rate_of_total(both_matches),
            color_match_rate: rate_of_total(color_matches),
            mean_jaccard: (comparable > 0).then(|| jaccard_sum / comparable as f64),
            substring_heuristic_rate: rate_of_total(substring_matches),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::row::FieldComparison;

    fn verdict(confusion: Confusion, fields: Option<FieldComparison>) -> RowVerdict {
        RowVerdict { confusion, fields }
    }

    fn fields(make: bool, model: bool, color: bool, jaccard: f64, substring: bool) -> FieldComparison {
        FieldComparison {
            make_match: make,
            model_match: model,
            color_match: color,
            jaccard,
            substring_heuristic: substring,
        }
    }

    #[test]
    fn test_empty_batch_reports_no_data() {
        let report = Report::from_verdicts(&[]);

        assert_eq!(report.total_rows, 0);
        assert_eq!(report.accuracy, None);
        assert_eq!(report.precision, None);
        assert_eq!(report.recall, None);
        assert_eq!(report.f1, None);
        assert_eq!(report.make_match_rate, None);
        assert_eq!(report.mean_jaccard, None);
        assert_eq!(report.substring_heuristic_rate, None);
    }

    #[test]
    fn test_confusion_counting() {
        let verdicts = vec![
            verdict(Confusion::TruePositive, None),
            verdict(Confusion::TruePositive, None),
            verdict(Confusion::FalsePositive, None),
            verdict(Confusion::TrueNegative, None),
            verdict(Confusion::FalseNegative, None),
        ];
        let report = Report::from_verdicts(&verdicts);

        assert_eq!(report.confusion.true_positives, 2);
        assert_eq!(report.confusion.false_positives, 1);
        assert_eq!(report.confusion.true_negatives, 1);
        assert_eq!(report.confusion.false_negatives, 1);
        // accuracy = (2 + 1) / 5
        assert_eq!(report.accuracy, Some(0.6));
        // precision = 2/3, recall = 2/3
        assert!((report.precision.unwrap() - 2.0 / 3.0).abs() < 1e-12);
        assert!((report.recall.unwrap() - 2.0 / 3.0).abs() < 1e-12);
        assert!((report.f1.unwrap() - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_denominator_conventions() {
        // Only true negatives: precision, recall and f1 all degrade to 0
        let verdicts = vec![
            verdict(Confusion::TrueNegative, None),
            verdict(Confusion::TrueNegative, None),
        ];
        let report = Report::from_verdicts(&verdicts);

        assert_eq!(report.accuracy, Some(1.0));
        assert_eq!(report.precision, Some(0.0));
        assert_eq!(report.recall, Some(0.0));
        assert_eq!(report.f1, Some(0.0));
    }

    #[test]
    fn test_field_rates_use_total_rows() {
        // One comparable match, one unparseable row: rates divide by 2
        let verdicts = vec![
            verdict(
                Confusion::TruePositive,
                Some(fields(true, true, false, 1.0, true)),
            ),
            verdict(Confusion::TrueNegative, None),
        ];
        let report = Report::from_verdicts(&verdicts);

        assert_eq!(report.total_rows, 2);
        assert_eq!(report.comparable_rows, 1);
        assert_eq!(report.make_match_rate, Some(0.5));
        assert_eq!(report.model_match_rate, Some(0.5));
        assert_eq!(report.make_and_model_rate, Some(0.5));
        assert_eq!(report.color_match_rate, Some(0.0));
        assert_eq!(report.substring_heuristic_rate, Some(0.5));
        // Mean Jaccard only averages rows that produced a score
        assert_eq!(report.mean_jaccard, Some(1.0));
    }

    #[test]
    fn test_mean_jaccard_none_without_comparable_rows() {
        let verdicts = vec![verdict(Confusion::FalseNegative, None)];
        let report = Report::from_verdicts(&verdicts);

        assert_eq!(report.mean_jaccard, None);
        assert_eq!(report.make_match_rate, Some(0.0));
    }
}
