//! Row evaluation and dataset-level aggregation.

mod aggregate;
mod record;
mod row;

pub use aggregate::{ConfusionCounts, Report};
pub use record::{parse_flag, Record};
pub use row::{evaluate, evaluate_all, Confusion, FieldComparison, RowEvaluator, RowVerdict};
