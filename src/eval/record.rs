//! Input record type.

use serde::{Deserialize, Serialize};

/// One labeled row from a verifier results file.
///
/// `expected` is the label the dataset assigns, `observed` the label the
/// scored process produced. Text fields may be blank; such rows skip
/// field comparisons through normalization failure rather than erroring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// Labeled description of what the image actually shows
    pub ground_truth: String,
    /// Description produced by the vehicle-identification process
    pub predicted: String,
    /// Whether the dataset says the description should match
    pub expected: bool,
    /// Whether the scored process said it matched
    pub observed: bool,
}

impl Record {
    /// Convenience constructor, mostly for tests.
    pub fn new(
        ground_truth: impl Into<String>,
        predicted: impl Into<String>,
        expected: bool,
        observed: bool,
    ) -> Self {
        Self {
            ground_truth: ground_truth.into(),
            predicted: predicted.into(),
            expected,
            observed,
        }
    }
}

/// Parse a boolean-like field: case-insensitive `"true"` is true,
/// anything else (including absent) is false.
#[must_use]
pub fn parse_flag(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
}
