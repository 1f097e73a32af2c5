//! JSON report generator.

use crate::error::Result;
use crate::eval::Report;

/// JSON reporter for programmatic consumption.
///
/// Serializes the [`Report`] as-is; "no data" rates render as `null`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReporter;

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generate pretty-printed JSON for a report.
    pub fn generate(&self, report: &Report) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}
