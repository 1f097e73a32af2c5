//! Report rendering for analysis results.
//!
//! The set of reported quantities is fixed by the aggregator; formatting
//! is a presentation concern. Two concrete formats are provided: a
//! human-readable summary for terminals and JSON for programmatic use.

mod json;
mod summary;

pub use json::JsonReporter;
pub use summary::SummaryReporter;

use crate::error::Result;
use crate::eval::Report;
use clap::ValueEnum;

/// Output format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Summary when writing to a TTY, JSON otherwise
    Auto,
    /// Compact human-readable text
    Summary,
    /// Machine-readable JSON
    Json,
}

impl ReportFormat {
    /// Resolve `Auto` against the actual output destination.
    #[must_use]
    pub fn resolve(self, is_terminal: bool) -> Self {
        match self {
            Self::Auto => {
                if is_terminal {
                    Self::Summary
                } else {
                    Self::Json
                }
            }
            other => other,
        }
    }
}

/// Render a report in the given (already resolved) format.
pub fn render(report: &Report, format: ReportFormat, source: &str, colored: bool) -> Result<String> {
    match format {
        ReportFormat::Json => JsonReporter::new().generate(report),
        // Auto should be resolved by the caller; fall back to summary
        ReportFormat::Summary | ReportFormat::Auto => {
            let reporter = if colored {
                SummaryReporter::new()
            } else {
                SummaryReporter::new().no_color()
            };
            Ok(reporter.generate(report, source))
        }
    }
}
