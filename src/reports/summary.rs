//! Summary report generator for shell output.
//!
//! Mirrors the sectioned text layout of the historical analyzer:
//! match metrics first, detailed per-field accuracy second.

use crate::eval::Report;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    /// Render a percentage rate, or `no data` for empty batches.
    fn pct(&self, rate: Option<f64>) -> String {
        match rate {
            Some(r) => format!("{:.3}%", r * 100.0),
            None => self.color("no data", "dim"),
        }
    }

    /// Render a plain ratio, or `no data`.
    fn ratio(&self, value: Option<f64>) -> String {
        match value {
            Some(v) => format!("{v:.3}"),
            None => self.color("no data", "dim"),
        }
    }

    /// Generate the summary text for a report.
    #[must_use]
    pub fn generate(&self, report: &Report, source: &str) -> String {
        let mut lines = Vec::new();

        lines.push(format!(
            "Analysed {} rows from {}",
            report.total_rows, source
        ));
        lines.push(String::new());

        lines.push(self.color("--- Match Metrics ---", "bold"));
        lines.push(format!("Accuracy: {}", self.pct(report.accuracy)));
        lines.push(format!("Precision: {}", self.pct(report.precision)));
        lines.push(format!("Recall: {}", self.pct(report.recall)));
        lines.push(format!("F1 Score: {}", self.ratio(report.f1)));
        lines.push(format!(
            "True Positives: {}",
            self.color(&report.confusion.true_positives.to_string(), "green")
        ));
        lines.push(format!(
            "False Positives: {}",
            report.confusion.false_positives
        ));
        lines.push(format!(
            "True Negatives: {}",
            self.color(&report.confusion.true_negatives.to_string(), "green")
        ));
        lines.push(format!(
            "False Negatives: {}",
            report.confusion.false_negatives
        ));
        lines.push(String::new());

        lines.push(self.color("--- Detailed Accuracy ---", "bold"));
        lines.push(format!(
            "Make accuracy: {}",
            self.pct(report.make_match_rate)
        ));
        lines.push(format!(
            "Model (fuzzy) accuracy: {}",
            self.pct(report.model_match_rate)
        ));
        lines.push(format!(
            "Make + Model accuracy: {}",
            self.pct(report.make_and_model_rate)
        ));
        lines.push(format!(
            "Colour accuracy (if present): {}",
            self.pct(report.color_match_rate)
        ));
        lines.push(format!(
            "Average Jaccard (model tokens): {}",
            self.ratio(report.mean_jaccard)
        ));
        lines.push(format!(
            "Substring heuristic (make + model tokens in GT): {}",
            self.pct(report.substring_heuristic_rate)
        ));

        lines.join("\n")
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}
