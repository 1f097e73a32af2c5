//! Configuration types for analyzer runs.
//!
//! Structured configuration assembled from CLI arguments. The lexicon
//! file is the only externally swappable vocabulary source; matching
//! behavior is tuned through presets or an explicit threshold.

use crate::error::{Result, VehicleEvalError};
use crate::matching::MatchConfig;
use crate::reports::ReportFormat;
use std::path::PathBuf;

/// Where the input record sequence comes from.
#[derive(Debug, Clone)]
pub enum InputSource {
    /// An explicit results file (CSV or JSON)
    File(PathBuf),
    /// The most recently modified `*.csv` under a results directory
    LatestIn(PathBuf),
}

/// Matching options as given on the command line.
#[derive(Debug, Clone)]
pub struct MatchingOptions {
    /// Preset name (strict, balanced, permissive)
    pub fuzzy_preset: String,
    /// Explicit threshold override, takes precedence over the preset
    pub threshold: Option<f64>,
}

impl MatchingOptions {
    /// Resolve preset and override into a concrete [`MatchConfig`].
    pub fn resolve(&self) -> Result<MatchConfig> {
        let base = MatchConfig::from_preset(&self.fuzzy_preset).ok_or_else(|| {
            VehicleEvalError::config(format!(
                "unknown fuzzy preset '{}' (expected strict, balanced or permissive)",
                self.fuzzy_preset
            ))
        })?;

        let config = match self.threshold {
            Some(threshold) => base.with_threshold(threshold),
            None => base,
        };

        if !config.is_valid() {
            return Err(VehicleEvalError::config(format!(
                "model threshold {} out of range (must be 0.0-1.0)",
                config.model_threshold
            )));
        }
        Ok(config)
    }
}

impl Default for MatchingOptions {
    fn default() -> Self {
        Self {
            fuzzy_preset: "balanced".to_string(),
            threshold: None,
        }
    }
}

/// Output configuration (format, destination, colors).
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub format: ReportFormat,
    /// Output file path (stdout if not specified)
    pub file: Option<PathBuf>,
    pub no_color: bool,
}

/// Behavior flags.
#[derive(Debug, Clone, Default)]
pub struct BehaviorConfig {
    pub quiet: bool,
    /// Non-zero exit when accuracy (percent) falls below this value
    pub fail_under: Option<f64>,
}

/// Full configuration for one `analyze` run.
#[derive(Debug, Clone)]
pub struct AnalyzeConfig {
    pub input: InputSource,
    /// Optional lexicon file (YAML or JSON); built-ins when absent
    pub lexicon_path: Option<PathBuf>,
    pub matching: MatchingOptions,
    pub output: OutputConfig,
    pub behavior: BehaviorConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_preset() {
        let opts = MatchingOptions {
            fuzzy_preset: "strict".to_string(),
            threshold: None,
        };
        assert_eq!(opts.resolve().unwrap().model_threshold, 0.90);
    }

    #[test]
    fn test_threshold_overrides_preset() {
        let opts = MatchingOptions {
            fuzzy_preset: "balanced".to_string(),
            threshold: Some(0.65),
        };
        assert_eq!(opts.resolve().unwrap().model_threshold, 0.65);
    }

    #[test]
    fn test_unknown_preset_rejected() {
        let opts = MatchingOptions {
            fuzzy_preset: "fuzzy-wuzzy".to_string(),
            threshold: None,
        };
        assert!(opts.resolve().is_err());
    }

    #[test]
    fn test_out_of_range_threshold_rejected() {
        let opts = MatchingOptions {
            fuzzy_preset: "balanced".to_string(),
            threshold: Some(1.2),
        };
        assert!(opts.resolve().is_err());
    }
}
