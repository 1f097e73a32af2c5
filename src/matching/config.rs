//! Matching configuration.

use serde::{Deserialize, Serialize};

/// Configuration for fuzzy model matching.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Minimum character-level sequence ratio for a model match (0.0 - 1.0)
    pub model_threshold: f64,
}

impl MatchConfig {
    /// Strict matching: only near-identical model strings count.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            model_threshold: 0.90,
        }
    }

    /// Balanced matching, the analyzer default.
    #[must_use]
    pub const fn balanced() -> Self {
        Self {
            model_threshold: 0.80,
        }
    }

    /// Permissive matching for exploratory analysis.
    #[must_use]
    pub const fn permissive() -> Self {
        Self {
            model_threshold: 0.70,
        }
    }

    /// Set a custom threshold value.
    #[must_use]
    pub const fn with_threshold(mut self, threshold: f64) -> Self {
        self.model_threshold = threshold;
        self
    }

    /// Create a config from a preset name.
    #[must_use]
    pub fn from_preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "strict" => Some(Self::strict()),
            "balanced" => Some(Self::balanced()),
            "permissive" => Some(Self::permissive()),
            _ => None,
        }
    }

    /// Whether the threshold is a valid ratio.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (0.0..=1.0).contains(&self.model_threshold)
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::balanced()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold() {
        assert_eq!(MatchConfig::default().model_threshold, 0.80);
    }

    #[test]
    fn test_from_preset() {
        assert_eq!(
            MatchConfig::from_preset("STRICT").map(|c| c.model_threshold),
            Some(0.90)
        );
        assert_eq!(
            MatchConfig::from_preset("permissive").map(|c| c.model_threshold),
            Some(0.70)
        );
        assert!(MatchConfig::from_preset("bogus").is_none());
    }

    #[test]
    fn test_threshold_validation() {
        assert!(MatchConfig::balanced().is_valid());
        assert!(!MatchConfig::balanced().with_threshold(1.5).is_valid());
        assert!(!MatchConfig::balanced().with_threshold(-0.1).is_valid());
    }
}
