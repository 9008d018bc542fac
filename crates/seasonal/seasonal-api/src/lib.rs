//! Seasonal Baseline API
//!
//! Configuration types for baseline computation and live classification.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use seasonal_spi::{
    AnnotatedObservation, LiveReading, Observation, Result, Season, SeasonStats,
    SeasonalBaseline, SeasonalError, TemperatureSummary, Verdict,
};

/// Number of standard deviations either side of the mean that bound a normal
/// temperature. Fixed; not a tuning knob.
pub const SIGMA_THRESHOLD: f64 = 2.0;

// ============================================================================
// Classifier Configuration
// ============================================================================

/// What a live classification reports when the season has no variance estimate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UndefinedVariancePolicy {
    /// The undefined bound makes every comparison false, so the reading is
    /// normal.
    #[default]
    FoldToNormal,
    /// Report [`Verdict::Indeterminate`].
    Report,
}

/// Live classifier configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Handling of seasons with a single historical sample (default: fold to normal).
    #[serde(default)]
    pub undefined_variance: UndefinedVariancePolicy,
}

impl ClassifierConfig {
    pub fn new(undefined_variance: UndefinedVariancePolicy) -> Self {
        Self { undefined_variance }
    }

    /// Configuration that reports indeterminate readings distinctly.
    pub fn strict() -> Self {
        Self::new(UndefinedVariancePolicy::Report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_folds_to_normal() {
        let config = ClassifierConfig::default();
        assert_eq!(config.undefined_variance, UndefinedVariancePolicy::FoldToNormal);
    }

    #[test]
    fn test_strict_reports() {
        assert_eq!(
            ClassifierConfig::strict().undefined_variance,
            UndefinedVariancePolicy::Report
        );
    }

    #[test]
    fn test_deserialize_empty_object() {
        let config: ClassifierConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.undefined_variance, UndefinedVariancePolicy::FoldToNormal);
    }

    #[test]
    fn test_deserialize_report() {
        let config: ClassifierConfig =
            serde_json::from_str(r#"{"undefined_variance":"report"}"#).unwrap();
        assert_eq!(config.undefined_variance, UndefinedVariancePolicy::Report);
    }
}
