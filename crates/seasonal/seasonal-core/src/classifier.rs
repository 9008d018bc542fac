//! Live reading classification.

use seasonal_api::{ClassifierConfig, UndefinedVariancePolicy};
use seasonal_spi::{LiveClassifier, LiveReading, Result, SeasonalBaseline, SeasonalError, Verdict};
use tracing::debug;

use crate::rule::AnomalyBounds;

/// Classifies a single reading with the same rule used to annotate history.
#[derive(Debug, Clone, Default)]
pub struct LiveAnomalyClassifier {
    policy: UndefinedVariancePolicy,
}

impl LiveAnomalyClassifier {
    pub fn new(policy: UndefinedVariancePolicy) -> Self {
        Self { policy }
    }

    /// Create from configuration.
    pub fn from_config(config: ClassifierConfig) -> Self {
        Self::new(config.undefined_variance)
    }

    pub fn policy(&self) -> UndefinedVariancePolicy {
        self.policy
    }
}

impl LiveClassifier for LiveAnomalyClassifier {
    fn classify(&self, reading: &LiveReading, baseline: &SeasonalBaseline) -> Result<Verdict> {
        let stats = baseline
            .get(&reading.season)
            .ok_or_else(|| SeasonalError::SeasonNotFound {
                season: reading.season.clone(),
            })?;

        let verdict = match AnomalyBounds::from_stats(stats) {
            Some(bounds) if bounds.is_violated_by(reading.temperature) => Verdict::Anomalous,
            Some(_) => Verdict::Normal,
            None => match self.policy {
                UndefinedVariancePolicy::FoldToNormal => Verdict::Normal,
                UndefinedVariancePolicy::Report => Verdict::Indeterminate,
            },
        };

        debug!(
            season = %reading.season,
            temperature = reading.temperature,
            %verdict,
            "classified live reading"
        );
        Ok(verdict)
    }
}

/// Classify `reading` with the default policy.
pub fn classify(reading: &LiveReading, baseline: &SeasonalBaseline) -> Result<Verdict> {
    LiveAnomalyClassifier::default().classify(reading, baseline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use seasonal_spi::{Season, SeasonStats};

    fn baseline() -> SeasonalBaseline {
        [
            (Season::summer(), SeasonStats::new(20.0, Some(5.0), 92)),
            (Season::winter(), SeasonStats::new(-5.0, None, 1)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_anomalous_above_upper_bound() {
        let verdict = classify(&LiveReading::new(50.0, "summer"), &baseline()).unwrap();
        assert_eq!(verdict, Verdict::Anomalous);
    }

    #[test]
    fn test_anomalous_below_lower_bound() {
        let verdict = classify(&LiveReading::new(9.0, "summer"), &baseline()).unwrap();
        assert_eq!(verdict, Verdict::Anomalous);
    }

    #[test]
    fn test_normal_within_bounds() {
        let verdict = classify(&LiveReading::new(22.0, "summer"), &baseline()).unwrap();
        assert_eq!(verdict, Verdict::Normal);
    }

    #[test]
    fn test_season_not_found() {
        let err = classify(&LiveReading::new(15.0, "monsoon"), &baseline()).unwrap_err();
        assert!(matches!(err, SeasonalError::SeasonNotFound { ref season } if season.as_str() == "monsoon"));
    }

    #[test]
    fn test_undefined_std_folds_to_normal() {
        let verdict = classify(&LiveReading::new(40.0, "winter"), &baseline()).unwrap();
        assert_eq!(verdict, Verdict::Normal);
    }

    #[test]
    fn test_undefined_std_reported_when_strict() {
        let classifier = LiveAnomalyClassifier::from_config(ClassifierConfig::strict());
        let verdict = classifier
            .classify(&LiveReading::new(40.0, "winter"), &baseline())
            .unwrap();
        assert_eq!(verdict, Verdict::Indeterminate);
    }

    #[test]
    fn test_strict_policy_does_not_change_defined_seasons() {
        let classifier = LiveAnomalyClassifier::new(UndefinedVariancePolicy::Report);
        let verdict = classifier
            .classify(&LiveReading::new(50.0, "summer"), &baseline())
            .unwrap();
        assert_eq!(verdict, Verdict::Anomalous);
    }
}
