//! Seasonal baseline computation.

use std::collections::BTreeMap;

use seasonal_spi::{BaselineComputer, Observation, Season, SeasonStats, SeasonalBaseline};
use tracing::debug;

use crate::annotate::Annotated;

// ============================================================================
// Seasonal Baseline Computer
// ============================================================================

/// Groups one city's observations by season and reduces each group to its
/// mean and sample standard deviation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeasonalBaselineComputer;

impl SeasonalBaselineComputer {
    pub fn new() -> Self {
        Self
    }

    /// Annotate `observations` with the statistics of their season.
    ///
    /// See [`Annotated::new`].
    pub fn annotate<'a>(
        &self,
        observations: &'a [Observation],
        baseline: &'a SeasonalBaseline,
    ) -> seasonal_spi::Result<Annotated<'a>> {
        Annotated::new(observations, baseline)
    }
}

impl BaselineComputer for SeasonalBaselineComputer {
    fn compute(&self, observations: &[Observation]) -> SeasonalBaseline {
        let mut groups: BTreeMap<&Season, Vec<f64>> = BTreeMap::new();
        for observation in observations {
            groups
                .entry(&observation.season)
                .or_default()
                .push(observation.temperature);
        }

        let baseline: SeasonalBaseline = groups
            .into_iter()
            .map(|(season, temperatures)| (season.clone(), season_stats(&temperatures)))
            .collect();

        debug!(
            observations = observations.len(),
            seasons = baseline.len(),
            "computed seasonal baseline"
        );
        baseline
    }
}

/// Compute the seasonal baseline of one city's observations.
pub fn compute_baseline(observations: &[Observation]) -> SeasonalBaseline {
    SeasonalBaselineComputer.compute(observations)
}

fn season_stats(temperatures: &[f64]) -> SeasonStats {
    let mean = mean(temperatures);
    SeasonStats::new(mean, sample_std(temperatures, mean), temperatures.len())
}

/// Arithmetic mean, shifted by the first value so constant groups come out exact.
pub(crate) fn mean(values: &[f64]) -> f64 {
    let Some(&shift) = values.first() else {
        return f64::NAN;
    };
    shift + values.iter().map(|x| x - shift).sum::<f64>() / values.len() as f64
}

/// Bessel-corrected standard deviation; undefined below two samples.
pub(crate) fn sample_std(values: &[f64], mean: f64) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let sum_sq = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>();
    Some((sum_sq / (values.len() - 1) as f64).sqrt())
}
