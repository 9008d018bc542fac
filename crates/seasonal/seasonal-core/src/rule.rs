//! The two-sided anomaly rule shared by row annotation and live classification.

use seasonal_api::SIGMA_THRESHOLD;
use seasonal_spi::SeasonStats;

/// Closed interval `[mean - 2·std, mean + 2·std]` of normal temperatures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnomalyBounds {
    pub lower: f64,
    pub upper: f64,
}

impl AnomalyBounds {
    /// Bounds for a season, or `None` when its std is undefined.
    pub fn from_stats(stats: &SeasonStats) -> Option<Self> {
        stats.std.map(|std| Self {
            lower: stats.mean - SIGMA_THRESHOLD * std,
            upper: stats.mean + SIGMA_THRESHOLD * std,
        })
    }

    /// Strictly below the lower bound or strictly above the upper one.
    pub fn is_violated_by(&self, temperature: f64) -> bool {
        temperature < self.lower || temperature > self.upper
    }
}

/// Whether `temperature` is anomalous for a season.
///
/// An undefined std yields no bounds, and a missing bound is never violated.
pub fn is_anomalous(temperature: f64, stats: &SeasonStats) -> bool {
    AnomalyBounds::from_stats(stats).is_some_and(|bounds| bounds.is_violated_by(temperature))
}
