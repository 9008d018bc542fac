//! Live classifier trait definition.

use crate::error::Result;
use crate::model::{LiveReading, SeasonalBaseline, Verdict};

/// Classifies a single exogenous reading against a previously computed baseline.
pub trait LiveClassifier: Send + Sync {
    /// Classify `reading` using the baseline entry for its season.
    ///
    /// Fails with [`SeasonNotFound`](crate::SeasonalError::SeasonNotFound)
    /// when the baseline has no entry for the reading's season.
    fn classify(&self, reading: &LiveReading, baseline: &SeasonalBaseline) -> Result<Verdict>;
}
