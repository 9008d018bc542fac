//! Lazy annotation of observations with their season's statistics.

use std::iter::FusedIterator;
use std::slice;

use seasonal_spi::{
    AnnotatedObservation, Observation, Result, SeasonalBaseline, SeasonalError,
};

use crate::rule::is_anomalous;

/// Restartable, order-preserving view of observations annotated against a
/// baseline.
///
/// Nothing is computed until iteration; every call to [`iter`](Self::iter)
/// starts again from the first row.
#[derive(Debug, Clone, Copy)]
pub struct Annotated<'a> {
    observations: &'a [Observation],
    baseline: &'a SeasonalBaseline,
}

impl<'a> Annotated<'a> {
    /// Pair `observations` with `baseline`.
    ///
    /// Every observation's season must have a baseline entry; the first one
    /// that does not is reported as [`SeasonalError::SeasonNotFound`].
    pub fn new(observations: &'a [Observation], baseline: &'a SeasonalBaseline) -> Result<Self> {
        if let Some(orphan) = observations
            .iter()
            .find(|observation| !baseline.contains(&observation.season))
        {
            return Err(SeasonalError::SeasonNotFound {
                season: orphan.season.clone(),
            });
        }
        Ok(Self {
            observations,
            baseline,
        })
    }

    pub fn iter(&self) -> AnnotatedIter<'a> {
        AnnotatedIter {
            rows: self.observations.iter(),
            baseline: self.baseline,
        }
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Rows flagged anomalous, in input order.
    pub fn anomalies(&self) -> impl Iterator<Item = AnnotatedObservation<'a>> + 'a {
        self.iter().filter(|row| row.is_anomaly)
    }

    pub fn anomaly_count(&self) -> usize {
        self.anomalies().count()
    }
}

impl<'a> IntoIterator for Annotated<'a> {
    type Item = AnnotatedObservation<'a>;
    type IntoIter = AnnotatedIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &Annotated<'a> {
    type Item = AnnotatedObservation<'a>;
    type IntoIter = AnnotatedIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over [`Annotated`] rows.
#[derive(Debug, Clone)]
pub struct AnnotatedIter<'a> {
    rows: slice::Iter<'a, Observation>,
    baseline: &'a SeasonalBaseline,
}

impl<'a> Iterator for AnnotatedIter<'a> {
    type Item = AnnotatedObservation<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let observation = self.rows.next()?;
        // Resolved for every row when the view was built.
        let stats = self.baseline.get(&observation.season)?;
        Some(AnnotatedObservation {
            observation,
            mean_temperature: stats.mean,
            std_temperature: stats.std,
            is_anomaly: is_anomalous(observation.temperature, stats),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}

impl ExactSizeIterator for AnnotatedIter<'_> {}

impl FusedIterator for AnnotatedIter<'_> {}

/// Annotate `observations` against `baseline`.
pub fn annotate<'a>(
    observations: &'a [Observation],
    baseline: &'a SeasonalBaseline,
) -> Result<Annotated<'a>> {
    Annotated::new(observations, baseline)
}
