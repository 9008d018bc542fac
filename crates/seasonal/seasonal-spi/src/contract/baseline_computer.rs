//! Baseline computer trait definition.

use crate::model::{Observation, SeasonalBaseline};

/// Computes a per-season baseline from one city's observations.
///
/// Implementations must be pure: the same input always yields an identical
/// baseline, and every season present in the input gets exactly one entry.
pub trait BaselineComputer: Send + Sync {
    /// Group `observations` by season and reduce each group to its statistics.
    fn compute(&self, observations: &[Observation]) -> SeasonalBaseline;
}
