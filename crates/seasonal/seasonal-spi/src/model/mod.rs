//! Data models for seasonal baselines.
//!
//! This module contains the values produced and consumed by baseline
//! computation and live classification.

mod annotated;
mod baseline;
mod observation;
mod reading;
mod season;
mod summary;

pub use annotated::AnnotatedObservation;
pub use baseline::{SeasonStats, SeasonalBaseline};
pub use observation::Observation;
pub use reading::{LiveReading, Verdict};
pub use season::Season;
pub use summary::TemperatureSummary;
