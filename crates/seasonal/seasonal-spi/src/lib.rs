//! Seasonal Baseline Service Provider Interface
//!
//! Defines the data model, error type and traits for seasonal baselines
//! and live anomaly classification.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{BaselineComputer, LiveClassifier};
pub use error::{Result, SeasonalError};
pub use model::{
    AnnotatedObservation, LiveReading, Observation, Season,
    SeasonStats, SeasonalBaseline, TemperatureSummary, Verdict,
};
