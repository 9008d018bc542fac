//! Descriptive statistics of a temperature series.

use serde::{Deserialize, Serialize};

/// Count, moments and quartiles of one city's temperatures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureSummary {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation, `None` for a single observation.
    pub std: Option<f64>,
    pub min: f64,
    #[serde(rename = "25%")]
    pub p25: f64,
    #[serde(rename = "50%")]
    pub median: f64,
    #[serde(rename = "75%")]
    pub p75: f64,
    pub max: f64,
}
