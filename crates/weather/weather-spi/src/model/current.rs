//! Current weather type.

use serde::{Deserialize, Serialize};

/// Validated current conditions for a city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub city: String,
    /// Temperature in degrees Celsius.
    pub temperature: f64,
}

impl CurrentWeather {
    pub fn new(city: impl Into<String>, temperature: f64) -> Self {
        Self {
            city: city.into(),
            temperature,
        }
    }
}
