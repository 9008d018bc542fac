//! Weather source trait definition.

use crate::error::Result;
use crate::model::CurrentWeather;

/// Trait for providers of current weather conditions.
///
/// Implementations validate the provider's response and only ever hand back
/// a typed reading or an explicit error.
pub trait WeatherSource: Send + Sync {
    /// Weather source name.
    fn name(&self) -> &str;

    /// Fetch the current weather for `city` synchronously.
    fn fetch_current_sync(&self, city: &str) -> Result<CurrentWeather>;
}

// Async fetching lives on the implementations in weather-core
