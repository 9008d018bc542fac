//! Weather source configuration types.

use serde::{Deserialize, Serialize};
use weather_spi::{Result, WeatherError};

/// OpenWeatherMap current-weather endpoint.
pub const DEFAULT_BASE_URL: &str = "http://api.openweathermap.org/data/2.5/weather";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the current-weather client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Provider API key
    pub api_key: String,
    /// Current-weather endpoint
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl WeatherConfig {
    /// Create a configuration for the default endpoint.
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            ..Self::default()
        }
    }

    /// Load from `OPENWEATHER_API_KEY`, `OPENWEATHER_BASE_URL` and
    /// `OPENWEATHER_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("OPENWEATHER_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| WeatherError::ConfigError("OPENWEATHER_API_KEY is not set".to_string()))?;

        let mut builder = WeatherConfigBuilder::new().api_key(&api_key);
        if let Some(url) = lookup("OPENWEATHER_BASE_URL") {
            builder = builder.base_url(&url);
        }
        if let Some(raw) = lookup("OPENWEATHER_TIMEOUT_SECS") {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                WeatherError::ConfigError(format!("invalid OPENWEATHER_TIMEOUT_SECS: {}", raw))
            })?;
            builder = builder.timeout_secs(secs);
        }

        builder
            .build()
            .map_err(|reason| WeatherError::ConfigError(reason.to_string()))
    }
}

/// Builder for WeatherConfig.
#[derive(Debug, Default)]
pub struct WeatherConfigBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}

impl WeatherConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(api_key.to_string());
        self
    }

    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = Some(base_url.to_string());
        self
    }

    pub fn timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> std::result::Result<WeatherConfig, &'static str> {
        let api_key = self.api_key.ok_or("api_key is required")?;
        if api_key.trim().is_empty() {
            return Err("api_key must not be empty");
        }
        let timeout_secs = self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err("timeout_secs must be positive");
        }

        Ok(WeatherConfig {
            api_key,
            base_url: self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout_secs,
        })
    }
}
