//! OpenWeatherMap current-weather client
//!
//! Fetches the current temperature of a city in metric units and validates
//! the response document before handing back a typed reading.
//!
//! # Example
//!
//! ```rust,no_run
//! use weather_api::WeatherConfig;
//! use weather_core::OpenWeatherMap;
//!
//! let client = OpenWeatherMap::new(WeatherConfig::new("api-key")).unwrap();
//! let current = client.fetch_blocking("Berlin").unwrap();
//! println!("{} is at {}°C", current.city, current.temperature);
//! ```

use serde_json::Value;
use weather_api::WeatherConfig;
use weather_spi::{CurrentWeather, Result, WeatherError};

#[cfg(feature = "fetch")]
use std::sync::{Arc, OnceLock};
#[cfg(feature = "fetch")]
use std::time::Duration;
#[cfg(feature = "fetch")]
use tracing::info;
#[cfg(feature = "fetch")]
use weather_spi::WeatherSource;

/// Message used when an error document carries none.
pub const DEFAULT_ERROR_MESSAGE: &str = "failed to fetch weather data";

/// Status code that marks a successful response.
const SUCCESS_CODE: i64 = 200;

/// OpenWeatherMap client
///
/// The async HTTP client is built once in [`OpenWeatherMap::new`] and shared
/// by clones. The blocking client is built lazily on the first blocking
/// fetch and must not be created or dropped inside an async runtime.
#[derive(Debug, Clone)]
pub struct OpenWeatherMap {
    config: WeatherConfig,
    #[cfg(feature = "fetch")]
    http: reqwest::Client,
    #[cfg(feature = "fetch")]
    blocking: Arc<OnceLock<reqwest::blocking::Client>>,
}

impl OpenWeatherMap {
    /// Create a client. The API key must be non-empty.
    pub fn new(config: WeatherConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(WeatherError::ConfigError("API key is empty".to_string()));
        }

        #[cfg(feature = "fetch")]
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConfigError(e.to_string()))?;

        Ok(Self {
            config,
            #[cfg(feature = "fetch")]
            http,
            #[cfg(feature = "fetch")]
            blocking: Arc::new(OnceLock::new()),
        })
    }

    pub fn config(&self) -> &WeatherConfig {
        &self.config
    }

    /// Query parameters for a city lookup
    #[cfg_attr(not(feature = "fetch"), allow(dead_code))]
    fn query<'a>(&'a self, city: &'a str) -> [(&'static str, &'a str); 3] {
        [
            ("q", city),
            ("appid", self.config.api_key.as_str()),
            ("units", "metric"),
        ]
    }

    /// Fetch the current weather (async)
    #[cfg(feature = "fetch")]
    pub async fn fetch(&self, city: &str) -> Result<CurrentWeather> {
        info!(city, "fetching current weather");

        let response = self
            .http
            .get(&self.config.base_url)
            .query(&self.query(city))
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        // Error documents arrive with non-2xx statuses; the body carries the code.
        let text = response
            .text()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        parse_current_weather(city, &text)
    }

    /// Fetch the current weather (blocking)
    #[cfg(feature = "fetch")]
    pub fn fetch_blocking(&self, city: &str) -> Result<CurrentWeather> {
        info!(city, "fetching current weather");

        let response = self
            .blocking_client()?
            .get(&self.config.base_url)
            .query(&self.query(city))
            .send()
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        let text = response
            .text()
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        parse_current_weather(city, &text)
    }

    #[cfg(feature = "fetch")]
    fn blocking_client(&self) -> Result<&reqwest::blocking::Client> {
        if let Some(client) = self.blocking.get() {
            return Ok(client);
        }
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConfigError(e.to_string()))?;
        Ok(self.blocking.get_or_init(|| client))
    }
}

#[cfg(feature = "fetch")]
impl WeatherSource for OpenWeatherMap {
    fn name(&self) -> &str {
        "openweathermap"
    }

    fn fetch_current_sync(&self, city: &str) -> Result<CurrentWeather> {
        self.fetch_blocking(city)
    }
}

/// Parse and validate a current-weather response body.
///
/// Only a numeric `cod` of 200 counts as success; anything else becomes
/// [`WeatherError::ApiError`] with the document's `message`.
pub fn parse_current_weather(city: &str, body: &str) -> Result<CurrentWeather> {
    let document: Value =
        serde_json::from_str(body).map_err(|e| WeatherError::ParseError(e.to_string()))?;

    let code = document
        .get("cod")
        .ok_or_else(|| WeatherError::MissingField("cod".to_string()))?;

    if code.as_i64() != Some(SUCCESS_CODE) {
        let message = document
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_ERROR_MESSAGE);
        return Err(WeatherError::ApiError {
            code: status_text(code),
            message: message.to_string(),
        });
    }

    let temperature = document
        .pointer("/main/temp")
        .and_then(Value::as_f64)
        .ok_or_else(|| WeatherError::MissingField("main.temp".to_string()))?;

    Ok(CurrentWeather::new(city, temperature))
}

fn status_text(code: &Value) -> String {
    match code {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
