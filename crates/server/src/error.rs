//! API error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use seasonal::SeasonalError;
use thiserror::Error;
use weather::WeatherError;

/// Errors a handler can answer with.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Seasonal(#[from] SeasonalError),

    #[error("Weather lookup failed: {0}")]
    Weather(#[from] WeatherError),

    #[error("Live weather is unavailable: OPENWEATHER_API_KEY is not configured")]
    WeatherUnavailable,

    #[error("{0}")]
    BadRequest(String),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Seasonal(SeasonalError::SeasonNotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Seasonal(SeasonalError::EmptyObservations) => StatusCode::BAD_REQUEST,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Weather(_) => StatusCode::BAD_GATEWAY,
            ApiError::WeatherUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}
