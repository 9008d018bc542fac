//! # seasonwatch-server
//!
//! REST API for seasonal temperature baselines and live anomaly checks.
//! Every request carries its full input; the only shared state is the
//! optional weather client.

use axum::{
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use weather::OpenWeatherMap;

pub mod error;
pub mod routes;

pub use error::ApiError;

/// Application state shared across handlers
#[derive(Clone, Default)]
pub struct AppState {
    /// Current-weather client; `None` when no API key is configured.
    pub weather: Option<Arc<OpenWeatherMap>>,
}

impl AppState {
    pub fn new(weather: Option<OpenWeatherMap>) -> Self {
        Self {
            weather: weather.map(Arc::new),
        }
    }
}

/// Liveness probe
async fn liveness() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Build the router with its middleware.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(liveness))
        .route("/api/v1/cities", post(routes::cities))
        .route("/api/v1/analyze", post(routes::analyze))
        .route("/api/v1/classify", post(routes::classify))
        .route("/api/v1/live", post(routes::live))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
