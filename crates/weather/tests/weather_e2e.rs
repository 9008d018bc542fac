//! End-to-end tests for the weather crate
//!
//! Runs the async client against a local stand-in for the provider.

use axum::{extract::Query, http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use weather::{OpenWeatherMap, WeatherConfigBuilder, WeatherError};

async fn current_weather(Query(params): Query<HashMap<String, String>>) -> (StatusCode, Json<Value>) {
    if params.get("appid").map(String::as_str) != Some("good-key") {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"cod": 401, "message": "Invalid API key."})),
        );
    }
    if params.get("units").map(String::as_str) != Some("metric") {
        return (StatusCode::BAD_REQUEST, Json(json!({"cod": "400", "message": "units"})));
    }
    match params.get("q").map(String::as_str) {
        Some("New York") => (
            StatusCode::OK,
            Json(json!({"cod": 200, "name": "New York", "main": {"temp": 31.5}})),
        ),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({"cod": "404", "message": "city not found"})),
        ),
    }
}

async fn spawn_provider() -> String {
    let app = Router::new().route("/data/2.5/weather", get(current_weather));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/data/2.5/weather", addr)
}

fn client(base_url: &str, key: &str) -> OpenWeatherMap {
    let config = WeatherConfigBuilder::new()
        .api_key(key)
        .base_url(base_url)
        .timeout_secs(5)
        .build()
        .unwrap();
    OpenWeatherMap::new(config).unwrap()
}

#[tokio::test]
async fn e2e_fetch_current_temperature() {
    let base_url = spawn_provider().await;
    let current = client(&base_url, "good-key").fetch("New York").await.unwrap();
    assert_eq!(current.city, "New York");
    assert_eq!(current.temperature, 31.5);
}

#[tokio::test]
async fn e2e_unknown_city() {
    let base_url = spawn_provider().await;
    let err = client(&base_url, "good-key").fetch("Atlantis").await.unwrap_err();
    assert_eq!(
        err,
        WeatherError::ApiError {
            code: "404".to_string(),
            message: "city not found".to_string()
        }
    );
}

#[tokio::test]
async fn e2e_rejected_key() {
    let base_url = spawn_provider().await;
    let err = client(&base_url, "bad-key").fetch("New York").await.unwrap_err();
    assert!(matches!(err, WeatherError::ApiError { ref code, .. } if code == "401"));
}

#[tokio::test]
async fn e2e_one_client_serves_repeated_lookups() {
    let base_url = spawn_provider().await;
    let client = client(&base_url, "good-key");
    for _ in 0..3 {
        let current = client.fetch("New York").await.unwrap();
        assert_eq!(current.temperature, 31.5);
    }
    let err = client.fetch("Atlantis").await.unwrap_err();
    assert!(matches!(err, WeatherError::ApiError { .. }));
}
