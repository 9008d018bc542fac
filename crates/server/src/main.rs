//! # seasonwatch-server
//!
//! REST API server for seasonal temperature anomaly detection.

use anyhow::Context;
use seasonwatch_server::{app, AppState};
use std::env;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use weather::{OpenWeatherMap, WeatherConfig};

fn weather_client() -> Option<OpenWeatherMap> {
    match WeatherConfig::from_env().and_then(OpenWeatherMap::new) {
        Ok(client) => Some(client),
        Err(e) => {
            tracing::warn!("live weather disabled: {}", e);
            None
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seasonwatch_server=info,tower_http=info".into()),
        )
        .init();

    let state = AppState::new(weather_client());

    // Server configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .context("PORT must be a valid number")?;
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .context("Invalid HOST:PORT configuration")?;

    tracing::info!("seasonwatch-server v{} listening on {}", env!("CARGO_PKG_VERSION"), addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app(state)).await?;
    Ok(())
}
