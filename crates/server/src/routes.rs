//! API route handlers

use axum::{extract::State, Json};
use seasonal::{
    annotate, compute_baseline, describe, LiveAnomalyClassifier, LiveClassifier, LiveReading,
    Observation, Season, SeasonalBaseline, TemperatureSummary, UndefinedVariancePolicy, Verdict,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{ApiError, AppState};

#[derive(Debug, Deserialize)]
pub struct CitiesRequest {
    pub observations: Vec<Observation>,
}

#[derive(Debug, Serialize)]
pub struct CitiesResponse {
    pub cities: Vec<String>,
}

pub async fn cities(Json(req): Json<CitiesRequest>) -> Json<CitiesResponse> {
    Json(CitiesResponse {
        cities: dataset::cities(&req.observations),
    })
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub observations: Vec<Observation>,
    /// City to analyze; required when the rows span more than one city
    #[serde(default)]
    pub city: Option<String>,
}

#[derive(Serialize)]
struct AnalyzeResponse<'a> {
    summary: TemperatureSummary,
    baseline: &'a SeasonalBaseline,
    rows: Vec<seasonal::AnnotatedObservation<'a>>,
    anomaly_count: usize,
}

pub async fn analyze(Json(req): Json<AnalyzeRequest>) -> Result<Json<Value>, ApiError> {
    let observations = match &req.city {
        Some(city) => {
            let rows = dataset::for_city(&req.observations, city);
            if rows.is_empty() {
                return Err(ApiError::BadRequest(format!(
                    "no observations for city '{}'",
                    city
                )));
            }
            rows
        }
        None => {
            let cities = dataset::cities(&req.observations);
            if cities.len() > 1 {
                return Err(ApiError::BadRequest(format!(
                    "observations span several cities ({}); select one with 'city'",
                    cities.join(", ")
                )));
            }
            req.observations
        }
    };

    let summary = describe(&observations)?;
    let baseline = compute_baseline(&observations);
    let annotated = annotate(&observations, &baseline)?;

    let response = AnalyzeResponse {
        summary,
        baseline: &baseline,
        rows: annotated.iter().collect(),
        anomaly_count: annotated.anomaly_count(),
    };
    tracing::info!(
        rows = response.rows.len(),
        anomalies = response.anomaly_count,
        "analyzed observations"
    );
    Ok(Json(serde_json::to_value(&response)?))
}

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub reading: LiveReading,
    pub baseline: SeasonalBaseline,
    /// Report single-sample seasons as indeterminate
    #[serde(default)]
    pub strict: bool,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    pub season: Season,
    pub temperature: f64,
    pub verdict: Verdict,
}

fn classifier(strict: bool) -> LiveAnomalyClassifier {
    if strict {
        LiveAnomalyClassifier::new(UndefinedVariancePolicy::Report)
    } else {
        LiveAnomalyClassifier::new(UndefinedVariancePolicy::FoldToNormal)
    }
}

pub async fn classify(Json(req): Json<ClassifyRequest>) -> Result<Json<ClassifyResponse>, ApiError> {
    let verdict = classifier(req.strict).classify(&req.reading, &req.baseline)?;
    Ok(Json(ClassifyResponse {
        city: None,
        season: req.reading.season,
        temperature: req.reading.temperature,
        verdict,
    }))
}

#[derive(Debug, Deserialize)]
pub struct LiveRequest {
    pub city: String,
    pub season: Season,
    pub baseline: SeasonalBaseline,
    #[serde(default)]
    pub strict: bool,
}

pub async fn live(
    State(state): State<AppState>,
    Json(req): Json<LiveRequest>,
) -> Result<Json<ClassifyResponse>, ApiError> {
    // Unknown seasons are rejected before spending a provider call.
    if !req.baseline.contains(&req.season) {
        return Err(ApiError::from(seasonal::SeasonalError::SeasonNotFound {
            season: req.season,
        }));
    }
    let client = state.weather.as_ref().ok_or(ApiError::WeatherUnavailable)?;
    let current = client.fetch(&req.city).await?;

    let reading = LiveReading::new(current.temperature, req.season);
    let verdict = classifier(req.strict).classify(&reading, &req.baseline)?;
    Ok(Json(ClassifyResponse {
        city: Some(current.city),
        season: reading.season,
        temperature: reading.temperature,
        verdict,
    }))
}
