//! CSV and JSON loaders.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use seasonal_spi::{Observation, Season};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{LoadError, Result};

/// Columns every input table must carry. Others are ignored.
pub const REQUIRED_COLUMNS: [&str; 4] = ["city", "timestamp", "temperature", "season"];

#[derive(Debug, Deserialize)]
struct CsvRow {
    city: String,
    timestamp: String,
    temperature: f64,
    season: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonDocument {
    Rows(Vec<Observation>),
    Wrapped { observations: Vec<Observation> },
}

/// Load observations, picking the format from the file extension.
pub fn load(path: &Path) -> Result<Vec<Observation>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("csv") => load_csv(path),
        Some("json") => load_json(path),
        other => Err(LoadError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

/// Load observations from a CSV file.
pub fn load_csv(path: &Path) -> Result<Vec<Observation>> {
    let file = File::open(path)?;
    let observations = read_csv(BufReader::new(file))?;
    debug!(path = %path.display(), rows = observations.len(), "loaded CSV");
    Ok(observations)
}

/// Read observations from CSV with a header row.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<Observation>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers().map_err(csv_error)?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn(column));
        }
    }

    let mut observations = Vec::new();
    for result in reader.records() {
        let record = result.map_err(csv_error)?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let row: CsvRow = record
            .deserialize(Some(&headers))
            .map_err(|e| LoadError::Csv {
                line,
                message: e.to_string(),
            })?;
        observations.push(validate(row.city, row.timestamp, row.temperature, &row.season, line)?);
    }

    finish(observations)
}

/// Load observations from a JSON file.
pub fn load_json(path: &Path) -> Result<Vec<Observation>> {
    let file = File::open(path)?;
    let observations = read_json(BufReader::new(file))?;
    debug!(path = %path.display(), rows = observations.len(), "loaded JSON");
    Ok(observations)
}

/// Read observations from a JSON array of rows, or an object with an
/// `observations` array.
pub fn read_json<R: Read>(reader: R) -> Result<Vec<Observation>> {
    let document: JsonDocument =
        serde_json::from_reader(reader).map_err(|e| LoadError::Json(e.to_string()))?;
    let rows = match document {
        JsonDocument::Rows(rows) => rows,
        JsonDocument::Wrapped { observations } => observations,
    };

    let observations = rows
        .into_iter()
        .enumerate()
        .map(|(index, o)| {
            let line = index as u64 + 1;
            validate(o.city, o.timestamp, o.temperature, o.season.as_str(), line)
        })
        .collect::<Result<Vec<_>>>()?;

    finish(observations)
}

fn validate(
    city: String,
    timestamp: String,
    temperature: f64,
    season: &str,
    line: u64,
) -> Result<Observation> {
    if !temperature.is_finite() {
        return Err(LoadError::InvalidTemperature {
            line,
            value: temperature,
        });
    }
    let season = season.trim();
    if season.is_empty() {
        return Err(LoadError::EmptySeason { line });
    }

    let season = Season::new(season);
    if !season.is_canonical() {
        warn!(line, %season, "season label outside winter/spring/summer/autumn");
    }
    Ok(Observation::new(city, timestamp, temperature, season))
}

fn finish(observations: Vec<Observation>) -> Result<Vec<Observation>> {
    if observations.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(observations)
}

fn csv_error(e: csv::Error) -> LoadError {
    let line = e.position().map(|p| p.line()).unwrap_or(0);
    LoadError::Csv {
        line,
        message: e.to_string(),
    }
}
