//! Historical observation records.

use serde::{Deserialize, Deserializer, Serialize};

use super::Season;

/// One historical temperature record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// City the record belongs to. Used only for upstream selection.
    pub city: String,
    /// Opaque timestamp, kept exactly as supplied.
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: String,
    /// Temperature in degrees Celsius.
    pub temperature: f64,
    pub season: Season,
}

impl Observation {
    /// Create a new observation.
    pub fn new(
        city: impl Into<String>,
        timestamp: impl Into<String>,
        temperature: f64,
        season: impl Into<Season>,
    ) -> Self {
        Self {
            city: city.into(),
            timestamp: timestamp.into(),
            temperature,
            season: season.into(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Text(String),
    Integer(i64),
    Float(f64),
}

/// Accept string or numeric timestamps without interpreting them.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawTimestamp::deserialize(deserializer)? {
        RawTimestamp::Text(text) => text,
        RawTimestamp::Integer(value) => value.to_string(),
        RawTimestamp::Float(value) => value.to_string(),
    })
}
