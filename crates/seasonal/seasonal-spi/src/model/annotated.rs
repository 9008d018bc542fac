//! Annotated observation type.

use serde::Serialize;

use super::Observation;

/// An observation extended with its season's statistics and anomaly flag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnnotatedObservation<'a> {
    #[serde(flatten)]
    pub observation: &'a Observation,
    pub mean_temperature: f64,
    pub std_temperature: Option<f64>,
    pub is_anomaly: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_flat() {
        let obs = Observation::new("Oslo", "2012-01-05", -20.0, "winter");
        let annotated = AnnotatedObservation {
            observation: &obs,
            mean_temperature: -4.0,
            std_temperature: Some(5.0),
            is_anomaly: true,
        };
        let json = serde_json::to_value(annotated).unwrap();
        assert_eq!(json["city"], "Oslo");
        assert_eq!(json["season"], "winter");
        assert_eq!(json["mean_temperature"], -4.0);
        assert_eq!(json["is_anomaly"], true);
    }
}
