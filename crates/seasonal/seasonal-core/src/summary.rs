//! Descriptive statistics for a city's temperature series.

use seasonal_spi::{Observation, Result, SeasonalError, TemperatureSummary};

use crate::baseline::{mean, sample_std};

/// Count, mean, sample std, min, quartiles and max of the temperatures.
///
/// Quartiles interpolate linearly between the closest ranks.
pub fn describe(observations: &[Observation]) -> Result<TemperatureSummary> {
    if observations.is_empty() {
        return Err(SeasonalError::EmptyObservations);
    }

    let mut sorted: Vec<f64> = observations.iter().map(|o| o.temperature).collect();
    sorted.sort_by(f64::total_cmp);

    let mean = mean(&sorted);
    Ok(TemperatureSummary {
        count: sorted.len(),
        mean,
        std: sample_std(&sorted, mean),
        min: sorted[0],
        p25: quantile(&sorted, 0.25),
        median: quantile(&sorted, 0.5),
        p75: quantile(&sorted, 0.75),
        max: sorted[sorted.len() - 1],
    })
}

/// Linear-interpolated quantile of non-empty sorted data.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> Vec<Observation> {
        values
            .iter()
            .enumerate()
            .map(|(i, &t)| Observation::new("Rome", i.to_string(), t, "spring"))
            .collect()
    }

    #[test]
    fn test_describe_basic() {
        let summary = describe(&series(&[4.0, 1.0, 3.0, 2.0, 5.0])).unwrap();
        assert_eq!(summary.count, 5);
        assert_eq!(summary.mean, 3.0);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.p25, 2.0);
        assert_eq!(summary.median, 3.0);
        assert_eq!(summary.p75, 4.0);
        assert_eq!(summary.max, 5.0);
        assert!((summary.std.unwrap() - 2.5_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_describe_interpolates() {
        let summary = describe(&series(&[1.0, 2.0, 3.0, 4.0])).unwrap();
        assert_eq!(summary.p25, 1.75);
        assert_eq!(summary.median, 2.5);
        assert_eq!(summary.p75, 3.25);
    }

    #[test]
    fn test_describe_single_value() {
        let summary = describe(&series(&[7.5])).unwrap();
        assert_eq!(summary.count, 1);
        assert_eq!(summary.std, None);
        assert_eq!(summary.min, 7.5);
        assert_eq!(summary.median, 7.5);
        assert_eq!(summary.max, 7.5);
    }

    #[test]
    fn test_describe_empty() {
        assert_eq!(describe(&[]).unwrap_err(), SeasonalError::EmptyObservations);
    }
}
