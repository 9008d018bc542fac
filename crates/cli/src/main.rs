//! # seasonwatch
//!
//! Command-line interface for seasonal temperature baselines and anomaly
//! checks.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use seasonal::{
    annotate, compute_baseline, describe, LiveAnomalyClassifier, LiveClassifier, LiveReading,
    Observation, Season, SeasonalBaseline, UndefinedVariancePolicy, Verdict,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::info;
use weather::{OpenWeatherMap, WeatherConfig};

#[derive(Parser)]
#[command(name = "seasonwatch")]
#[command(about = "Seasonal temperature anomaly detection", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the cities present in a dataset
    Cities {
        /// Input file (CSV or JSON)
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Descriptive statistics of one city's temperatures
    Describe {
        /// Input file (CSV or JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// City to analyze
        #[arg(short, long)]
        city: String,
    },

    /// Compute the per-season baseline of one city
    Baseline {
        /// Input file (CSV or JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// City to analyze
        #[arg(short, long)]
        city: String,

        /// Output file for the baseline (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Flag historical readings outside their season's band
    Detect {
        /// Input file (CSV or JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// City to analyze
        #[arg(short, long)]
        city: String,

        /// Output file for every annotated row (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Classify a live reading against the city's baseline
    Check {
        /// Input file (CSV or JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// City to analyze
        #[arg(short, long)]
        city: String,

        /// Season of the live reading (winter, spring, summer, autumn)
        #[arg(short, long)]
        season: String,

        /// Temperature to classify; fetched from OpenWeatherMap when omitted
        #[arg(short, long, allow_negative_numbers = true)]
        temperature: Option<f64>,

        /// OpenWeatherMap API key
        #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// Report single-sample seasons as indeterminate instead of normal
        #[arg(long)]
        strict: bool,
    },
}

/// Load a dataset and keep one city's rows
fn load_city(path: &Path, city: &str) -> Result<Vec<Observation>> {
    let all = dataset::load(path).with_context(|| format!("failed to load {}", path.display()))?;
    let rows = dataset::for_city(&all, city);
    if rows.is_empty() {
        bail!(
            "no observations for city '{}' (available: {})",
            city,
            dataset::cities(&all).join(", ")
        );
    }
    info!(city, rows = rows.len(), "selected city");
    Ok(rows)
}

fn write_json<T: serde::Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), value)?;
    println!("\nResults written to {:?}", path);
    Ok(())
}

fn format_std(std: Option<f64>) -> String {
    match std {
        Some(std) => format!("{:.4}", std),
        None => "undefined".to_string(),
    }
}

fn run_cities(input: PathBuf) -> Result<()> {
    let all = dataset::load(&input).with_context(|| format!("failed to load {}", input.display()))?;
    for city in dataset::cities(&all) {
        println!("{}", city);
    }
    Ok(())
}

fn run_describe(input: PathBuf, city: String) -> Result<()> {
    let rows = load_city(&input, &city)?;
    let summary = describe(&rows)?;

    println!("Temperature summary for {}", city);
    println!("  count  {}", summary.count);
    println!("  mean   {:.4}", summary.mean);
    println!("  std    {}", format_std(summary.std));
    println!("  min    {:.4}", summary.min);
    println!("  25%    {:.4}", summary.p25);
    println!("  50%    {:.4}", summary.median);
    println!("  75%    {:.4}", summary.p75);
    println!("  max    {:.4}", summary.max);
    Ok(())
}

fn print_baseline(baseline: &SeasonalBaseline) {
    println!("{:<10} {:>6} {:>10} {:>10}", "season", "count", "mean", "std");
    for (season, stats) in baseline {
        println!(
            "{:<10} {:>6} {:>10.4} {:>10}",
            season,
            stats.count,
            stats.mean,
            format_std(stats.std)
        );
    }
}

fn run_baseline(input: PathBuf, city: String, output: Option<PathBuf>) -> Result<()> {
    let rows = load_city(&input, &city)?;
    let baseline = compute_baseline(&rows);

    println!("Seasonal baseline for {} ({} readings)\n", city, rows.len());
    print_baseline(&baseline);

    if let Some(path) = output {
        write_json(&path, &baseline)?;
    }
    Ok(())
}

fn run_detect(input: PathBuf, city: String, output: Option<PathBuf>) -> Result<()> {
    let rows = load_city(&input, &city)?;
    let baseline = compute_baseline(&rows);
    let annotated = annotate(&rows, &baseline)?;

    println!("Readings: {}", annotated.len());
    println!("Anomalies found: {}", annotated.anomaly_count());

    let mut anomalies = annotated.anomalies().peekable();
    if anomalies.peek().is_some() {
        println!("\nAnomaly details:");
        for row in anomalies {
            println!(
                "  {} [{}]: {:.2} (mean={:.2}, std={})",
                row.observation.timestamp,
                row.observation.season,
                row.observation.temperature,
                row.mean_temperature,
                format_std(row.std_temperature)
            );
        }
    }

    if let Some(path) = output {
        let rows: Vec<_> = annotated.iter().collect();
        write_json(&path, &rows)?;
    }
    Ok(())
}

fn fetch_temperature(city: &str, api_key: Option<String>) -> Result<f64> {
    let Some(api_key) = api_key else {
        bail!("either --temperature or an OpenWeatherMap API key (--api-key / OPENWEATHER_API_KEY) is required");
    };
    let config = WeatherConfig::from_lookup(|key| match key {
        "OPENWEATHER_API_KEY" => Some(api_key.clone()),
        other => std::env::var(other).ok(),
    })?;
    let client = OpenWeatherMap::new(config)?;
    let current = client.fetch_blocking(city)?;
    println!("Current temperature in {}: {:.2}°C", current.city, current.temperature);
    Ok(current.temperature)
}

fn run_check(
    input: PathBuf,
    city: String,
    season: String,
    temperature: Option<f64>,
    api_key: Option<String>,
    strict: bool,
) -> Result<()> {
    let rows = load_city(&input, &city)?;
    let baseline = compute_baseline(&rows);

    let season = Season::new(season.trim().to_ascii_lowercase());
    let temperature = match temperature {
        Some(temperature) => temperature,
        None => fetch_temperature(&city, api_key)?,
    };

    let policy = if strict {
        UndefinedVariancePolicy::Report
    } else {
        UndefinedVariancePolicy::FoldToNormal
    };
    let classifier = LiveAnomalyClassifier::new(policy);
    let reading = LiveReading::new(temperature, season);
    let verdict = classifier.classify(&reading, &baseline)?;

    match verdict {
        Verdict::Normal => println!("The current temperature is normal."),
        Verdict::Anomalous => println!("The current temperature is an anomaly!"),
        Verdict::Indeterminate => println!(
            "The current temperature cannot be judged: {} has a single historical reading.",
            reading.season
        ),
    }
    Ok(())
}

fn main() {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Cities { input } => run_cities(input),
        Commands::Describe { input, city } => run_describe(input, city),
        Commands::Baseline {
            input,
            city,
            output,
        } => run_baseline(input, city, output),
        Commands::Detect {
            input,
            city,
            output,
        } => run_detect(input, city, output),
        Commands::Check {
            input,
            city,
            season,
            temperature,
            api_key,
            strict,
        } => run_check(input, city, season, temperature, api_key, strict),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn dataset_file() -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "city,timestamp,temperature,season").unwrap();
        for (i, t) in [-2.0, 0.0, 2.0, -1.0, 1.0].iter().enumerate() {
            writeln!(file, "Oslo,2020-01-0{},{},winter", i + 1, t).unwrap();
        }
        writeln!(file, "Oslo,2020-07-01,18.0,summer").unwrap();
        writeln!(file, "Rome,2020-07-01,31.0,summer").unwrap();
        file
    }

    #[test]
    fn test_cli_parses_check() {
        let cli = Cli::try_parse_from([
            "seasonwatch", "check", "-i", "d.csv", "-c", "Oslo", "-s", "winter", "-t", "-7.5",
            "--strict",
        ])
        .unwrap();
        match cli.command {
            Commands::Check {
                temperature, strict, ..
            } => {
                assert_eq!(temperature, Some(-7.5));
                assert!(strict);
            }
            _ => panic!("expected check"),
        }
    }

    #[test]
    fn test_load_city_filters_rows() {
        let file = dataset_file();
        let rows = load_city(file.path(), "Oslo").unwrap();
        assert_eq!(rows.len(), 6);
        assert!(load_city(file.path(), "Lima").is_err());
    }

    #[test]
    fn test_check_normal_and_anomalous() {
        let file = dataset_file();
        let path = file.path().to_path_buf();
        assert!(run_check(path.clone(), "Oslo".into(), "Winter".into(), Some(0.5), None, false).is_ok());
        assert!(run_check(path, "Oslo".into(), "winter".into(), Some(-20.0), None, false).is_ok());
    }

    #[test]
    fn test_check_unknown_season_fails() {
        let file = dataset_file();
        let err = run_check(file.path().to_path_buf(), "Oslo".into(), "monsoon".into(), Some(1.0), None, false)
            .unwrap_err();
        assert!(err.to_string().contains("monsoon"));
    }

    #[test]
    fn test_check_without_temperature_or_key_fails() {
        let file = dataset_file();
        let err = run_check(file.path().to_path_buf(), "Oslo".into(), "winter".into(), None, None, false)
            .unwrap_err();
        assert!(err.to_string().contains("--temperature"));
    }

    #[test]
    fn test_detect_writes_every_row() {
        let file = dataset_file();
        let out = Builder::new().suffix(".json").tempfile().unwrap();
        run_detect(file.path().to_path_buf(), "Oslo".into(), Some(out.path().to_path_buf())).unwrap();

        let written: serde_json::Value =
            serde_json::from_reader(File::open(out.path()).unwrap()).unwrap();
        let rows = written.as_array().unwrap();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[5]["is_anomaly"], false);
        assert!(rows[5]["std_temperature"].is_null());
    }

    #[test]
    fn test_baseline_writes_json() {
        let file = dataset_file();
        let out = Builder::new().suffix(".json").tempfile().unwrap();
        run_baseline(file.path().to_path_buf(), "Oslo".into(), Some(out.path().to_path_buf())).unwrap();

        let baseline: SeasonalBaseline =
            serde_json::from_reader(File::open(out.path()).unwrap()).unwrap();
        assert_eq!(baseline.len(), 2);
        assert_eq!(baseline.get(&Season::winter()).unwrap().mean, 0.0);
    }
}
