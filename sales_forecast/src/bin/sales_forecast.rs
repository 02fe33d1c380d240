//! Command-line front end: load or synthesize a monthly sales series,
//! forecast it and print the report.

use clap::Parser;
use sales_forecast::sample::SampleDataGenerator;
use sales_forecast::{run_forecast, DataLoader, ForecastConfig, ForecastError, TimeSeries};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sales_forecast")]
#[command(about = "Forecast monthly sales with rolling-mean, exponential-smoothing and seasonal-naive methods", long_about = None)]
struct Cli {
    /// Sales CSV with a date column and a sales column; synthetic data is used when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of months to forecast (overrides the configuration)
    #[arg(long)]
    horizon: Option<usize>,

    /// Exponential smoothing parameter in (0, 1] (overrides the configuration)
    #[arg(long)]
    alpha: Option<f64>,

    /// Months of synthetic data to generate when no input is given
    #[arg(long, default_value = "72")]
    sample_months: usize,

    /// Seed for synthetic data
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn load_config(cli: &Cli) -> Result<ForecastConfig, ForecastError> {
    let mut config = match &cli.config {
        Some(path) => ForecastConfig::from_json(&fs::read_to_string(path)?)?,
        None => ForecastConfig::default(),
    };

    if let Some(horizon) = cli.horizon {
        config = config.with_horizon(horizon);
    }
    if let Some(alpha) = cli.alpha {
        config = config.with_smoothing_alpha(alpha);
    }

    config.validate()?;
    Ok(config)
}

fn load_series(cli: &Cli) -> Result<TimeSeries, ForecastError> {
    match &cli.input {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading sales data");
            DataLoader::monthly_series_from_csv(path)
        }
        None => {
            tracing::info!(
                months = cli.sample_months,
                seed = cli.seed,
                "generating sample data"
            );
            SampleDataGenerator::new()
                .months(cli.sample_months)
                .seed(cli.seed)
                .generate()
        }
    }
}

fn run(cli: &Cli) -> Result<(), ForecastError> {
    let config = load_config(cli)?;
    let series = load_series(cli)?;
    let report = run_forecast(&series, &config)?;

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report);
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sales_forecast=info".into()),
        )
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
