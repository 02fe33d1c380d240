//! End-to-end forecasting pipeline

use crate::config::ForecastConfig;
use crate::data::TimeSeries;
use crate::error::Result;
use crate::evaluation::AccuracyEvaluator;
use crate::generator::ForecastGenerator;
use crate::report::ForecastReport;
use tracing::info;

/// Forecast a monthly series and score the methods on a holdout window
///
/// The accuracy section of the report is `None` when the series is shorter
/// than `min_history_for_evaluation`.
pub fn run_forecast(series: &TimeSeries, config: &ForecastConfig) -> Result<ForecastReport> {
    config.validate()?;

    let generator = ForecastGenerator::from_config(config)?;
    let sets = generator.generate(series, config.horizon)?;
    let accuracy = AccuracyEvaluator::from_config(config)?.evaluate(series)?;
    let smoothed_history = generator.smoothed_history(series)?;

    info!(
        observations = series.len(),
        horizon = config.horizon,
        methods = sets.len(),
        evaluated = accuracy.is_some(),
        "forecast complete"
    );

    Ok(ForecastReport::assemble(&sets, accuracy, smoothed_history))
}
