//! Forecast generation for all three heuristic methods

use crate::config::{ForecastConfig, ROLLING_WINDOW, SEASON_LENGTH};
use crate::data::TimeSeries;
use crate::error::{ForecastError, Result};
use crate::models::exponential_smoothing::ExponentialSmoothing;
use crate::models::rolling_mean::RollingMean;
use crate::models::seasonal_naive::SeasonalNaive;
use crate::models::{check_horizon, ForecastModel, ForecastSet, TrainedForecastModel};
use crate::utils::future_monthly_dates;
use chrono::NaiveDate;
use tracing::debug;

/// Produces the rolling-mean, exponential-smoothing and seasonal-naive
/// forecasts for a monthly series
///
/// The generator holds no state between calls: the same series and horizon
/// always give the same forecasts.
#[derive(Debug, Clone)]
pub struct ForecastGenerator {
    rolling_mean: RollingMean,
    smoothing: ExponentialSmoothing,
    seasonal: SeasonalNaive,
    min_history: usize,
}

impl ForecastGenerator {
    /// Create a generator with the given smoothing parameter and history gate
    pub fn new(alpha: f64, min_history: usize) -> Result<Self> {
        if min_history < SEASON_LENGTH {
            return Err(ForecastError::InvalidParameter(format!(
                "Minimum history must cover one season ({} months), got {}",
                SEASON_LENGTH, min_history
            )));
        }

        Ok(Self {
            rolling_mean: RollingMean::new(ROLLING_WINDOW)?,
            smoothing: ExponentialSmoothing::new(alpha)?,
            seasonal: SeasonalNaive::new(SEASON_LENGTH)?,
            min_history,
        })
    }

    /// Create a generator from a validated configuration
    pub fn from_config(config: &ForecastConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.smoothing_alpha, config.min_history_for_forecast)
    }

    /// Shortest series accepted by [`ForecastGenerator::generate`]
    pub fn min_history(&self) -> usize {
        self.min_history
    }

    /// Forecast the `horizon` months following the end of `series`
    ///
    /// Fails with `InsufficientHistory` when the series is shorter than the
    /// minimum history. The seasonal-naive forecast is left out, rather than
    /// failing the call, when the series holds less than one full season.
    pub fn generate(&self, series: &TimeSeries, horizon: usize) -> Result<Vec<ForecastSet>> {
        check_horizon(horizon)?;
        if series.len() < self.min_history {
            return Err(ForecastError::insufficient_history(
                "forecast generation",
                self.min_history,
                series.len(),
            ));
        }

        let last_date = series.last_date().ok_or_else(|| {
            ForecastError::insufficient_history("forecast generation", self.min_history, 0)
        })?;
        let dates = future_monthly_dates(last_date, horizon)?;

        let mut sets = Vec::with_capacity(3);
        sets.push(forecast_set(&self.rolling_mean.train(series)?, &dates)?);
        sets.push(forecast_set(&self.smoothing.train(series)?, &dates)?);

        match self.seasonal.train(series) {
            Ok(trained) => sets.push(forecast_set(&trained, &dates)?),
            Err(ForecastError::InsufficientHistory {
                required, actual, ..
            }) => {
                debug!(required, actual, "omitting seasonal-naive forecast");
            }
            Err(err) => return Err(err),
        }

        Ok(sets)
    }

    /// Exponentially smoothed values of the whole series
    pub fn smoothed_history(&self, series: &TimeSeries) -> Result<Vec<f64>> {
        Ok(self.smoothing.train(series)?.fitted().to_vec())
    }
}

fn forecast_set<M: TrainedForecastModel>(model: &M, dates: &[NaiveDate]) -> Result<ForecastSet> {
    let values = model.forecast(dates.len())?;
    debug!(method = %model.method(), horizon = dates.len(), "generated forecast");
    ForecastSet::new(model.method(), dates.to_vec(), values)
}
