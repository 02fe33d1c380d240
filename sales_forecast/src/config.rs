//! Forecast configuration

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};

/// Observations in one seasonal cycle (months per year)
pub const SEASON_LENGTH: usize = 12;

/// Trailing window of the rolling-mean forecast
pub const ROLLING_WINDOW: usize = 12;

/// Most recent observations held out when scoring forecasts
pub const HOLDOUT_PERIODS: usize = 6;

/// Options recognised by the forecasting pipeline
///
/// Every field has a default, so a partial JSON document such as
/// `{"horizon": 3}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Number of future months to forecast
    pub horizon: usize,
    /// Exponential smoothing parameter, in (0, 1]
    pub smoothing_alpha: f64,
    /// Shortest series the forecast generator accepts
    pub min_history_for_forecast: usize,
    /// Shortest series the accuracy evaluator scores
    pub min_history_for_evaluation: usize,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            horizon: 6,
            smoothing_alpha: 0.3,
            min_history_for_forecast: SEASON_LENGTH,
            min_history_for_evaluation: SEASON_LENGTH + HOLDOUT_PERIODS,
        }
    }
}

impl ForecastConfig {
    /// Parse a configuration from JSON, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the forecast horizon
    pub fn with_horizon(mut self, horizon: usize) -> Self {
        self.horizon = horizon;
        self
    }

    /// Set the smoothing parameter
    pub fn with_smoothing_alpha(mut self, alpha: f64) -> Self {
        self.smoothing_alpha = alpha;
        self
    }

    /// Set the minimum history for forecasting
    pub fn with_min_history_for_forecast(mut self, min_history: usize) -> Self {
        self.min_history_for_forecast = min_history;
        self
    }

    /// Set the minimum history for holdout evaluation
    pub fn with_min_history_for_evaluation(mut self, min_history: usize) -> Self {
        self.min_history_for_evaluation = min_history;
        self
    }

    /// Check that every option is in range
    pub fn validate(&self) -> Result<()> {
        if self.horizon == 0 {
            return Err(ForecastError::InvalidParameter(
                "Horizon must be at least 1".to_string(),
            ));
        }

        forecast_math::smoothing::validate_alpha(self.smoothing_alpha)?;

        if self.min_history_for_forecast < SEASON_LENGTH {
            return Err(ForecastError::InvalidParameter(format!(
                "min_history_for_forecast must cover one season ({} months), got {}",
                SEASON_LENGTH, self.min_history_for_forecast
            )));
        }

        let evaluation_floor = self.min_history_for_forecast + HOLDOUT_PERIODS;
        if self.min_history_for_evaluation < evaluation_floor {
            return Err(ForecastError::InvalidParameter(format!(
                "min_history_for_evaluation must be at least {} (forecast minimum plus {} holdout months), got {}",
                evaluation_floor, HOLDOUT_PERIODS, self.min_history_for_evaluation
            )));
        }

        Ok(())
    }
}
