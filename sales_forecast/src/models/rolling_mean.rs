//! Rolling-mean forecast

use crate::data::TimeSeries;
use crate::error::{ForecastError, Result};
use crate::models::{check_horizon, ForecastMethod, ForecastModel, TrainedForecastModel};
use forecast_math::moving_averages::trailing_mean;

/// Forecasts every future month as the mean of the trailing window
#[derive(Debug, Clone)]
pub struct RollingMean {
    /// Name of the model
    name: String,
    /// Window size
    window: usize,
}

/// Trained rolling-mean model
#[derive(Debug, Clone)]
pub struct TrainedRollingMean {
    /// Mean of the trailing window
    level: f64,
}

impl RollingMean {
    /// Create a new rolling-mean model
    pub fn new(window: usize) -> Result<Self> {
        if window == 0 {
            return Err(ForecastError::InvalidParameter(
                "Window size must be positive".to_string(),
            ));
        }

        Ok(Self {
            name: format!("Rolling Mean (window={})", window),
            window,
        })
    }

    /// Window size
    pub fn window(&self) -> usize {
        self.window
    }
}

impl ForecastModel for RollingMean {
    type Trained = TrainedRollingMean;

    fn train(&self, data: &TimeSeries) -> Result<Self::Trained> {
        if data.len() < self.window {
            return Err(ForecastError::insufficient_history(
                "rolling-mean forecast",
                self.window,
                data.len(),
            ));
        }

        let level = trailing_mean(&data.values(), self.window)?;

        Ok(TrainedRollingMean { level })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedRollingMean {
    /// Mean of the trailing window
    pub fn level(&self) -> f64 {
        self.level
    }
}

impl TrainedForecastModel for TrainedRollingMean {
    fn forecast(&self, horizon: usize) -> Result<Vec<f64>> {
        check_horizon(horizon)?;
        Ok(vec![self.level; horizon])
    }

    fn method(&self) -> ForecastMethod {
        ForecastMethod::RollingMean
    }
}
