//! Exponential-smoothing forecast

use crate::data::TimeSeries;
use crate::error::{ForecastError, Result};
use crate::models::{check_horizon, ForecastMethod, ForecastModel, TrainedForecastModel};
use forecast_math::smoothing::{exponential_smoothing, validate_alpha};

/// Simple exponential smoothing model
///
/// The forecast is flat at the final smoothed level.
#[derive(Debug, Clone)]
pub struct ExponentialSmoothing {
    /// Name of the model
    name: String,
    /// Smoothing parameter
    alpha: f64,
}

/// Trained exponential smoothing model
#[derive(Debug, Clone)]
pub struct TrainedExponentialSmoothing {
    /// Smoothed value for every training month
    fitted: Vec<f64>,
    /// Final smoothed level
    level: f64,
}

impl ExponentialSmoothing {
    /// Create a new exponential smoothing model, `alpha` in (0, 1]
    pub fn new(alpha: f64) -> Result<Self> {
        validate_alpha(alpha)?;

        Ok(Self {
            name: format!("Exponential Smoothing (alpha={})", alpha),
            alpha,
        })
    }

    /// Smoothing parameter
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl ForecastModel for ExponentialSmoothing {
    type Trained = TrainedExponentialSmoothing;

    fn train(&self, data: &TimeSeries) -> Result<Self::Trained> {
        let fitted = exponential_smoothing(&data.values(), self.alpha)?;
        let level = fitted.last().copied().ok_or_else(|| {
            ForecastError::insufficient_history("exponential smoothing", 1, data.len())
        })?;

        Ok(TrainedExponentialSmoothing { fitted, level })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedExponentialSmoothing {
    /// Smoothed series over the training months
    pub fn fitted(&self) -> &[f64] {
        &self.fitted
    }

    /// Final smoothed level
    pub fn level(&self) -> f64 {
        self.level
    }
}

impl TrainedForecastModel for TrainedExponentialSmoothing {
    fn forecast(&self, horizon: usize) -> Result<Vec<f64>> {
        check_horizon(horizon)?;
        Ok(vec![self.level; horizon])
    }

    fn method(&self) -> ForecastMethod {
        ForecastMethod::ExponentialSmoothing
    }
}
