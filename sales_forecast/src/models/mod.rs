//! Forecasting models for monthly sales series
//!
//! Each method follows the same two-step shape: a [`ForecastModel`] holds the
//! method's parameters and is trained on a [`TimeSeries`], producing a
//! [`TrainedForecastModel`] that projects a fixed number of months ahead.

use crate::data::TimeSeries;
use crate::error::{ForecastError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

pub mod exponential_smoothing;
pub mod rolling_mean;
pub mod seasonal_naive;

/// The heuristic forecasting methods, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastMethod {
    /// Mean of the trailing twelve months
    RollingMean,
    /// Final level of simple exponential smoothing
    ExponentialSmoothing,
    /// Same month one season earlier
    SeasonalNaive,
}

impl ForecastMethod {
    /// All methods, in report order
    pub const ALL: [ForecastMethod; 3] = [
        ForecastMethod::RollingMean,
        ForecastMethod::ExponentialSmoothing,
        ForecastMethod::SeasonalNaive,
    ];

    /// Human-readable method name
    pub fn label(&self) -> &'static str {
        match self {
            ForecastMethod::RollingMean => "Rolling Mean",
            ForecastMethod::ExponentialSmoothing => "Exponential Smoothing",
            ForecastMethod::SeasonalNaive => "Seasonal Naive",
        }
    }
}

impl fmt::Display for ForecastMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Dated predictions of one method
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastSet {
    method: ForecastMethod,
    dates: Vec<NaiveDate>,
    values: Vec<f64>,
}

impl ForecastSet {
    /// Create a forecast set, pairing each date with one value
    pub fn new(method: ForecastMethod, dates: Vec<NaiveDate>, values: Vec<f64>) -> Result<Self> {
        if dates.len() != values.len() {
            return Err(ForecastError::ValidationError(format!(
                "Values length ({}) doesn't match dates length ({})",
                values.len(),
                dates.len()
            )));
        }

        Ok(Self {
            method,
            dates,
            values,
        })
    }

    /// Method that produced the forecast
    pub fn method(&self) -> ForecastMethod {
        self.method
    }

    /// Forecast dates
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Forecast values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of months forecasted
    pub fn horizon(&self) -> usize {
        self.values.len()
    }

    /// `(date, value)` pairs in date order
    pub fn points(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.dates.iter().copied().zip(self.values.iter().copied())
    }
}

/// Trained forecast model
pub trait TrainedForecastModel: Debug {
    /// Forecast the next `horizon` months
    fn forecast(&self, horizon: usize) -> Result<Vec<f64>>;

    /// Method implemented by the model
    fn method(&self) -> ForecastMethod;
}

/// Forecast model that can be trained on a monthly series
pub trait ForecastModel: Debug + Clone {
    /// The type of trained model produced
    type Trained: TrainedForecastModel;

    /// Train the model on a monthly series
    fn train(&self, data: &TimeSeries) -> Result<Self::Trained>;

    /// Get the name of the model
    fn name(&self) -> &str;
}

pub(crate) fn check_horizon(horizon: usize) -> Result<()> {
    if horizon == 0 {
        return Err(ForecastError::InvalidParameter(
            "Horizon must be at least 1".to_string(),
        ));
    }

    Ok(())
}
