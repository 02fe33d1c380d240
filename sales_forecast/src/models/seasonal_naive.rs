//! Seasonal-naive forecast

use crate::data::TimeSeries;
use crate::error::{ForecastError, Result};
use crate::models::{check_horizon, ForecastMethod, ForecastModel, TrainedForecastModel};

/// Repeats the most recent full season
///
/// Future month `i` takes the value observed one season earlier, wrapping
/// around the last cycle when the horizon is longer than a season.
#[derive(Debug, Clone)]
pub struct SeasonalNaive {
    /// Name of the model
    name: String,
    /// Observations per season
    season_length: usize,
}

/// Trained seasonal-naive model
#[derive(Debug, Clone)]
pub struct TrainedSeasonalNaive {
    /// Last full season of observations, oldest first
    last_cycle: Vec<f64>,
}

impl SeasonalNaive {
    /// Create a new seasonal-naive model
    pub fn new(season_length: usize) -> Result<Self> {
        if season_length == 0 {
            return Err(ForecastError::InvalidParameter(
                "Season length must be positive".to_string(),
            ));
        }

        Ok(Self {
            name: format!("Seasonal Naive (season={})", season_length),
            season_length,
        })
    }

    /// Observations per season
    pub fn season_length(&self) -> usize {
        self.season_length
    }
}

impl ForecastModel for SeasonalNaive {
    type Trained = TrainedSeasonalNaive;

    fn train(&self, data: &TimeSeries) -> Result<Self::Trained> {
        if data.len() < self.season_length {
            return Err(ForecastError::insufficient_history(
                "seasonal-naive forecast",
                self.season_length,
                data.len(),
            ));
        }

        let values = data.values();
        Ok(TrainedSeasonalNaive {
            last_cycle: values[values.len() - self.season_length..].to_vec(),
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedSeasonalNaive {
    /// Last full season of observations
    pub fn last_cycle(&self) -> &[f64] {
        &self.last_cycle
    }
}

impl TrainedForecastModel for TrainedSeasonalNaive {
    fn forecast(&self, horizon: usize) -> Result<Vec<f64>> {
        check_horizon(horizon)?;
        Ok((0..horizon)
            .map(|i| self.last_cycle[i % self.last_cycle.len()])
            .collect())
    }

    fn method(&self) -> ForecastMethod {
        ForecastMethod::SeasonalNaive
    }
}
