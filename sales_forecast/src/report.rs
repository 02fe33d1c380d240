//! Forecast report handed to display collaborators

use crate::config::HOLDOUT_PERIODS;
use crate::error::Result;
use crate::evaluation::AccuracyReport;
use crate::models::{ForecastMethod, ForecastSet};
use chrono::NaiveDate;
use forecast_math::accuracy::AccuracyMetrics;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Forecasts, their dates and (when available) their holdout accuracy
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastReport {
    /// Forecast months, in order
    pub future_dates: Vec<NaiveDate>,
    /// Predicted values per method, aligned with `future_dates`
    pub forecasts: BTreeMap<ForecastMethod, Vec<f64>>,
    /// Holdout metrics per method, present when the evaluation ran
    pub accuracy: Option<BTreeMap<ForecastMethod, AccuracyMetrics>>,
    /// Exponentially smoothed history, aligned with the input series
    pub smoothed_history: Vec<f64>,
}

impl ForecastReport {
    /// Package forecast sets and an optional accuracy report
    pub fn assemble(
        sets: &[ForecastSet],
        accuracy: Option<AccuracyReport>,
        smoothed_history: Vec<f64>,
    ) -> Self {
        Self {
            future_dates: sets
                .first()
                .map(|set| set.dates().to_vec())
                .unwrap_or_default(),
            forecasts: sets
                .iter()
                .map(|set| (set.method(), set.values().to_vec()))
                .collect(),
            accuracy: accuracy.map(|report| report.metrics),
            smoothed_history,
        }
    }

    /// Predicted values of one method
    pub fn forecast(&self, method: ForecastMethod) -> Option<&[f64]> {
        self.forecasts.get(&method).map(Vec::as_slice)
    }

    /// Holdout metrics of one method
    pub fn metrics(&self, method: ForecastMethod) -> Option<&AccuracyMetrics> {
        self.accuracy.as_ref()?.get(&method)
    }

    /// Methods present in the report, in report order
    pub fn methods(&self) -> impl Iterator<Item = ForecastMethod> + '_ {
        self.forecasts.keys().copied()
    }

    /// Serialize the report to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for ForecastReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Forecast for next {} months:", self.future_dates.len())?;

        write!(f, "{:<12}", "Date")?;
        for method in self.methods() {
            write!(f, "{:>24}", method.label())?;
        }
        writeln!(f)?;

        for (i, date) in self.future_dates.iter().enumerate() {
            write!(f, "{:<12}", date.to_string())?;
            for values in self.forecasts.values() {
                match values.get(i) {
                    Some(value) => write!(f, "{:>24.2}", value)?,
                    None => write!(f, "{:>24}", "-")?,
                }
            }
            writeln!(f)?;
        }

        match &self.accuracy {
            Some(accuracy) => {
                writeln!(f)?;
                writeln!(
                    f,
                    "Forecast accuracy (last {} months holdout):",
                    HOLDOUT_PERIODS
                )?;
                for (method, metrics) in accuracy {
                    writeln!(f, "{}:", method)?;
                    writeln!(f, "{}", metrics)?;
                }
            }
            None => writeln!(
                f,
                "\nForecast accuracy: not enough history for a holdout test"
            )?,
        }

        Ok(())
    }
}
