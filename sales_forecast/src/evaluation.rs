//! Holdout evaluation of forecast accuracy

use crate::config::{ForecastConfig, HOLDOUT_PERIODS};
use crate::data::TimeSeries;
use crate::error::Result;
use crate::generator::ForecastGenerator;
use crate::models::ForecastMethod;
use chrono::NaiveDate;
use forecast_math::accuracy::AccuracyMetrics;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Accuracy of every method over the holdout months
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccuracyReport {
    /// Dates of the held-out months
    pub holdout_dates: Vec<NaiveDate>,
    /// Error metrics per method
    pub metrics: BTreeMap<ForecastMethod, AccuracyMetrics>,
}

impl AccuracyReport {
    /// Metrics of one method, if it was evaluated
    pub fn get(&self, method: ForecastMethod) -> Option<&AccuracyMetrics> {
        self.metrics.get(&method)
    }
}

/// Scores each method by forecasting the last six known months from the
/// months before them
#[derive(Debug, Clone)]
pub struct AccuracyEvaluator {
    generator: ForecastGenerator,
    min_history: usize,
}

impl AccuracyEvaluator {
    /// Create an evaluator from a validated configuration
    pub fn from_config(config: &ForecastConfig) -> Result<Self> {
        Ok(Self {
            generator: ForecastGenerator::from_config(config)?,
            min_history: config.min_history_for_evaluation,
        })
    }

    /// Shortest series the evaluator scores
    pub fn min_history(&self) -> usize {
        self.min_history
    }

    /// Evaluate every method on the holdout window
    ///
    /// Returns `Ok(None)` when the series is too short to leave a full
    /// training window after the holdout; that is a capability gate, not an
    /// error.
    pub fn evaluate(&self, series: &TimeSeries) -> Result<Option<AccuracyReport>> {
        if series.len() < self.min_history {
            warn!(
                required = self.min_history,
                actual = series.len(),
                "skipping holdout evaluation"
            );
            return Ok(None);
        }

        let (training, holdout) = series.split_tail(HOLDOUT_PERIODS)?;
        debug!(
            training = training.len(),
            holdout = holdout.len(),
            "split series for evaluation"
        );

        let actual = holdout.values();
        let mut metrics = BTreeMap::new();
        for set in self.generator.generate(&training, HOLDOUT_PERIODS)? {
            let scored = AccuracyMetrics::compute(&actual, set.values())?;
            if scored.mape.is_none() {
                warn!(method = %set.method(), "MAPE undefined: every holdout actual is zero");
            } else if scored.zero_actuals_skipped > 0 {
                warn!(
                    method = %set.method(),
                    skipped = scored.zero_actuals_skipped,
                    "zero actuals left out of MAPE"
                );
            }
            metrics.insert(set.method(), scored);
        }

        Ok(Some(AccuracyReport {
            holdout_dates: holdout.dates(),
            metrics,
        }))
    }
}
