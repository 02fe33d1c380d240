//! Forecast accuracy metrics
//!
//! All metrics compare `actual` against `predicted` point by point and require
//! both slices to be non-empty and of equal length.
//!
//! MAPE is undefined for points whose actual value is zero. Those points are
//! left out of the percentage mean; when no point is left the calculation
//! fails with [`MathError::DivisionByZero`] instead of producing NaN or
//! infinity.

use crate::{MathError, Result};
use serde::{Deserialize, Serialize};

fn check_lengths(actual: &[f64], predicted: &[f64]) -> Result<()> {
    if actual.is_empty() || actual.len() != predicted.len() {
        return Err(MathError::InvalidInput(format!(
            "Actual and predicted values must have the same non-zero length (got {} and {})",
            actual.len(),
            predicted.len()
        )));
    }

    Ok(())
}

fn errors<'a>(actual: &'a [f64], predicted: &'a [f64]) -> impl Iterator<Item = f64> + 'a {
    actual.iter().zip(predicted).map(|(a, p)| a - p)
}

/// Mean absolute error
pub fn mean_absolute_error(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    check_lengths(actual, predicted)?;
    let sum: f64 = errors(actual, predicted).map(f64::abs).sum();
    Ok(sum / actual.len() as f64)
}

/// Mean squared error
pub fn mean_squared_error(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    check_lengths(actual, predicted)?;
    let sum: f64 = errors(actual, predicted).map(|e| e * e).sum();
    Ok(sum / actual.len() as f64)
}

/// Root mean squared error
pub fn root_mean_squared_error(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    mean_squared_error(actual, predicted).map(f64::sqrt)
}

/// Number of actual values that are exactly zero
pub fn zero_actuals(actual: &[f64]) -> usize {
    actual.iter().filter(|&&a| a == 0.0).count()
}

/// Mean absolute percentage error, in percent, over the non-zero actuals
pub fn mean_absolute_percentage_error(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    check_lengths(actual, predicted)?;

    let (sum, count) = actual
        .iter()
        .zip(predicted)
        .filter(|(a, _)| **a != 0.0)
        .fold((0.0, 0usize), |(sum, count), (&a, &p)| {
            (sum + ((a - p) / a).abs(), count + 1)
        });

    if count == 0 {
        return Err(MathError::DivisionByZero(
            "MAPE is undefined when every actual value is zero".to_string(),
        ));
    }

    Ok(sum / count as f64 * 100.0)
}

/// Accuracy of one forecast against the observed values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccuracyMetrics {
    /// Mean Absolute Error
    pub mae: f64,
    /// Mean Squared Error
    pub mse: f64,
    /// Root Mean Squared Error
    pub rmse: f64,
    /// Mean Absolute Percentage Error; `None` when every actual is zero
    pub mape: Option<f64>,
    /// Points left out of the MAPE mean because their actual is zero
    pub zero_actuals_skipped: usize,
}

impl AccuracyMetrics {
    /// Compute every metric for a forecast
    pub fn compute(actual: &[f64], predicted: &[f64]) -> Result<Self> {
        let mae = mean_absolute_error(actual, predicted)?;
        let mse = mean_squared_error(actual, predicted)?;
        let mape = match mean_absolute_percentage_error(actual, predicted) {
            Ok(mape) => Some(mape),
            Err(MathError::DivisionByZero(_)) => None,
            Err(err) => return Err(err),
        };

        Ok(Self {
            mae,
            mse,
            rmse: mse.sqrt(),
            mape,
            zero_actuals_skipped: zero_actuals(actual),
        })
    }
}

impl std::fmt::Display for AccuracyMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "   MAE:  {:.2}", self.mae)?;
        writeln!(f, "   RMSE: {:.2}", self.rmse)?;
        match self.mape {
            Some(mape) => write!(f, "   MAPE: {:.2}%", mape)?,
            None => write!(f, "   MAPE: undefined")?,
        }
        if self.zero_actuals_skipped > 0 {
            write!(f, " ({} zero actuals skipped)", self.zero_actuals_skipped)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regression_metrics() {
        let actual = [10.0, 20.0, 30.0, 40.0, 50.0];
        let predicted = [12.0, 18.0, 33.0, 37.0, 52.0];

        let mae = mean_absolute_error(&actual, &predicted).unwrap();
        let mse = mean_squared_error(&actual, &predicted).unwrap();
        let rmse = root_mean_squared_error(&actual, &predicted).unwrap();
        assert!((mae - 2.4).abs() < 1e-12);
        assert!((mse - 6.0).abs() < 1e-12);
        assert!((rmse - 6f64.sqrt()).abs() < 1e-12);

        // (0.2 + 0.1 + 0.1 + 0.075 + 0.04) / 5 * 100 = 10.3
        let mape = mean_absolute_percentage_error(&actual, &predicted).unwrap();
        assert!((mape - 10.3).abs() < 1e-9);
    }

    #[test]
    fn test_perfect_forecast() {
        let actual = [100.0; 6];
        let metrics = AccuracyMetrics::compute(&actual, &actual).unwrap();
        assert_eq!(metrics.mae, 0.0);
        assert_eq!(metrics.rmse, 0.0);
        assert_eq!(metrics.mape, Some(0.0));
        assert_eq!(metrics.zero_actuals_skipped, 0);
    }

    #[test]
    fn test_mape_skips_zero_actuals() {
        let actual = [0.0, 50.0, 100.0];
        let predicted = [10.0, 40.0, 110.0];

        // (0.2 + 0.1) / 2 * 100 = 15
        let mape = mean_absolute_percentage_error(&actual, &predicted).unwrap();
        assert!((mape - 15.0).abs() < 1e-9);

        let metrics = AccuracyMetrics::compute(&actual, &predicted).unwrap();
        assert_eq!(metrics.zero_actuals_skipped, 1);
        assert!(metrics.mape.unwrap().is_finite());
    }

    #[test]
    fn test_mape_all_zero_actuals() {
        let actual = [0.0, 0.0];
        let predicted = [1.0, 2.0];

        assert!(matches!(
            mean_absolute_percentage_error(&actual, &predicted),
            Err(MathError::DivisionByZero(_))
        ));

        let metrics = AccuracyMetrics::compute(&actual, &predicted).unwrap();
        assert_eq!(metrics.mape, None);
        assert_eq!(metrics.zero_actuals_skipped, 2);
        assert_eq!(metrics.mae, 1.5);
    }

    #[test]
    fn test_length_mismatch() {
        assert!(mean_absolute_error(&[1.0, 2.0], &[1.0]).is_err());
        assert!(mean_squared_error(&[], &[]).is_err());
        assert!(AccuracyMetrics::compute(&[1.0], &[]).is_err());
    }

    #[test]
    fn test_display() {
        let (actual, predicted) = ([0.0, 10.0], [1.0, 12.0]);
        let metrics = AccuracyMetrics::compute(&actual, &predicted).unwrap();
        let text = metrics.to_string();
        assert!(text.contains("MAE:  1.50"));
        assert!(text.contains("MAPE: 20.00%"));
        assert!(text.contains("1 zero actuals skipped"));
    }
}
