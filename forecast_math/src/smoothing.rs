//! Exponential smoothing engine
//!
//! Simple exponential smoothing is the left-to-right recurrence
//!
//! ```text
//! s[0] = x[0]
//! s[i] = alpha * x[i] + (1 - alpha) * s[i - 1]
//! ```
//!
//! where `alpha` lies in `(0, 1]`. Values of `alpha` closer to 1 weight recent
//! observations more heavily; `alpha = 1` reproduces the input.

use crate::{MathError, Result};

/// Check that a smoothing parameter lies in `(0, 1]`
pub fn validate_alpha(alpha: f64) -> Result<()> {
    if !alpha.is_finite() || alpha <= 0.0 || alpha > 1.0 {
        return Err(MathError::InvalidInput(format!(
            "Alpha must be in (0, 1], got {}",
            alpha
        )));
    }

    Ok(())
}

/// Incremental exponential smoother
///
/// The first update seeds the level with the observation itself; every later
/// update applies the smoothing recurrence.
#[derive(Debug, Clone)]
pub struct ExponentialSmoother {
    alpha: f64,
    level: Option<f64>,
}

impl ExponentialSmoother {
    /// Create a new smoother with the given alpha
    pub fn new(alpha: f64) -> Result<Self> {
        validate_alpha(alpha)?;

        Ok(Self {
            alpha,
            level: None,
        })
    }

    /// Feed the next observation and return the updated level
    pub fn update(&mut self, value: f64) -> f64 {
        let level = match self.level {
            None => value,
            Some(previous) => self.alpha * value + (1.0 - self.alpha) * previous,
        };

        self.level = Some(level);
        level
    }

    /// Get the current smoothed level
    pub fn value(&self) -> Result<f64> {
        self.level.ok_or(MathError::InsufficientData {
            required: 1,
            actual: 0,
        })
    }

    /// Reset the smoother, forgetting the current level
    pub fn reset(&mut self) {
        self.level = None;
    }
}

fn check_non_empty(values: &[f64]) -> Result<()> {
    if values.is_empty() {
        return Err(MathError::InvalidInput(
            "Cannot smooth an empty sequence".to_string(),
        ));
    }

    Ok(())
}

/// Smooth a whole series, returning one smoothed value per input value
pub fn exponential_smoothing(values: &[f64], alpha: f64) -> Result<Vec<f64>> {
    let mut smoother = ExponentialSmoother::new(alpha)?;
    check_non_empty(values)?;

    Ok(values.iter().map(|&value| smoother.update(value)).collect())
}

/// Final smoothed level of a series without materializing the smoothed series
pub fn smoothed_level(values: &[f64], alpha: f64) -> Result<f64> {
    let mut smoother = ExponentialSmoother::new(alpha)?;
    check_non_empty(values)?;
    for &value in values {
        smoother.update(value);
    }

    smoother.value()
}
