//! Moving average calculations
//!
//! Contains a streaming Simple Moving Average (SMA) and the trailing-window
//! mean used by the rolling-mean forecast.

use crate::{MathError, Result};
use std::collections::VecDeque;

/// Simple Moving Average (SMA) implementation
#[derive(Debug, Clone)]
pub struct SimpleMovingAverage {
    period: usize,
    values: VecDeque<f64>,
    sum: f64,
}

impl SimpleMovingAverage {
    /// Create a new Simple Moving Average with the specified period
    pub fn new(period: usize) -> Result<Self> {
        if period == 0 {
            return Err(MathError::InvalidInput(
                "Period must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            period,
            values: VecDeque::with_capacity(period),
            sum: 0.0,
        })
    }

    /// Update the SMA with a new value
    pub fn update(&mut self, value: f64) {
        self.values.push_back(value);
        self.sum += value;

        if self.values.len() > self.period {
            if let Some(old_value) = self.values.pop_front() {
                self.sum -= old_value;
            }
        }
    }

    /// Get the current SMA value
    pub fn value(&self) -> Result<f64> {
        if self.values.len() < self.period {
            return Err(MathError::InsufficientData {
                required: self.period,
                actual: self.values.len(),
            });
        }

        Ok(self.sum / self.period as f64)
    }

    /// Get the current period
    pub fn period(&self) -> usize {
        self.period
    }

    /// Reset the SMA, clearing all values
    pub fn reset(&mut self) {
        self.values.clear();
        self.sum = 0.0;
    }
}

/// Mean of the last `window` values of a series
pub fn trailing_mean(values: &[f64], window: usize) -> Result<f64> {
    let mut sma = SimpleMovingAverage::new(window)?;
    if values.len() < window {
        return Err(MathError::InsufficientData {
            required: window,
            actual: values.len(),
        });
    }

    values[values.len() - window..]
        .iter()
        .for_each(|&value| sma.update(value));
    sma.value()
}
