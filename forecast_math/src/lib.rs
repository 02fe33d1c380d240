//! # Forecast Math
//!
//! Numeric building blocks for short-horizon sales forecasting.
//! This crate provides the recursive smoothing engine, trailing window
//! averages and the error metrics used to score forecasts against actuals.

use thiserror::Error;

pub mod accuracy;
pub mod moving_averages;
pub mod smoothing;

/// Errors that can occur in forecasting calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient data for calculation: need {required} values, have {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Division by zero: {0}")]
    DivisionByZero(String),
}

/// Result type for forecasting math operations
pub type Result<T> = std::result::Result<T, MathError>;
