//! Error types for the sales_forecast crate

use forecast_math::MathError;
use thiserror::Error;

/// Custom error types for the sales_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// A parameter is outside its allowed range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The series is too short for the requested operation
    #[error("Insufficient history for {operation}: need at least {required} observations, have {actual}")]
    InsufficientHistory {
        operation: String,
        required: usize,
        actual: usize,
    },

    /// A percentage metric has no non-zero denominator
    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    /// The series breaks the monthly ordering invariant
    #[error("Invalid series: {0}")]
    InvalidSeries(String),

    /// Error related to data ingestion
    #[error("Data error: {0}")]
    DataError(String),

    /// Error related to length or shape validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from CSV parsing
    #[error("CSV error: {0}")]
    CsvError(String),

    /// Error from JSON serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl ForecastError {
    /// Build an `InsufficientHistory` error for a named operation
    pub fn insufficient_history(operation: &str, required: usize, actual: usize) -> Self {
        ForecastError::InsufficientHistory {
            operation: operation.to_string(),
            required,
            actual,
        }
    }
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;

impl From<MathError> for ForecastError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::InsufficientData { required, actual } => {
                ForecastError::insufficient_history("calculation", required, actual)
            }
            MathError::InvalidInput(msg) => ForecastError::InvalidParameter(msg),
            MathError::DivisionByZero(msg) => ForecastError::DivisionByZero(msg),
        }
    }
}

impl From<csv::Error> for ForecastError {
    fn from(err: csv::Error) -> Self {
        ForecastError::CsvError(err.to_string())
    }
}

impl From<serde_json::Error> for ForecastError {
    fn from(err: serde_json::Error) -> Self {
        ForecastError::SerializationError(err.to_string())
    }
}
