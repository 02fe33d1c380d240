//! # Sales Forecast
//!
//! Short-horizon forecasting for monthly sales series.
//!
//! ## Features
//!
//! - Checked monthly series (`TimeSeries`): strictly increasing, no missing months
//! - Three heuristic forecasts: rolling mean, exponential smoothing and seasonal naive
//! - Holdout evaluation with MAE, RMSE and MAPE
//! - A serializable `ForecastReport` for display layers
//! - CSV ingestion with monthly aggregation, and synthetic sample data
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use sales_forecast::{run_forecast, ForecastConfig, ForecastMethod, TimeSeries};
//!
//! let start = NaiveDate::from_ymd_opt(2022, 1, 31).unwrap();
//! let series = TimeSeries::monthly_from(start, vec![100.0; 18])?;
//!
//! let report = run_forecast(&series, &ForecastConfig::default())?;
//!
//! assert_eq!(report.future_dates.len(), 6);
//! assert_eq!(report.forecast(ForecastMethod::RollingMean), Some(&[100.0; 6][..]));
//! assert!(report.accuracy.is_some());
//! # Ok::<(), sales_forecast::ForecastError>(())
//! ```
//!
//! ## MAPE and zero sales
//!
//! Holdout months with zero actual sales are left out of the MAPE mean and
//! counted in `AccuracyMetrics::zero_actuals_skipped`. If every holdout month
//! is zero, MAPE is reported as `None`.

pub mod config;
pub mod data;
pub mod error;
pub mod evaluation;
pub mod generator;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod sample;
pub mod utils;

// Re-export commonly used types
pub use crate::config::ForecastConfig;
pub use crate::data::{DataLoader, Observation, SalesRecord, TimeSeries};
pub use crate::error::ForecastError;
pub use crate::evaluation::{AccuracyEvaluator, AccuracyReport};
pub use crate::generator::ForecastGenerator;
pub use crate::models::{ForecastMethod, ForecastModel, ForecastSet, TrainedForecastModel};
pub use crate::pipeline::run_forecast;
pub use crate::report::ForecastReport;
pub use forecast_math::accuracy::AccuracyMetrics;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
