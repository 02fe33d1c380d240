//! # Sales Forecast Workspace
//!
//! Umbrella crate for the monthly sales forecasting workspace. It re-exports
//! the numeric kernels of [`forecast_math`] and the forecasting pipeline of
//! [`sales_forecast`].
//!
//! ## Example
//!
//! ```
//! use sales_forecast_workspace::prelude::*;
//! use chrono::NaiveDate;
//!
//! let start = NaiveDate::from_ymd_opt(2023, 1, 31).unwrap();
//! let values: Vec<f64> = (0..24).map(|m| 200.0 + (m % 12) as f64 * 10.0).collect();
//! let series = TimeSeries::monthly_from(start, values).unwrap();
//!
//! let report = run_forecast(&series, &ForecastConfig::default()).unwrap();
//! assert_eq!(report.forecast(ForecastMethod::SeasonalNaive).unwrap()[0], 200.0);
//! ```

pub use forecast_math;
pub use sales_forecast;

/// Items needed to run a forecast end to end
pub mod prelude {
    pub use forecast_math::accuracy::AccuracyMetrics;
    pub use sales_forecast::{
        run_forecast, DataLoader, ForecastConfig, ForecastError, ForecastMethod, ForecastReport,
        TimeSeries,
    };
}
