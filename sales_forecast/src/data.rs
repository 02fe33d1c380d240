//! Monthly sales series and their ingestion

use crate::error::{ForecastError, Result};
use crate::utils::{future_monthly_dates, month_end, months_between};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;
use std::collections::BTreeMap;
use std::path::Path;

/// One monthly observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Date labelling the month
    pub date: NaiveDate,
    /// Sales total for the month
    pub value: f64,
}

impl Observation {
    /// Create a new observation
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// Ordered monthly sales series
///
/// Every observation falls in the calendar month directly after the previous
/// one, so the dates are strictly increasing with no gaps. Values are finite.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeries {
    observations: Vec<Observation>,
}

impl TimeSeries {
    /// Create a series from observations, checking the monthly invariant
    pub fn from_observations(observations: Vec<Observation>) -> Result<Self> {
        for (i, obs) in observations.iter().enumerate() {
            if !obs.value.is_finite() {
                return Err(ForecastError::InvalidSeries(format!(
                    "Value at {} is not finite",
                    obs.date
                )));
            }

            if i == 0 {
                continue;
            }

            let previous = observations[i - 1].date;
            if obs.date <= previous {
                return Err(ForecastError::InvalidSeries(format!(
                    "Dates must be strictly increasing ({} follows {})",
                    obs.date, previous
                )));
            }

            let step = months_between(previous, obs.date);
            if step != 1 {
                return Err(ForecastError::InvalidSeries(format!(
                    "Expected consecutive months, found {} month(s) between {} and {}",
                    step, previous, obs.date
                )));
            }
        }

        Ok(Self { observations })
    }

    /// Create a series from parallel date and value vectors
    pub fn new(dates: Vec<NaiveDate>, values: Vec<f64>) -> Result<Self> {
        if dates.len() != values.len() {
            return Err(ForecastError::ValidationError(format!(
                "Dates length ({}) doesn't match values length ({})",
                dates.len(),
                values.len()
            )));
        }

        Self::from_observations(
            dates
                .into_iter()
                .zip(values)
                .map(|(date, value)| Observation::new(date, value))
                .collect(),
        )
    }

    /// Create a series of consecutive months starting at `start`
    pub fn monthly_from(start: NaiveDate, values: Vec<f64>) -> Result<Self> {
        let mut dates = Vec::with_capacity(values.len());
        if !values.is_empty() {
            dates.push(start);
            dates.extend(future_monthly_dates(start, values.len() - 1)?);
        }

        Self::new(dates, values)
    }

    /// Observations in date order
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Sales values in date order
    pub fn values(&self) -> Vec<f64> {
        self.observations.iter().map(|obs| obs.value).collect()
    }

    /// Dates in order
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.observations.iter().map(|obs| obs.date).collect()
    }

    /// Date of the most recent observation
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.observations.last().map(|obs| obs.date)
    }

    /// Check if the series is empty
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Get the length of the series
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Split into the first `len - tail` observations and the last `tail`
    pub fn split_tail(&self, tail: usize) -> Result<(TimeSeries, TimeSeries)> {
        if tail > self.len() {
            return Err(ForecastError::insufficient_history(
                "split",
                tail,
                self.len(),
            ));
        }

        let (head, rest) = self.observations.split_at(self.len() - tail);
        Ok((
            TimeSeries {
                observations: head.to_vec(),
            },
            TimeSeries {
                observations: rest.to_vec(),
            },
        ))
    }

    /// Mean of the sales values
    pub fn mean(&self) -> Result<f64> {
        if self.is_empty() {
            return Err(ForecastError::DataError("Series is empty".to_string()));
        }

        Ok(self.observations.iter().map(|obs| obs.value).mean())
    }

    /// Sample standard deviation of the sales values
    pub fn std_dev(&self) -> Result<f64> {
        if self.len() < 2 {
            return Err(ForecastError::insufficient_history(
                "standard deviation",
                2,
                self.len(),
            ));
        }

        Ok(self.observations.iter().map(|obs| obs.value).std_dev())
    }
}

/// One raw sales row, at any date within a month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    #[serde(alias = "Date", alias = "DATE", alias = "order_date", alias = "sales_date")]
    pub date: NaiveDate,
    #[serde(alias = "Sales", alias = "SALES", alias = "amount")]
    pub sales: f64,
}

/// Sum sales per calendar month into a month-end labelled series
///
/// Records may arrive in any order. A calendar month with no records between
/// the first and last month is an error; missing months are never filled.
pub fn aggregate_monthly(records: &[SalesRecord]) -> Result<TimeSeries> {
    let mut totals: BTreeMap<(i32, u32), f64> = BTreeMap::new();
    for record in records {
        *totals
            .entry((record.date.year(), record.date.month()))
            .or_insert(0.0) += record.sales;
    }

    let observations = totals
        .into_iter()
        .map(|((year, month), total)| {
            NaiveDate::from_ymd_opt(year, month, 1)
                .and_then(month_end)
                .map(|date| Observation::new(date, total))
                .ok_or_else(|| {
                    ForecastError::DataError(format!("Invalid month {}-{:02}", year, month))
                })
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(
        records = records.len(),
        months = observations.len(),
        "aggregated sales records"
    );

    TimeSeries::from_observations(observations)
}

/// Data loader for sales CSV files
#[derive(Debug)]
pub struct DataLoader;

impl DataLoader {
    /// Read raw sales rows from a headered CSV file
    ///
    /// The file needs a date column (`date`, `Date`, `order_date`, ...) in
    /// `YYYY-MM-DD` form and a sales column (`sales`, `Sales`, `amount`).
    /// Other columns are ignored.
    pub fn records_from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<SalesRecord>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(path.as_ref())?;

        let records = reader
            .deserialize()
            .collect::<std::result::Result<Vec<SalesRecord>, csv::Error>>()?;

        if records.is_empty() {
            return Err(ForecastError::DataError(format!(
                "No sales rows found in {}",
                path.as_ref().display()
            )));
        }

        Ok(records)
    }

    /// Read a CSV file and aggregate it into a monthly series
    pub fn monthly_series_from_csv<P: AsRef<Path>>(path: P) -> Result<TimeSeries> {
        let records = Self::records_from_csv(path)?;
        aggregate_monthly(&records)
    }
}
