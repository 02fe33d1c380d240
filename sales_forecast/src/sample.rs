//! Synthetic monthly sales for demos and benchmarks

use crate::data::TimeSeries;
use crate::error::{ForecastError, Result};
use chrono::{Datelike, NaiveDate};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Uniform};
use std::f64::consts::PI;

/// Generates monthly sales with a yearly growth step, a twelve-month
/// sinusoidal season and multiplicative uniform noise
#[derive(Debug, Clone)]
pub struct SampleDataGenerator {
    start: NaiveDate,
    months: usize,
    base_sales: f64,
    yearly_growth: f64,
    seasonal_amplitude: f64,
    noise: (f64, f64),
    seed: u64,
}

impl Default for SampleDataGenerator {
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2010, 1, 31).unwrap_or_default(),
            months: 72,
            base_sales: 1000.0,
            yearly_growth: 200.0,
            seasonal_amplitude: 0.3,
            noise: (0.8, 1.2),
            seed: 42,
        }
    }
}

impl SampleDataGenerator {
    /// Create a generator with the default shape
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the first month
    pub fn start(mut self, start: NaiveDate) -> Self {
        self.start = start;
        self
    }

    /// Set the number of months generated
    pub fn months(mut self, months: usize) -> Self {
        self.months = months;
        self
    }

    /// Set the sales level of the first year and the increase per year
    pub fn trend(mut self, base_sales: f64, yearly_growth: f64) -> Self {
        self.base_sales = base_sales;
        self.yearly_growth = yearly_growth;
        self
    }

    /// Set the relative amplitude of the seasonal swing
    pub fn seasonal_amplitude(mut self, amplitude: f64) -> Self {
        self.seasonal_amplitude = amplitude;
        self
    }

    /// Set the bounds of the multiplicative noise; equal bounds disable it
    pub fn noise(mut self, low: f64, high: f64) -> Self {
        self.noise = (low, high);
        self
    }

    /// Set the random seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Generate the series
    pub fn generate(&self) -> Result<TimeSeries> {
        let (low, high) = self.noise;
        if !(low.is_finite() && high.is_finite()) || low > high || low < 0.0 {
            return Err(ForecastError::InvalidParameter(format!(
                "Noise bounds must satisfy 0 <= low <= high, got ({}, {})",
                low, high
            )));
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let noise = (low < high).then(|| Uniform::new(low, high));

        let template = TimeSeries::monthly_from(self.start, vec![0.0; self.months])?;
        let values = template
            .dates()
            .into_iter()
            .enumerate()
            .map(|(i, date)| {
                let trend = self.base_sales + (i / 12) as f64 * self.yearly_growth;
                let angle = 2.0 * PI * f64::from(date.month()) / 12.0;
                let season = 1.0 + self.seasonal_amplitude * angle.sin();
                let factor = noise.as_ref().map_or(low, |dist| dist.sample(&mut rng));
                (trend * season * factor).max(0.0)
            })
            .collect();

        TimeSeries::new(template.dates(), values)
    }
}
