//! Calendar helpers for monthly series

use crate::error::{ForecastError, Result};
use chrono::{Datelike, Months, NaiveDate};

/// Whether a date is the last day of its month
pub fn is_month_end(date: NaiveDate) -> bool {
    match date.succ_opt() {
        Some(next) => next.month() != date.month(),
        None => true,
    }
}

/// Last day of the month containing `date`
pub fn month_end(date: NaiveDate) -> Option<NaiveDate> {
    date.with_day(1)?
        .checked_add_months(Months::new(1))?
        .pred_opt()
}

/// Signed number of calendar months from `from` to `to`, ignoring the day
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i64 {
    let from = i64::from(from.year()) * 12 + i64::from(from.month0());
    let to = i64::from(to.year()) * 12 + i64::from(to.month0());
    to - from
}

/// Shift a date forward by whole months
///
/// Month-end dates stay on month-ends. Any other day keeps its day-of-month,
/// clamped to the length of the target month.
pub fn add_months(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    if is_month_end(date) {
        month_end(date.with_day(1)?.checked_add_months(Months::new(months))?)
    } else {
        date.checked_add_months(Months::new(months))
    }
}

/// Dates of the `horizon` months immediately following `last`
pub fn future_monthly_dates(last: NaiveDate, horizon: usize) -> Result<Vec<NaiveDate>> {
    (1..=horizon)
        .map(|step| {
            u32::try_from(step)
                .ok()
                .and_then(|step| add_months(last, step))
                .ok_or_else(|| {
                    ForecastError::InvalidParameter(format!(
                        "Cannot project {} months past {}",
                        step, last
                    ))
                })
        })
        .collect()
}
