//! Calendar boundaries for the document period

use chrono::{Months, NaiveDate};

use crate::error::{Error, Result};

const DATE_FORMAT: &str = "%d/%m/%Y";

/// First and last calendar day of a month, both formatted `DD/MM/YYYY`.
/// Month lengths and leap years come from `chrono`.
pub fn first_last_day(year: i32, month: u32) -> Result<(String, String)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or(Error::InvalidMonth(month))?;
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|d| d.pred_opt())
        .ok_or_else(|| Error::Validation(format!("year {year} is out of range")))?;
    Ok((
        first.format(DATE_FORMAT).to_string(),
        last.format(DATE_FORMAT).to_string(),
    ))
}
