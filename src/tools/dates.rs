//! Calendar date difference, reported as approximate years, months and days
//! (365-day years, 30-day months).

use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error, PartialEq, Eq)]
#[error("expected a date as YYYY-MM-DD, got {input:?}: {source}")]
pub struct DateError {
    input: String,
    source: chrono::ParseError,
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(input: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|source| DateError {
        input: input.to_string(),
        source,
    })
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DateDifference {
    pub total_days: u64,
    pub years: u64,
    pub months: u64,
    pub days: u64,
}

impl DateDifference {
    pub fn from_days(total_days: u64) -> Self {
        let rest = total_days % 365;
        Self {
            total_days,
            years: total_days / 365,
            months: rest / 30,
            days: rest % 30,
        }
    }
}

impl fmt::Display for DateDifference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} years, {} months, {} days",
            self.years, self.months, self.days
        )
    }
}

/// Absolute difference between two dates; argument order does not matter.
pub fn difference(a: NaiveDate, b: NaiveDate) -> DateDifference {
    DateDifference::from_days((b - a).num_days().unsigned_abs())
}

/// Parses both dates as `YYYY-MM-DD` and returns their difference.
pub fn difference_between(a: &str, b: &str) -> Result<DateDifference, DateError> {
    Ok(difference(parse_date(a)?, parse_date(b)?))
}
