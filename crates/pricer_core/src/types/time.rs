//! Trade dates and the ACT/365 accrual used by the swap backend.
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::time::{year_fraction_act365, Date};
//!
//! let start: Date = "2024-01-01".parse().unwrap();
//! let end = Date::from_ymd(2024, 7, 1).unwrap();
//! assert!((year_fraction_act365(start, end) - 0.4986).abs() < 0.001);
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Calendar date of a trade leg.
///
/// Serialises as an ISO 8601 string (`YYYY-MM-DD`). Subtracting two dates
/// gives the actual number of days between them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Builds a date, rejecting impossible calendar days.
    ///
    /// ```
    /// use pricer_core::types::time::Date;
    ///
    /// assert!(Date::from_ymd(2024, 2, 29).is_ok());
    /// assert!(Date::from_ymd(2024, 2, 30).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }
}

impl Sub for Date {
    type Output = i64;

    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(e.to_string()))
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Actual days from `start` to `end` over 365.
///
/// Negative when `end` precedes `start`; callers that accrue floor it.
pub fn year_fraction_act365(start: Date, end: Date) -> f64 {
    (end - start) as f64 / 365.0
}
