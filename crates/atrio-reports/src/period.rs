//! Month periods for the report inbox.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One calendar month of closing reports.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct MonthPeriod {
    pub year: i32,
    /// 1-based calendar month.
    pub month: u8,
}

impl MonthPeriod {
    pub fn new(year: i32, month: u8) -> Self {
        Self { year, month }
    }

    /// The period a date falls in.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month() as u8,
        }
    }

    /// The following month, rolling over the year boundary.
    pub fn next(&self) -> Self {
        if self.month >= 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Inbox label, e.g. `"2025-06"`.
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    /// The dynamic feature id for this month's inbox row, resolved through
    /// the flat override store like any other id.
    pub fn feature_id(&self) -> String {
        format!("reports.{}.{}", self.year, self.month)
    }
}

impl fmt::Display for MonthPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// All months from `start` through `end`, inclusive and in order. Empty
/// when `start` falls after `end`.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> Vec<MonthPeriod> {
    let mut months = Vec::new();
    let mut current = MonthPeriod::from_date(start);
    let last = MonthPeriod::from_date(end);
    while current <= last {
        months.push(current);
        current = current.next();
    }
    months
}
