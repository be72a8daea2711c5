//! Calendar periods.
//!
//! Employee and shop figures are aggregated per calendar month.  This
//! module reads the current month from the local clock and provides the
//! month arithmetic callers need to page through history.

use crate::error::{BonusError, BonusResult};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar month that all aggregation is keyed by.
///
/// The month is always 1 to 12: fields are private and deserialisation
/// goes through [`Period::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawPeriod")]
pub struct Period {
    year: i32,
    month: u32,
}

/// Unvalidated wire form of a [`Period`].
#[derive(Deserialize)]
struct RawPeriod {
    year: i32,
    month: u32,
}

impl TryFrom<RawPeriod> for Period {
    type Error = BonusError;

    fn try_from(raw: RawPeriod) -> Result<Self, Self::Error> {
        Period::new(raw.year, raw.month)
    }
}

/// The current calendar month on the local clock.
pub fn current_period() -> Period {
    Period::from_date(Local::now().date_naive())
}

impl Period {
    /// A validated period; `month` must be 1 to 12.
    pub fn new(year: i32, month: u32) -> BonusResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(BonusError::InvalidPeriod { year, month });
        }
        Ok(Period { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month of the year, 1 to 12.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The period containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Period {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month before this one.
    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Period { year: self.year - 1, month: 12 }
        } else {
            Period { year: self.year, month: self.month - 1 }
        }
    }

    /// The month after this one.
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Period { year: self.year + 1, month: 1 }
        } else {
            Period { year: self.year, month: self.month + 1 }
        }
    }

    /// First day of the period.
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
