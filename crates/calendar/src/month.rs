//! Month lengths, leap years, and the `YearMonth` calendar-month type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::date::CalendarDate;
use crate::error::CalendarError;

/// Number of days in each month of a common year (index 0 unused, index 1 = January).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Smallest year representable as four digits.
pub const MIN_YEAR: i32 = 0;

/// Largest year representable as four digits.
pub const MAX_YEAR: i32 = 9999;

/// Returns `true` if `year` is a leap year in the proleptic Gregorian calendar.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in `month` of `year`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    Ok(month_length(year, month))
}

/// Month length for an already-validated month.
pub(crate) fn month_length(year: i32, month: u8) -> u8 {
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS_PER_MONTH[month as usize]
    }
}

pub(crate) fn check_year(year: i32) -> Result<(), CalendarError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(CalendarError::YearOutOfRange { year });
    }
    Ok(())
}

/// One calendar month, e.g. January 2024.
///
/// Ordered chronologically. Displays and parses as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u8,
}

impl YearMonth {
    /// Creates a new `YearMonth`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12,
    /// or [`CalendarError::YearOutOfRange`] if `year` is not in 0..=9999.
    pub fn new(year: i32, month: u8) -> Result<Self, CalendarError> {
        check_year(year)?;
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        Ok(Self { year, month })
    }

    /// Returns the month containing `date`.
    pub fn of(date: CalendarDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the number of days in this month.
    pub fn days(self) -> u8 {
        month_length(self.year, self.month)
    }

    /// Returns the first day of this month.
    pub fn first_day(self) -> CalendarDate {
        CalendarDate::from_valid(self.year, self.month, 1)
    }

    /// Returns the last day of this month.
    pub fn last_day(self) -> CalendarDate {
        CalendarDate::from_valid(self.year, self.month, self.days())
    }

    /// Returns every date of this month in ascending order.
    pub fn dates(self) -> Vec<CalendarDate> {
        (1..=self.days())
            .map(|day| CalendarDate::from_valid(self.year, self.month, day))
            .collect()
    }

    /// Returns `true` if `date` falls within this month.
    pub fn contains(self, date: CalendarDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Returns the preceding month, wrapping January to December of the
    /// previous year.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] before January of year 0.
    pub fn prev(self) -> Result<Self, CalendarError> {
        if self.month == 1 {
            Self::new(self.year - 1, 12)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }

    /// Returns the following month, wrapping December to January of the
    /// next year.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] after December of year 9999.
    pub fn next(self) -> Result<Self, CalendarError> {
        if self.month == 12 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CalendarError::InvalidMonthFormat {
            input: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 7 || bytes[4] != b'-' {
            return Err(invalid());
        }
        let year = crate::parse::digits(&bytes[0..4]).ok_or_else(invalid)?;
        let month = crate::parse::digits(&bytes[5..7]).ok_or_else(invalid)?;
        Self::new(year as i32, month as u8).map_err(|_| invalid())
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
