//! Timezone-free calendar date.

use crate::civil::{civil_from_days, days_from_civil};
use crate::error::CalendarError;
use crate::month::{check_year, month_length};

/// Day number of 0000-01-01.
const MIN_DAYS: i64 = days_from_civil(0, 1, 1);

/// Day number of 9999-12-31.
const MAX_DAYS: i64 = days_from_civil(9999, 12, 31);

/// A proleptic Gregorian date with no time of day and no timezone.
///
/// Equality and ordering compare `(year, month, day)` lexicographically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// Creates a new `CalendarDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] if `year` is not in 0..=9999,
    /// [`CalendarError::InvalidMonth`] if `month` is not in 1..=12, or
    /// [`CalendarError::InvalidDay`] if `day` does not exist in that month
    /// (February 29 is valid only in leap years).
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        check_year(year)?;
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        let max_day = month_length(year, month);
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Builds a date from components the caller has already validated.
    pub(crate) fn from_valid(year: i32, month: u8, day: u8) -> Self {
        debug_assert!(Self::new(year, month, day).is_ok());
        Self { year, month, day }
    }

    /// Creates a date from a day number counted from 1970-01-01.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] if the day number lies outside
    /// 0000-01-01..=9999-12-31.
    pub fn from_days_since_epoch(days: i64) -> Result<Self, CalendarError> {
        if !(MIN_DAYS..=MAX_DAYS).contains(&days) {
            return Err(CalendarError::OutOfRange { days });
        }
        let (year, month, day) = civil_from_days(days);
        Ok(Self::from_valid(year, month, day))
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the number of days since 1970-01-01 (negative before it).
    pub fn days_since_epoch(self) -> i64 {
        days_from_civil(self.year, self.month, self.day)
    }

    /// Returns the date `n` days after this one (`n` may be negative).
    ///
    /// Month, year, and leap-day boundaries are handled through the day
    /// number, never through a timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] if the result would fall
    /// outside 0000-01-01..=9999-12-31.
    pub fn add_days(self, n: i64) -> Result<Self, CalendarError> {
        Self::from_days_since_epoch(self.days_since_epoch().saturating_add(n))
    }

    /// Returns the signed number of days from `self` to `other`.
    pub fn days_until(self, other: Self) -> i64 {
        other.days_since_epoch() - self.days_since_epoch()
    }
}

/// Returns the date `n` days after `date`.
///
/// Free-function form of [`CalendarDate::add_days`].
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] if the result leaves the supported range.
pub fn add_days(date: CalendarDate, n: i64) -> Result<CalendarDate, CalendarError> {
    date.add_days(n)
}

/// Returns the signed number of days from `from` to `to`.
pub fn days_between(from: CalendarDate, to: CalendarDate) -> i64 {
    from.days_until(to)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn new_valid() {
        let d = date(2024, 2, 29);
        assert_eq!(d.year(), 2024);
        assert_eq!(d.month(), 2);
        assert_eq!(d.day(), 29);
    }

    #[test]
    fn new_invalid_month() {
        assert_eq!(
            CalendarDate::new(2024, 13, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn new_feb_29_non_leap() {
        assert_eq!(
            CalendarDate::new(2023, 2, 29).unwrap_err(),
            CalendarError::InvalidDay {
                day: 29,
                month: 2,
                max_day: 28,
            }
        );
    }

    #[test]
    fn new_invalid_day_zero() {
        assert_eq!(
            CalendarDate::new(2024, 4, 0).unwrap_err(),
            CalendarError::InvalidDay {
                day: 0,
                month: 4,
                max_day: 30,
            }
        );
    }

    #[test]
    fn new_year_out_of_range() {
        assert_eq!(
            CalendarDate::new(10_000, 1, 1).unwrap_err(),
            CalendarError::YearOutOfRange { year: 10_000 }
        );
    }

    #[test]
    fn add_days_leap_boundaries() {
        assert_eq!(date(2024, 2, 28).add_days(1).unwrap(), date(2024, 2, 29));
        assert_eq!(date(2024, 2, 29).add_days(1).unwrap(), date(2024, 3, 1));
        assert_eq!(date(2023, 2, 28).add_days(1).unwrap(), date(2023, 3, 1));
    }

    #[test]
    fn add_days_year_boundary() {
        assert_eq!(date(2023, 12, 31).add_days(1).unwrap(), date(2024, 1, 1));
        assert_eq!(date(2024, 1, 1).add_days(-1).unwrap(), date(2023, 12, 31));
    }

    #[test]
    fn add_days_negative_across_leap_day() {
        assert_eq!(date(2024, 3, 1).add_days(-1).unwrap(), date(2024, 2, 29));
        assert_eq!(date(2024, 1, 1).add_days(-9).unwrap(), date(2023, 12, 23));
    }

    #[test]
    fn add_days_zero_is_identity() {
        let d = date(2024, 7, 4);
        assert_eq!(d.add_days(0).unwrap(), d);
    }

    #[test]
    fn add_days_large_offset() {
        // 2000 was a leap year: 366 days to the same date next year.
        assert_eq!(date(2000, 1, 1).add_days(366).unwrap(), date(2001, 1, 1));
        assert_eq!(date(2001, 1, 1).add_days(365).unwrap(), date(2002, 1, 1));
    }

    #[test]
    fn add_days_out_of_range() {
        assert!(matches!(
            date(9999, 12, 31).add_days(1),
            Err(CalendarError::OutOfRange { .. })
        ));
        assert!(matches!(
            date(0, 1, 1).add_days(-1),
            Err(CalendarError::OutOfRange { .. })
        ));
        assert!(matches!(
            date(2024, 1, 1).add_days(i64::MAX),
            Err(CalendarError::OutOfRange { days: i64::MAX })
        ));
    }

    #[test]
    fn days_between_signed() {
        let a = date(2024, 1, 1);
        let b = date(2024, 3, 1);
        assert_eq!(days_between(a, b), 60);
        assert_eq!(days_between(b, a), -60);
        assert_eq!(days_between(a, a), 0);
    }

    #[test]
    fn free_add_days_matches_method() {
        let d = date(2024, 1, 31);
        assert_eq!(add_days(d, 1).unwrap(), d.add_days(1).unwrap());
    }

    #[test]
    fn ord_lexicographic() {
        assert!(date(2023, 12, 31) < date(2024, 1, 1));
        assert!(date(2024, 1, 31) < date(2024, 2, 1));
        assert!(date(2024, 2, 1) < date(2024, 2, 2));
    }

    #[test]
    fn epoch_round_trip() {
        let d = date(1970, 1, 1);
        assert_eq!(d.days_since_epoch(), 0);
        assert_eq!(CalendarDate::from_days_since_epoch(0).unwrap(), d);
        assert_eq!(
            CalendarDate::from_days_since_epoch(19_723).unwrap(),
            date(2024, 1, 1)
        );
    }

    #[test]
    fn copy_and_hash_traits() {
        fn assert_copy<T: Copy>() {}
        fn assert_hash<T: std::hash::Hash>() {}
        assert_copy::<CalendarDate>();
        assert_hash::<CalendarDate>();
    }
}
