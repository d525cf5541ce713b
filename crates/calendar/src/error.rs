//! Error types for the cyclecast-calendar crate.

/// Error type for all fallible operations in the cyclecast-calendar crate.
///
/// Covers text that does not follow the `YYYY-MM-DD` / `YYYY-MM` grammars,
/// component validation failures for the proleptic Gregorian calendar, and
/// arithmetic that leaves the four-digit year range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when text is not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid date format: {input:?} (expected YYYY-MM-DD)")]
    InvalidDateFormat {
        /// The text that failed to parse.
        input: String,
    },

    /// Returned when text is not a valid `YYYY-MM` calendar month.
    #[error("invalid month format: {input:?} (expected YYYY-MM)")]
    InvalidMonthFormat {
        /// The text that failed to parse.
        input: String,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },

    /// Returned when a year cannot be written as four digits.
    #[error("year out of range: {year} (must be 0..=9999)")]
    YearOutOfRange {
        /// The year that was provided.
        year: i32,
    },

    /// Returned when a day number (days since 1970-01-01) falls outside
    /// 0000-01-01..=9999-12-31.
    #[error("day number out of range: {days}")]
    OutOfRange {
        /// The day number that could not be represented.
        days: i64,
    },
}
