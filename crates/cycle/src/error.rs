//! Error types for the cyclecast-cycle crate.

use cyclecast_calendar::{CalendarDate, CalendarError};

/// Error type for all fallible operations in the cyclecast-cycle crate.
///
/// The engine never recovers from these itself; callers decide how to
/// surface them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CycleError {
    /// Returned when a cycle length is below one day.
    #[error("invalid cycle length: {cycle_length} (must be >= 1)")]
    InvalidCycleLength {
        /// The cycle length that was provided.
        cycle_length: i32,
    },

    /// Returned when an entry's end date precedes its start date.
    #[error("entry end date {end} is before its start date {start}")]
    EndBeforeStart {
        /// The recorded period start.
        start: CalendarDate,
        /// The recorded period end.
        end: CalendarDate,
    },

    /// Wraps an error from the calendar crate (bad month, date out of range).
    #[error("calendar error: {0}")]
    Calendar(#[from] CalendarError),
}
