//! Period, ovulation, and fertile-window dates for one cycle.

use cyclecast_calendar::{CalendarDate, date_range_inclusive};
use serde::Serialize;
use tracing::debug;

use crate::error::CycleError;
use crate::profile::{MIN_PLAUSIBLE_CYCLE_LENGTH, validate_cycle_length};

/// Assumed period duration in days, counting the start day.
pub const PERIOD_LENGTH_DAYS: i32 = 5;

/// Assumed luteal-phase length: ovulation is this many days before the next period.
pub const LUTEAL_PHASE_DAYS: i32 = 14;

/// The fertile window opens this many days before the next period.
pub const FERTILE_START_OFFSET: i32 = 19;

/// The fertile window closes this many days before the next period.
pub const FERTILE_END_OFFSET: i32 = 10;

/// Derived dates for a single cycle. Recomputed on every request.
///
/// All ranges are inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CycleWindow {
    /// First day of the period (the recorded start date).
    pub period_start: CalendarDate,
    /// Last assumed period day, `PERIOD_LENGTH_DAYS - 1` after the start.
    pub period_end: CalendarDate,
    /// Estimated ovulation day.
    pub ovulation_day: CalendarDate,
    /// First day of the fertile window.
    pub fertile_start: CalendarDate,
    /// Last day of the fertile window.
    pub fertile_end: CalendarDate,
}

impl CycleWindow {
    /// Returns the period days in ascending order.
    pub fn period_days(&self) -> Vec<CalendarDate> {
        date_range_inclusive(self.period_start, self.period_end)
    }

    /// Returns the fertile-window days in ascending order.
    pub fn fertile_days(&self) -> Vec<CalendarDate> {
        date_range_inclusive(self.fertile_start, self.fertile_end)
    }

    /// Returns `true` if `date` is an assumed period day.
    pub fn contains_period(&self, date: CalendarDate) -> bool {
        (self.period_start..=self.period_end).contains(&date)
    }

    /// Returns `true` if `date` is inside the fertile window.
    pub fn contains_fertile(&self, date: CalendarDate) -> bool {
        (self.fertile_start..=self.fertile_end).contains(&date)
    }

    /// Returns `true` if `date` is the ovulation day.
    pub fn is_ovulation(&self, date: CalendarDate) -> bool {
        self.ovulation_day == date
    }
}

/// Computes the cycle window for a period starting on `start`.
///
/// - period: `start ..= start + 4`
/// - ovulation: `start + (cycle_length - 14)`
/// - fertile: `start + (cycle_length - 19) ..= start + (cycle_length - 10)`
///
/// Cycle lengths from 1 to 13 are accepted as-is. Their ovulation and
/// fertile dates land before `start`; nothing is clamped.
///
/// # Errors
///
/// Returns [`CycleError::InvalidCycleLength`] if `cycle_length < 1`, or
/// [`CycleError::Calendar`] if a derived date leaves the supported range.
///
/// # Example
///
/// ```
/// use cyclecast_calendar::parse_date;
/// use cyclecast_cycle::compute_window;
///
/// let window = compute_window(parse_date("2024-01-01").unwrap(), 28).unwrap();
/// assert_eq!(window.ovulation_day.to_string(), "2024-01-15");
/// assert_eq!(window.fertile_start.to_string(), "2024-01-10");
/// assert_eq!(window.fertile_end.to_string(), "2024-01-19");
/// ```
pub fn compute_window(
    start: CalendarDate,
    cycle_length: i32,
) -> Result<CycleWindow, CycleError> {
    validate_cycle_length(cycle_length)?;
    if cycle_length < MIN_PLAUSIBLE_CYCLE_LENGTH {
        debug!(
            %start,
            cycle_length,
            "cycle length below luteal phase; ovulation precedes period start"
        );
    }
    let offset = |days: i32| start.add_days(i64::from(days));
    Ok(CycleWindow {
        period_start: start,
        period_end: offset(PERIOD_LENGTH_DAYS - 1)?,
        ovulation_day: offset(cycle_length - LUTEAL_PHASE_DAYS)?,
        fertile_start: offset(cycle_length - FERTILE_START_OFFSET)?,
        fertile_end: offset(cycle_length - FERTILE_END_OFFSET)?,
    })
}
