//! Next-period prediction.

use cyclecast_calendar::{CalendarDate, YearMonth, days_between};

use crate::entry::CycleEntry;
use crate::error::CycleError;
use crate::profile::validate_cycle_length;

/// Returns the entry with the latest start date, regardless of input order.
///
/// When several entries share the latest start date, the last one wins.
pub fn latest_entry(entries: &[CycleEntry]) -> Option<&CycleEntry> {
    entries.iter().max_by_key(|e| e.start_date())
}

/// Predicts the next period start: the latest recorded start plus
/// `cycle_length` days.
///
/// Returns `Ok(None)` for an empty history.
///
/// # Errors
///
/// Returns [`CycleError::InvalidCycleLength`] if `cycle_length < 1` (checked
/// even when `entries` is empty), or [`CycleError::Calendar`] if the
/// prediction leaves the supported date range.
pub fn predict_next(
    entries: &[CycleEntry],
    cycle_length: i32,
) -> Result<Option<CalendarDate>, CycleError> {
    validate_cycle_length(cycle_length)?;
    let Some(latest) = latest_entry(entries) else {
        return Ok(None);
    };
    let next = latest.start_date().add_days(i64::from(cycle_length))?;
    Ok(Some(next))
}

/// Returns the day of the current cycle on `today`, counting the latest
/// recorded start as day 1.
///
/// `None` when there are no entries or the latest start lies after `today`.
pub fn cycle_day(entries: &[CycleEntry], today: CalendarDate) -> Option<u32> {
    let latest = latest_entry(entries)?;
    let day = days_between(latest.start_date(), today) + 1;
    u32::try_from(day).ok().filter(|&d| d > 0)
}

/// Picks the month to show first: the month of the latest entry, or the
/// month containing `today` when there are no entries.
pub fn default_display_month(entries: &[CycleEntry], today: CalendarDate) -> YearMonth {
    let anchor = latest_entry(entries).map_or(today, |e| e.start_date());
    YearMonth::of(anchor)
}
