//! Contiguous date sequences.

use crate::date::CalendarDate;

/// Returns every date from `first` to `last`, both inclusive.
///
/// Empty when `last` precedes `first`.
pub fn date_range_inclusive(first: CalendarDate, last: CalendarDate) -> Vec<CalendarDate> {
    let (a, b) = (first.days_since_epoch(), last.days_since_epoch());
    (a..=b)
        .filter_map(|days| CalendarDate::from_days_since_epoch(days).ok())
        .collect()
}
