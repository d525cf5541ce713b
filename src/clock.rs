//! System clock access, reduced to a calendar date.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use cyclecast_calendar::CalendarDate;

const SECONDS_PER_DAY: u64 = 86_400;

/// Today's date in UTC.
pub fn today_utc() -> Result<CalendarDate> {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock is before 1970-01-01")?
        .as_secs();
    let days = i64::try_from(secs / SECONDS_PER_DAY).context("system clock out of range")?;
    CalendarDate::from_days_since_epoch(days).context("system clock out of range")
}
