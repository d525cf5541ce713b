//! Per-day classification of a calendar month.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use cyclecast_calendar::{CalendarDate, YearMonth};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entry::CycleEntry;
use crate::error::CycleError;
use crate::profile::{MIN_PLAUSIBLE_CYCLE_LENGTH, validate_cycle_length};
use crate::window::{
    FERTILE_END_OFFSET, FERTILE_START_OFFSET, LUTEAL_PHASE_DAYS, PERIOD_LENGTH_DAYS,
};

/// Classification of a single day.
///
/// Variants are declared in ascending precedence, so `Ord` ranks them
/// `None < Fertile < Ovulation < Period` and the winning class of a day is
/// the maximum of the classes it belongs to.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DayClass {
    /// Outside every window.
    #[default]
    None,
    /// Inside a fertile window.
    Fertile,
    /// An estimated ovulation day.
    Ovulation,
    /// An assumed period day.
    Period,
}

impl DayClass {
    /// Every class, highest precedence first.
    pub const BY_PRECEDENCE: [DayClass; 4] = [
        DayClass::Period,
        DayClass::Ovulation,
        DayClass::Fertile,
        DayClass::None,
    ];

    /// Lowercase label, matching the serde form.
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Fertile => "fertile",
            Self::Ovulation => "ovulation",
            Self::Period => "period",
        }
    }
}

impl fmt::Display for DayClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Day counts per class for one month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MonthSummary {
    pub period: usize,
    pub ovulation: usize,
    pub fertile: usize,
    pub none: usize,
}

impl MonthSummary {
    /// Returns the number of days assigned `class`.
    pub fn count(&self, class: DayClass) -> usize {
        match class {
            DayClass::Period => self.period,
            DayClass::Ovulation => self.ovulation,
            DayClass::Fertile => self.fertile,
            DayClass::None => self.none,
        }
    }
}

/// Classification of every day of one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthClassification {
    month: YearMonth,
    days: BTreeMap<CalendarDate, DayClass>,
}

impl MonthClassification {
    /// Returns the classified month.
    pub fn month(&self) -> YearMonth {
        self.month
    }

    /// Returns the class of `date`, or `None` if it lies outside the month.
    pub fn get(&self, date: CalendarDate) -> Option<DayClass> {
        self.days.get(&date).copied()
    }

    /// Iterates days in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = (CalendarDate, DayClass)> + '_ {
        self.days.iter().map(|(&d, &c)| (d, c))
    }

    /// Returns the number of classified days (the month length).
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Returns `true` if no day was classified.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Returns the days assigned `class`, in ascending order.
    pub fn days_with(&self, class: DayClass) -> Vec<CalendarDate> {
        self.iter()
            .filter(|&(_, c)| c == class)
            .map(|(d, _)| d)
            .collect()
    }

    /// Counts days per class.
    pub fn summary(&self) -> MonthSummary {
        let mut summary = MonthSummary::default();
        for class in self.days.values() {
            match class {
                DayClass::Period => summary.period += 1,
                DayClass::Ovulation => summary.ovulation += 1,
                DayClass::Fertile => summary.fertile += 1,
                DayClass::None => summary.none += 1,
            }
        }
        summary
    }

    /// Returns the underlying date-to-class map.
    pub fn as_map(&self) -> &BTreeMap<CalendarDate, DayClass> {
        &self.days
    }
}

/// Day-number bounds of one month, used to clip window offsets.
#[derive(Debug, Clone, Copy)]
struct MonthSpan {
    first: i64,
    last: i64,
}

impl MonthSpan {
    fn of(month: YearMonth) -> Self {
        Self {
            first: month.first_day().days_since_epoch(),
            last: month.last_day().days_since_epoch(),
        }
    }

    /// Dates `start + lo ..= start + hi` that fall inside the month.
    ///
    /// Clipping happens on day numbers; no date outside the month is built.
    fn dates(self, start: CalendarDate, lo: i32, hi: i32) -> impl Iterator<Item = CalendarDate> {
        let base = start.days_since_epoch();
        let from = (base + i64::from(lo)).max(self.first);
        let to = (base + i64::from(hi)).min(self.last);
        (from..=to).filter_map(|days| CalendarDate::from_days_since_epoch(days).ok())
    }
}

/// Classifies every day of `month` against the windows of all `entries`.
///
/// Period, ovulation, and fertile dates are collected across every entry
/// (only those inside `month` are kept), then each day takes its
/// highest-precedence class: `Period > Ovulation > Fertile > None`.
///
/// Windows are clipped to `month` before any date is built. An entry whose
/// window would run past 0000-01-01 or 9999-12-31 only contributes the days
/// that land in `month`.
///
/// # Errors
///
/// Returns [`CycleError::InvalidCycleLength`] if `cycle_length < 1`.
#[tracing::instrument(skip(entries), fields(n_entries = entries.len()))]
pub fn classify(
    month: YearMonth,
    entries: &[CycleEntry],
    cycle_length: i32,
) -> Result<MonthClassification, CycleError> {
    validate_cycle_length(cycle_length)?;
    if cycle_length < MIN_PLAUSIBLE_CYCLE_LENGTH {
        debug!(cycle_length, "cycle length below luteal phase");
    }

    let span = MonthSpan::of(month);
    let ovulation_offset = cycle_length - LUTEAL_PHASE_DAYS;
    let mut period = BTreeSet::new();
    let mut ovulation = BTreeSet::new();
    let mut fertile = BTreeSet::new();

    for entry in entries {
        let start = entry.start_date();
        period.extend(span.dates(start, 0, PERIOD_LENGTH_DAYS - 1));
        ovulation.extend(span.dates(start, ovulation_offset, ovulation_offset));
        fertile.extend(span.dates(
            start,
            cycle_length - FERTILE_START_OFFSET,
            cycle_length - FERTILE_END_OFFSET,
        ));
    }

    let days: BTreeMap<CalendarDate, DayClass> = month
        .dates()
        .into_iter()
        .map(|date| {
            let class = if period.contains(&date) {
                DayClass::Period
            } else if ovulation.contains(&date) {
                DayClass::Ovulation
            } else if fertile.contains(&date) {
                DayClass::Fertile
            } else {
                DayClass::None
            };
            (date, class)
        })
        .collect();

    debug!(
        period = period.len(),
        ovulation = ovulation.len(),
        fertile = fertile.len(),
        "month classified"
    );
    Ok(MonthClassification { month, days })
}

/// Classifies `month` of `year`. See [`classify`].
///
/// # Errors
///
/// Returns [`CycleError::InvalidCycleLength`] if `cycle_length < 1`, and
/// [`CycleError::Calendar`] if `month` is not 1..=12 or `year` is not
/// 0..=9999.
///
/// # Example
///
/// ```
/// use cyclecast_calendar::CalendarDate;
/// use cyclecast_cycle::{CycleEntry, DayClass, EntryId, classify_month};
///
/// let start = CalendarDate::new(2024, 1, 1).unwrap();
/// let entries = [CycleEntry::started(EntryId::new(1), start)];
/// let jan = classify_month(2024, 1, &entries, 28).unwrap();
///
/// assert_eq!(jan.len(), 31);
/// assert_eq!(jan.get(start), Some(DayClass::Period));
/// assert_eq!(jan.get(CalendarDate::new(2024, 1, 15).unwrap()), Some(DayClass::Ovulation));
/// ```
pub fn classify_month(
    year: i32,
    month: u8,
    entries: &[CycleEntry],
    cycle_length: i32,
) -> Result<MonthClassification, CycleError> {
    validate_cycle_length(cycle_length)?;
    let month = YearMonth::new(year, month)?;
    classify(month, entries, cycle_length)
}
