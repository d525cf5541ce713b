//! Recorded period entries.

use std::fmt;

use cyclecast_calendar::CalendarDate;
use serde::{Deserialize, Serialize};

use crate::error::CycleError;

/// Identifier assigned to an entry by the persistence layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(u64);

impl EntryId {
    /// Wraps a raw identifier.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One recorded period start.
///
/// The engine reads entries and never mutates them. `end_date` is kept for
/// the record only; window math always assumes a fixed-length period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EntryRecord")]
pub struct CycleEntry {
    id: EntryId,
    start_date: CalendarDate,
    end_date: Option<CalendarDate>,
    notes: String,
}

/// Unchecked serde shape of [`CycleEntry`].
#[derive(Deserialize)]
struct EntryRecord {
    id: EntryId,
    start_date: CalendarDate,
    #[serde(default)]
    end_date: Option<CalendarDate>,
    #[serde(default)]
    notes: Option<String>,
}

impl TryFrom<EntryRecord> for CycleEntry {
    type Error = CycleError;

    fn try_from(record: EntryRecord) -> Result<Self, Self::Error> {
        Self::new(
            record.id,
            record.start_date,
            record.end_date,
            record.notes.unwrap_or_default(),
        )
    }
}

impl CycleEntry {
    /// Creates an entry.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError::EndBeforeStart`] if `end_date` precedes `start_date`.
    pub fn new(
        id: EntryId,
        start_date: CalendarDate,
        end_date: Option<CalendarDate>,
        notes: impl Into<String>,
    ) -> Result<Self, CycleError> {
        match end_date {
            Some(end) if end < start_date => {
                return Err(CycleError::EndBeforeStart {
                    start: start_date,
                    end,
                });
            }
            _ => {}
        }
        Ok(Self {
            id,
            start_date,
            end_date,
            notes: notes.into(),
        })
    }

    /// Creates an entry with only a start date.
    pub fn started(id: EntryId, start_date: CalendarDate) -> Self {
        Self {
            id,
            start_date,
            end_date: None,
            notes: String::new(),
        }
    }

    /// Returns the store-assigned id.
    pub fn id(&self) -> EntryId {
        self.id
    }

    /// Returns the period start date.
    pub fn start_date(&self) -> CalendarDate {
        self.start_date
    }

    /// Returns the recorded end date, if any. Not used by the cycle math.
    pub fn end_date(&self) -> Option<CalendarDate> {
        self.end_date
    }

    /// Returns the free-text notes, empty when none were given.
    pub fn notes(&self) -> &str {
        &self.notes
    }
}
