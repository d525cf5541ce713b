//! The entry-store interface and the id-assigning log behind it.

use cyclecast_calendar::CalendarDate;
use cyclecast_cycle::{CycleEntry, EntryId};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Fields supplied when recording a new period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    start_date: CalendarDate,
    end_date: Option<CalendarDate>,
    notes: Option<String>,
}

impl NewEntry {
    /// Creates a new entry with only a start date.
    pub fn new(start_date: CalendarDate) -> Self {
        Self {
            start_date,
            end_date: None,
            notes: None,
        }
    }

    /// Sets the end date.
    pub fn with_end_date(mut self, end_date: Option<CalendarDate>) -> Self {
        self.end_date = end_date;
        self
    }

    /// Sets the notes.
    pub fn with_notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes;
        self
    }

    /// Returns the start date.
    pub fn start_date(&self) -> CalendarDate {
        self.start_date
    }
}

/// Persistence for cycle entries.
pub trait EntryStore {
    /// Returns all entries, newest start date first.
    fn list(&self) -> Result<Vec<CycleEntry>, StoreError>;

    /// Records a new entry and returns it with its assigned id.
    fn create(&mut self, entry: NewEntry) -> Result<CycleEntry, StoreError>;

    /// Removes the entry with `id`.
    ///
    /// Returns [`StoreError::NotFound`] if no such entry exists.
    fn delete(&mut self, id: EntryId) -> Result<(), StoreError>;
}

/// Entries plus the next id to hand out. Ids are never reused.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct EntryLog {
    #[serde(default)]
    next_id: u64,
    entries: Vec<CycleEntry>,
}

impl EntryLog {
    /// Repairs `next_id` so it exceeds every stored id.
    ///
    /// `next_id == u64::MAX` marks the id space as used up, so the largest id
    /// ever handed out is `u64::MAX - 1`. A document holding `u64::MAX` still
    /// opens; its next insert reports [`StoreError::IdsExhausted`].
    pub(crate) fn normalized(mut self) -> Self {
        let max_id = self.entries.iter().map(|e| e.id().get()).max().unwrap_or(0);
        self.next_id = self.next_id.max(max_id.saturating_add(1)).max(1);
        self
    }

    pub(crate) fn sorted(&self) -> Vec<CycleEntry> {
        let mut entries = self.entries.clone();
        entries.sort_by(|a, b| {
            b.start_date()
                .cmp(&a.start_date())
                .then_with(|| b.id().cmp(&a.id()))
        });
        entries
    }

    pub(crate) fn insert(&mut self, new: NewEntry) -> Result<CycleEntry, StoreError> {
        if self.next_id == u64::MAX {
            return Err(StoreError::IdsExhausted);
        }
        let id = EntryId::new(self.next_id.max(1));
        let entry = CycleEntry::new(
            id,
            new.start_date,
            new.end_date,
            new.notes.unwrap_or_default(),
        )?;
        self.next_id = id.get() + 1;
        self.entries.push(entry.clone());
        Ok(entry)
    }

    pub(crate) fn remove(&mut self, id: EntryId) -> Result<(), StoreError> {
        let before = self.entries.len();
        self.entries.retain(|e| e.id() != id);
        if self.entries.len() == before {
            return Err(StoreError::NotFound { id });
        }
        Ok(())
    }
}
