//! Entry store persisted as one JSON document.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use cyclecast_cycle::{CycleEntry, EntryId};
use tracing::{debug, info};

use crate::error::StoreError;
use crate::store::{EntryLog, EntryStore, NewEntry};

/// Entry store backed by a JSON file.
///
/// The document has the shape `{"next_id": n, "entries": [...]}`. A missing
/// file opens as an empty store; every successful mutation rewrites the
/// whole file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    log: EntryLog,
}

impl JsonFileStore {
    /// Opens the store at `path`, reading it if it exists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file exists but cannot be read, or
    /// [`StoreError::Serialization`] if it is not a valid entry document.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let log = match std::fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str::<EntryLog>(&text)
                .map_err(|e| StoreError::Serialization {
                    reason: format!("{}: {e}", path.display()),
                })?
                .normalized(),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "store file absent; starting empty");
                EntryLog::default().normalized()
            }
            Err(e) => {
                return Err(StoreError::Io {
                    path,
                    reason: e.to_string(),
                });
            }
        };
        info!(path = %path.display(), "entry store opened");
        Ok(Self { path, log })
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.log).map_err(|e| {
            StoreError::Serialization {
                reason: e.to_string(),
            }
        })?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                path: parent.to_path_buf(),
                reason: e.to_string(),
            })?;
        }
        std::fs::write(&self.path, json).map_err(|e| StoreError::Io {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }
}

impl EntryStore for JsonFileStore {
    fn list(&self) -> Result<Vec<CycleEntry>, StoreError> {
        Ok(self.log.sorted())
    }

    fn create(&mut self, entry: NewEntry) -> Result<CycleEntry, StoreError> {
        let mut next = self.log.clone();
        let created = next.insert(entry)?;
        let previous = std::mem::replace(&mut self.log, next);
        if let Err(e) = self.save() {
            self.log = previous;
            return Err(e);
        }
        debug!(id = %created.id(), start = %created.start_date(), "entry created");
        Ok(created)
    }

    fn delete(&mut self, id: EntryId) -> Result<(), StoreError> {
        let mut next = self.log.clone();
        next.remove(id)?;
        let previous = std::mem::replace(&mut self.log, next);
        if let Err(e) = self.save() {
            self.log = previous;
            return Err(e);
        }
        debug!(%id, "entry deleted");
        Ok(())
    }
}
