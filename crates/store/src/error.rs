//! Error types for cyclecast-store.

use std::path::PathBuf;

use cyclecast_cycle::{CycleError, EntryId};

/// Error type for all fallible operations in the cyclecast-store crate.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Returned when deleting an id that is not in the store.
    #[error("cycle entry {id} not found")]
    NotFound {
        /// The id that was requested.
        id: EntryId,
    },

    /// Returned when the backing file cannot be read or written.
    #[error("i/o error on {}: {reason}", path.display())]
    Io {
        /// File that was being accessed.
        path: PathBuf,
        /// Description of the underlying failure.
        reason: String,
    },

    /// Returned when the backing file is not a valid entry document.
    #[error("serialization error: {reason}")]
    Serialization {
        /// Description of the underlying serde failure.
        reason: String,
    },

    /// Returned when every entry id up to `u64::MAX` has been handed out.
    #[error("no entry ids left to assign")]
    IdsExhausted,

    /// Returned when a new entry fails validation.
    #[error("invalid entry: {0}")]
    Entry(#[from] CycleError),
}
