//! Persistence for recorded cycle entries.
//!
//! [`EntryStore`] is the interface the application layer talks to;
//! [`JsonFileStore`] implements it over one pretty-printed JSON file.
//!
//! Listing always returns entries newest start date first. Ids are assigned
//! from 1 upwards and never reused.

pub mod error;
pub mod json_file;
pub mod store;

pub use error::StoreError;
pub use json_file::JsonFileStore;
pub use store::{EntryStore, NewEntry};
