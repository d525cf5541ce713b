//! Cycle-window computation, month classification, and next-period prediction.
//!
//! Every function here is pure: inputs are borrowed, nothing is cached, and
//! identical inputs give identical outputs, so calls can run concurrently
//! without coordination.
//!
//! | Window | Offset from period start |
//! |--------|--------------------------|
//! | Period | `0 ..= 4` |
//! | Ovulation | `cycle_length - 14` |
//! | Fertile | `cycle_length - 19 ..= cycle_length - 10` |
//!
//! # Quick start
//!
//! ```
//! use cyclecast_calendar::parse_date;
//! use cyclecast_cycle::{CycleEntry, EntryId, predict_next};
//!
//! let entries = vec![
//!     CycleEntry::started(EntryId::new(1), parse_date("2024-01-01").unwrap()),
//!     CycleEntry::started(EntryId::new(2), parse_date("2024-01-29").unwrap()),
//! ];
//! let next = predict_next(&entries, 28).unwrap();
//! assert_eq!(next.unwrap().to_string(), "2024-02-26");
//! ```
//!
//! # Architecture
//!
//! ```text
//! classify_month()
//!   ├─ validate_cycle_length()   (profile.rs)
//!   ├─ window offsets clipped to the month (classify.rs, per entry)
//!   └─ precedence merge          (classify.rs)
//!
//! predict_next() / cycle_day()
//!   └─ latest_entry()            (predict.rs)
//! ```

pub mod classify;
pub mod entry;
pub mod error;
pub mod predict;
pub mod profile;
pub mod window;

pub use classify::{DayClass, MonthClassification, MonthSummary, classify, classify_month};
pub use entry::{CycleEntry, EntryId};
pub use error::CycleError;
pub use predict::{cycle_day, default_display_month, latest_entry, predict_next};
pub use profile::{
    CycleProfile, DEFAULT_CYCLE_LENGTH, MIN_PLAUSIBLE_CYCLE_LENGTH, validate_cycle_length,
};
pub use window::{
    CycleWindow, FERTILE_END_OFFSET, FERTILE_START_OFFSET, LUTEAL_PHASE_DAYS, PERIOD_LENGTH_DAYS,
    compute_window,
};
