//! # cyclecast-calendar
//!
//! Timezone-free date arithmetic for the proleptic Gregorian calendar.
//!
//! Dates are plain `(year, month, day)` triples. Day offsets go through a
//! day number (days since 1970-01-01), so month ends, year ends, and leap
//! days roll over without ever constructing a timestamp.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["YYYY-MM-DD text"] -->|"parse_date()"| B["CalendarDate"]
//!     B -->|"format_date()"| A
//!     B -->|".days_since_epoch()"| C["day number"]
//!     C -->|"CalendarDate::from_days_since_epoch()"| B
//!     B -->|".add_days(n)"| B
//!     B -->|"YearMonth::of()"| D["YearMonth"]
//!     D -->|".dates()"| E["Vec of CalendarDate"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use cyclecast_calendar::{CalendarDate, YearMonth, format_date, parse_date};
//!
//! let date = parse_date("2024-02-28").unwrap();
//! let next = date.add_days(1).unwrap();
//! assert_eq!(format_date(next), "2024-02-29");
//!
//! let feb = YearMonth::of(next);
//! assert_eq!(feb.days(), 29);
//! assert_eq!(feb.next().unwrap().to_string(), "2024-03");
//! assert!(parse_date("28-02-2024").is_err());
//! # let _ = CalendarDate::new(2024, 1, 1).unwrap();
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | `CalendarDate` and day-offset arithmetic |
//! | `parse` | `YYYY-MM-DD` parsing, formatting, serde |
//! | `month` | Month lengths, leap years, `YearMonth` |
//! | `sequence` | Inclusive date ranges |
//! | `civil` | Civil date / day number conversion |
//! | `error` | Error types |

mod civil;
mod date;
mod error;
mod month;
mod parse;
mod sequence;

pub use date::{CalendarDate, add_days, days_between};
pub use error::CalendarError;
pub use month::{MAX_YEAR, MIN_YEAR, YearMonth, days_in_month, is_leap_year};
pub use parse::{format_date, parse_date};
pub use sequence::date_range_inclusive;
