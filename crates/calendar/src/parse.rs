//! The `YYYY-MM-DD` text form of a [`CalendarDate`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::date::CalendarDate;
use crate::error::CalendarError;

/// Parses a run of ASCII digits. Returns `None` on any other byte.
pub(crate) fn digits(bytes: &[u8]) -> Option<u32> {
    bytes.iter().try_fold(0u32, |acc, &b| {
        b.is_ascii_digit().then(|| acc * 10 + u32::from(b - b'0'))
    })
}

/// Parses exactly `YYYY-MM-DD`.
///
/// The text must be ten bytes: four digits, `-`, two digits, `-`, two
/// digits, naming a date that exists. Nothing is trimmed or reinterpreted.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDateFormat`] carrying the input on any
/// mismatch, including well-formed text for an impossible date.
pub fn parse_date(text: &str) -> Result<CalendarDate, CalendarError> {
    let invalid = || CalendarError::InvalidDateFormat {
        input: text.to_string(),
    };
    let bytes = text.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(invalid());
    }
    let year = digits(&bytes[0..4]).ok_or_else(invalid)?;
    let month = digits(&bytes[5..7]).ok_or_else(invalid)?;
    let day = digits(&bytes[8..10]).ok_or_else(invalid)?;
    CalendarDate::new(year as i32, month as u8, day as u8).map_err(|_| invalid())
}

/// Formats a date as zero-padded `YYYY-MM-DD`.
pub fn format_date(date: CalendarDate) -> String {
    date.to_string()
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_date(s)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse_date(&text).map_err(serde::de::Error::custom)
    }
}
