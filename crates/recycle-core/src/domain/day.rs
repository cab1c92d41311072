//! Day Stamp
//!
//! A calendar day rendered the way `Date.toLocaleDateString()` renders it in
//! the en-US locale (`M/D/YYYY`, no zero padding). Stamps are stored as-is and
//! only ever compared for equality.
//!
//! Records written under another locale's format (e.g. zh-TW `2024/1/2`)
//! never match and so reset once, as on any day rollover.

use chrono::{Datelike, NaiveDate};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DayStamp(String);

impl DayStamp {
    pub fn from_date(date: NaiveDate) -> Self {
        Self(format!("{}/{}/{}", date.month(), date.day(), date.year()))
    }

    /// Wrap a stamp read back from storage
    pub fn from_stored(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DayStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stamp_has_no_zero_padding() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert_eq!(DayStamp::from_date(date).as_str(), "1/2/2024");
    }

    #[test]
    fn test_stamp_two_digit_parts() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert_eq!(DayStamp::from_date(date).to_string(), "12/31/2025");
    }

    #[test]
    fn test_stored_stamp_equality() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(DayStamp::from_date(date), DayStamp::from_stored("1/1/2024"));
        assert_ne!(DayStamp::from_date(date), DayStamp::from_stored("2024-01-01"));
    }
}
