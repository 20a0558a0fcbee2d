//! Calendar date key model.
//!
//! # Responsibility
//! - Identify one calendar day for grouping events.
//! - Own the canonical `YYYY-MM-DD` text form used by UI and wire payloads.
//!
//! # Invariants
//! - A `DateKey` always names a real Gregorian date.
//! - `to_string()` output always parses back to the same key.

use chrono::{Datelike, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

static DATE_KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("valid date key regex"));

/// Errors raised while parsing date keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateKeyError {
    /// Input does not follow `YYYY-MM-DD`.
    Malformed(String),
    /// Input is well-formed but names no calendar day (e.g. `2023-02-29`).
    NotACalendarDate(String),
}

impl Display for DateKeyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(value) => {
                write!(f, "date key must be formatted as YYYY-MM-DD, got `{value}`")
            }
            Self::NotACalendarDate(value) => write!(f, "date key is not a calendar date: `{value}`"),
        }
    }
}

impl Error for DateKeyError {}

/// Canonical key for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    /// Parses a canonical `YYYY-MM-DD` key.
    ///
    /// Surrounding whitespace is ignored; anything else must match exactly.
    pub fn parse(value: &str) -> Result<Self, DateKeyError> {
        let trimmed = value.trim();
        let caps = DATE_KEY_RE
            .captures(trimmed)
            .ok_or_else(|| DateKeyError::Malformed(trimmed.to_string()))?;

        let field = |index: usize| -> Result<u32, DateKeyError> {
            caps[index]
                .parse::<u32>()
                .map_err(|_| DateKeyError::Malformed(trimmed.to_string()))
        };
        let year = field(1)? as i32;
        let month = field(2)?;
        let day = field(3)?;

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| DateKeyError::NotACalendarDate(trimmed.to_string()))
    }

    /// Builds a key from year, zero-based month index and day of month.
    ///
    /// Returns `None` when the combination names no calendar day.
    pub fn from_ymd(year: i32, month_index: u32, day: u32) -> Option<Self> {
        if month_index > 11 {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month_index + 1, day).map(Self)
    }

    /// Key of the current local day.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(self) -> NaiveDate {
        self.0
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Zero-based month index (0 = January).
    pub fn month_index(self) -> u32 {
        self.0.month0()
    }

    /// Day of month, starting at 1.
    pub fn day(self) -> u32 {
        self.0.day()
    }
}

impl From<NaiveDate> for DateKey {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

impl FromStr for DateKey {
    type Err = DateKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for DateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(raw.as_str()).map_err(serde::de::Error::custom)
    }
}
