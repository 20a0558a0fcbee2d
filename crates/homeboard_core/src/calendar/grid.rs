//! Month grid derivation and month navigation.
//!
//! # Responsibility
//! - Derive the shape of a Sunday-first month grid from (year, month index).
//! - Move the visible month forward/backward with exact year rollover.
//!
//! # Invariants
//! - `month_index` is always within `0..=11`.
//! - Grid cells are `first_weekday_offset` blanks followed by every day of the
//!   month in order.

use crate::model::date_key::DateKey;
use chrono::{Datelike, Month, Months, NaiveDate};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Column headers of a Sunday-first grid.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Month grid errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Month index outside `0..=11`.
    InvalidMonthIndex(u32),
    /// Year outside the supported calendar range.
    YearOutOfRange(i32),
}

impl Display for GridError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMonthIndex(value) => {
                write!(f, "month index must be within 0..=11, got {value}")
            }
            Self::YearOutOfRange(value) => write!(f, "year is out of supported range: {value}"),
        }
    }
}

impl Error for GridError {}

/// Visible month, addressed by year and zero-based month index.
///
/// Only months whose first day chrono can represent are constructible, and
/// navigation never steps outside that range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthCursor {
    /// Day 1 of the month.
    first: NaiveDate,
}

impl MonthCursor {
    /// Creates a cursor after validating the month index and year range.
    pub fn new(year: i32, month_index: u32) -> Result<Self, GridError> {
        if month_index > 11 {
            return Err(GridError::InvalidMonthIndex(month_index));
        }
        NaiveDate::from_ymd_opt(year, month_index + 1, 1)
            .map(|first| Self { first })
            .ok_or(GridError::YearOutOfRange(year))
    }

    /// Cursor of the month that contains `date`.
    pub fn containing(date: DateKey) -> Self {
        let date = date.date();
        // Day 1 of a representable date's month is representable too.
        let first = date.with_day(1).unwrap_or(date);
        Self { first }
    }

    pub fn year(self) -> i32 {
        self.first.year()
    }

    pub fn month_index(self) -> u32 {
        self.first.month0()
    }

    /// Previous month, or `None` before the first representable month.
    pub fn checked_previous(self) -> Option<Self> {
        self.first
            .checked_sub_months(Months::new(1))
            .map(|first| Self { first })
    }

    /// Next month, or `None` past the last representable month.
    pub fn checked_next(self) -> Option<Self> {
        self.first
            .checked_add_months(Months::new(1))
            .map(|first| Self { first })
    }

    /// Previous month; January wraps to December of the previous year.
    /// Stays put at the first representable month.
    pub fn previous(self) -> Self {
        self.checked_previous().unwrap_or(self)
    }

    /// Next month; December wraps to January of the next year.
    /// Stays put at the last representable month.
    pub fn next(self) -> Self {
        self.checked_next().unwrap_or(self)
    }

    /// Key of day 1 of this month.
    pub fn first_day(self) -> DateKey {
        DateKey::from_date(self.first)
    }

    /// Returns whether `date` falls inside this month.
    pub fn contains(self, date: DateKey) -> bool {
        date.year() == self.year() && date.month_index() == self.month_index()
    }

    /// Human-readable heading such as `November 2025`.
    pub fn label(self) -> String {
        let name = Month::try_from(self.first.month() as u8)
            .map(|month| month.name())
            .unwrap_or("Unknown");
        format!("{name} {}", self.year())
    }
}

/// One cell of the rendered month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    /// Leading padding before day 1.
    Blank,
    Day(DateKey),
}

impl GridCell {
    pub fn date(self) -> Option<DateKey> {
        match self {
            Self::Blank => None,
            Self::Day(date) => Some(date),
        }
    }
}

/// Shape of one month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    pub cursor: MonthCursor,
    /// Number of days in the month (28..=31).
    pub days_in_month: u32,
    /// Weekday of day 1, 0 = Sunday .. 6 = Saturday.
    pub first_weekday_offset: u32,
}

impl MonthGrid {
    /// Derives the grid shape for `cursor`.
    pub fn derive(cursor: MonthCursor) -> Self {
        let first = cursor.first;
        Self {
            cursor,
            days_in_month: days_in_month(first.year(), first.month()),
            first_weekday_offset: first.weekday().num_days_from_sunday(),
        }
    }

    /// Derives the grid shape from raw (year, month index) input.
    pub fn for_month(year: i32, month_index: u32) -> Result<Self, GridError> {
        MonthCursor::new(year, month_index).map(Self::derive)
    }

    /// Leading blanks followed by one cell per day.
    pub fn cells(&self) -> Vec<GridCell> {
        let mut cells = Vec::with_capacity((self.first_weekday_offset + self.days_in_month) as usize);
        cells.extend((0..self.first_weekday_offset).map(|_| GridCell::Blank));
        cells.extend(self.days().map(GridCell::Day));
        cells
    }

    /// Cells chunked into rows of seven; the last row is not padded.
    pub fn weeks(&self) -> Vec<Vec<GridCell>> {
        self.cells().chunks(7).map(<[GridCell]>::to_vec).collect()
    }

    /// Every day of the month in order.
    pub fn days(&self) -> impl Iterator<Item = DateKey> {
        let cursor = self.cursor;
        (1..=self.days_in_month).filter_map(move |day| {
            DateKey::from_ymd(cursor.year(), cursor.month_index(), day)
        })
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ if is_leap_year(year) => 29,
        _ => 28,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
