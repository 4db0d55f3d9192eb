use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::clock::Clock;

/// Number of week rows in a month grid
pub const MAX_ROWS: usize = 6;

/// Number of day columns per week row (Sunday first)
pub const COLUMNS_PER_ROW: usize = 7;

/// Total number of cells in a month grid
pub const GRID_CELLS: usize = MAX_ROWS * COLUMNS_PER_ROW;

/// A single cell of the month grid
///
/// Cells are plain values: two cells with the same date compare equal, but a
/// well-formed grid never contains the same date twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDay {
    pub day: u32,
    pub month: u32,
    pub year: i32,
    /// True when the cell belongs to the month the grid was generated for
    pub is_current_month: bool,
}

impl CalendarDay {
    pub fn new(day: u32, month: u32, year: i32, is_current_month: bool) -> Self {
        Self {
            day,
            month,
            year,
            is_current_month,
        }
    }

    /// Convert the cell back into a date
    pub fn to_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

    /// Whether the cell shows the given date, regardless of which month the grid is for
    pub fn is_same_day(&self, date: NaiveDate) -> bool {
        self.year == date.year() && self.month == date.month() && self.day == date.day()
    }

    /// Whether the cell is today's date within the displayed month
    ///
    /// Evaluated against the clock on every call, so a long-lived grid stays
    /// correct across midnight. Spillover cells are never flagged.
    pub fn is_today(&self, clock: &dyn Clock) -> bool {
        self.is_current_month && self.is_same_day(clock.today())
    }
}

/// Navigation direction, like the "next"/"prev" chevrons of a calendar header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Next,
    Prev,
}

/// The calendar component a navigation step changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NavigationUnit {
    #[default]
    Month,
    Year,
}

impl NavigationUnit {
    /// Length of one step in months
    pub fn months(self) -> u32 {
        match self {
            NavigationUnit::Month => 1,
            NavigationUnit::Year => 12,
        }
    }
}

/// Raw year/month/day triple that may or may not name a real date
///
/// Used for caller-supplied initial dates, which are validated (and replaced
/// by today when invalid) rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateParts {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl DateParts {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// The date these parts name, or None for things like February 30th
    pub fn to_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for DateParts {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month(), date.day())
    }
}

impl fmt::Display for DateParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
