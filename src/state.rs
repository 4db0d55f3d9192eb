use chrono::{Datelike, NaiveDate};

use crate::clock::Clock;
use crate::types::{CalendarDay, COLUMNS_PER_ROW, GRID_CELLS};

/// Published snapshot of one month view
///
/// Built only by [`crate::grid::build_grid_state`], so the cells always agree
/// with `reference_date`. Snapshots are never edited; navigation replaces them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGridState {
    reference_date: NaiveDate,
    days: Vec<CalendarDay>,
    weekday_symbols: [String; 7],
    month_label: String,
    year_label: i32,
}

impl CalendarGridState {
    pub(crate) fn new(
        reference_date: NaiveDate,
        days: Vec<CalendarDay>,
        weekday_symbols: [String; 7],
        month_label: String,
    ) -> Self {
        debug_assert_eq!(days.len(), GRID_CELLS);
        Self {
            year_label: reference_date.year(),
            reference_date,
            days,
            weekday_symbols,
            month_label,
        }
    }

    /// First day of the displayed month
    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// All 42 cells, row-major, Sunday first
    pub fn days(&self) -> &[CalendarDay] {
        &self.days
    }

    pub fn weekday_symbols(&self) -> &[String; 7] {
        &self.weekday_symbols
    }

    pub fn month_label(&self) -> &str {
        &self.month_label
    }

    pub fn year_label(&self) -> i32 {
        self.year_label
    }

    /// Displayed month, 1-12
    pub fn month(&self) -> u32 {
        self.reference_date.month()
    }

    /// The six week rows of the grid
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarDay]> {
        self.days.chunks(COLUMNS_PER_ROW)
    }

    /// Only the first row, for a collapsed calendar
    pub fn first_week(&self) -> &[CalendarDay] {
        &self.days[..COLUMNS_PER_ROW.min(self.days.len())]
    }

    pub fn current_month_days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.days.iter().filter(|d| d.is_current_month)
    }

    /// Number of previous-month cells before day 1
    pub fn leading_count(&self) -> usize {
        self.days.iter().take_while(|d| !d.is_current_month).count()
    }

    /// Number of next-month cells after the last day
    pub fn trailing_count(&self) -> usize {
        self.days.iter().rev().take_while(|d| !d.is_current_month).count()
    }

    /// Grid index of today's cell, if today is in the displayed month
    pub fn today_index(&self, clock: &dyn Clock) -> Option<usize> {
        self.days.iter().position(|d| d.is_today(clock))
    }
}
