//! Month grid generation
//!
//! A month is always laid out on six Sunday-first week rows. Day 1 sits in the
//! column of its weekday, the cells before it are the tail of the previous
//! month and the cells after the last day are the head of the next month.

use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};
use tracing::trace;

use crate::calendar::{first_of_month, roll_month, CalendarSystem};
use crate::error::CalendarResult;
use crate::locale::LocaleLabelProvider;
use crate::state::CalendarGridState;
use crate::types::{CalendarDay, Direction, GRID_CELLS};

/// How a month splits the 42 grid cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthLayout {
    pub year: i32,
    pub month: u32,
    /// Previous-month cells before day 1 (equals the weekday index of day 1)
    pub leading: usize,
    /// Days in the month itself
    pub current: usize,
    /// Next-month cells after the last day
    pub trailing: usize,
    /// Length of the previous month, used to number the leading cells
    pub days_in_prev_month: u32,
}

/// Compute the cell split for `month` of `year`
pub fn month_layout(
    year: i32,
    month: u32,
    calendar: &dyn CalendarSystem,
) -> CalendarResult<MonthLayout> {
    let (prev_year, prev_month) = roll_month(year, month, Direction::Prev);

    let days_in_month = calendar.days_in_month(year, month)?;
    let days_in_prev_month = calendar.days_in_month(prev_year, prev_month)?;
    let first_weekday = calendar.weekday_index(year, month, 1)?;

    let leading = first_weekday as usize;
    let current = days_in_month as usize;
    // 6 (max offset) + 31 (max length) = 37, so this never underflows
    let trailing = GRID_CELLS - leading - current;

    Ok(MonthLayout {
        year,
        month,
        leading,
        current,
        trailing,
        days_in_prev_month,
    })
}

/// Generate the 42 cells for `month` of `year`
pub fn generate_days(
    year: i32,
    month: u32,
    calendar: &dyn CalendarSystem,
) -> CalendarResult<Vec<CalendarDay>> {
    let layout = month_layout(year, month, calendar)?;
    let (prev_year, prev_month) = roll_month(year, month, Direction::Prev);
    let (next_year, next_month) = roll_month(year, month, Direction::Next);

    let prev_last = layout.days_in_prev_month;
    let prev_first = prev_last + 1 - layout.leading as u32;

    let mut days = Vec::with_capacity(GRID_CELLS);
    days.extend(calendar_days(prev_first..=prev_last, prev_month, prev_year, false));
    days.extend(calendar_days(1..=layout.current as u32, month, year, true));
    days.extend(calendar_days(1..=layout.trailing as u32, next_month, next_year, false));

    trace!(
        "GRID: {}-{:02} leading={} current={} trailing={}",
        year,
        month,
        layout.leading,
        layout.current,
        layout.trailing
    );
    debug_assert_eq!(days.len(), GRID_CELLS);
    Ok(days)
}

/// Build the full snapshot (cells and labels) for the month containing `reference`
pub fn build_grid_state(
    reference: NaiveDate,
    calendar: &dyn CalendarSystem,
    labels: &dyn LocaleLabelProvider,
) -> CalendarResult<CalendarGridState> {
    let reference = first_of_month(reference);
    let days = generate_days(reference.year(), reference.month(), calendar)?;
    let weekday_symbols = labels.weekday_symbols()?;
    let month_label = labels.month_name(reference.month())?;

    Ok(CalendarGridState::new(
        reference,
        days,
        weekday_symbols,
        month_label,
    ))
}

fn calendar_days(
    days: RangeInclusive<u32>,
    month: u32,
    year: i32,
    is_current_month: bool,
) -> impl Iterator<Item = CalendarDay> {
    days.map(move |day| CalendarDay::new(day, month, year, is_current_month))
}
