//! Calendar arithmetic: month lengths, leap years and weekday lookup.

use chrono::{Datelike, NaiveDate};

use crate::error::{CalendarError, CalendarResult};
use crate::types::Direction;

/// Day-count and weekday rules of a calendar system
///
/// The grid generator only asks two questions: how long is a month, and which
/// weekday does a given date fall on. Implementations must be stateless.
pub trait CalendarSystem: Send + Sync {
    /// Number of days in `month` (1-12) of `year`
    fn days_in_month(&self, year: i32, month: u32) -> CalendarResult<u32>;

    /// Weekday index of a date, 0 = Sunday .. 6 = Saturday
    fn weekday_index(&self, year: i32, month: u32, day: u32) -> CalendarResult<u32>;
}

/// Proleptic Gregorian calendar backed by chrono
#[derive(Debug, Clone, Copy, Default)]
pub struct Gregorian;

impl CalendarSystem for Gregorian {
    fn days_in_month(&self, year: i32, month: u32) -> CalendarResult<u32> {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => Ok(31),
            4 | 6 | 9 | 11 => Ok(30),
            2 if is_leap_year(year) => Ok(29),
            2 => Ok(28),
            other => Err(CalendarError::InvalidMonth(other)),
        }
    }

    fn weekday_index(&self, year: i32, month: u32, day: u32) -> CalendarResult<u32> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth(month));
        }
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(CalendarError::OutOfRange { year, month })?;
        Ok(date.weekday().num_days_from_sunday())
    }
}

/// Gregorian leap rule: divisible by 4, except centuries not divisible by 400
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Step a (year, month) pair by one month, rolling over 12 <-> 1
pub fn roll_month(year: i32, month: u32, direction: Direction) -> (i32, u32) {
    match (direction, month) {
        (Direction::Next, 12) => (year + 1, 1),
        (Direction::Next, m) => (year, m + 1),
        (Direction::Prev, 1) => (year - 1, 12),
        (Direction::Prev, m) => (year, m - 1),
    }
}

/// First day of the month containing `date`
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}
