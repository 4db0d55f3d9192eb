/// Test doubles for the calendar's injected capabilities
///
/// Grid and navigation tests use these instead of the built-in locale tables
/// and the system clock so their results never depend on the host.
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

use chrono::NaiveDate;

use crate::calendar::Gregorian;
use crate::clock::FixedClock;
use crate::error::{CalendarError, CalendarResult};
use crate::locale::LocaleLabelProvider;
use crate::navigation::{CalendarServices, CommandSender};
use crate::types::Direction;

/// Shorthand for a known-valid date
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Services with fixed labels and a clock pinned to `today`
pub fn test_services(today: NaiveDate) -> CalendarServices {
    CalendarServices::new(
        Arc::new(Gregorian),
        Arc::new(FixedLabels),
        Arc::new(FixedClock::new(today)),
    )
}

/// Deterministic labels: weekdays "W0".."W6", months "M1".."M12"
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedLabels;

impl LocaleLabelProvider for FixedLabels {
    fn weekday_symbols(&self) -> CalendarResult<[String; 7]> {
        Ok(std::array::from_fn(|i| format!("W{}", i)))
    }

    fn month_name(&self, month: u32) -> CalendarResult<String> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth(month));
        }
        Ok(format!("M{}", month))
    }
}

/// A locale service that is never reachable
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableLabels;

impl LocaleLabelProvider for UnavailableLabels {
    fn weekday_symbols(&self) -> CalendarResult<[String; 7]> {
        Err(CalendarError::LocaleUnavailable("test locale offline".to_string()))
    }

    fn month_name(&self, _month: u32) -> CalendarResult<String> {
        Err(CalendarError::LocaleUnavailable("test locale offline".to_string()))
    }
}

/// Serves `remaining` grid computations, then goes offline
#[derive(Debug)]
pub struct FlakyLabels {
    remaining: AtomicUsize,
}

impl FlakyLabels {
    pub fn new(successful_calls: usize) -> Self {
        Self {
            remaining: AtomicUsize::new(successful_calls),
        }
    }
}

impl LocaleLabelProvider for FlakyLabels {
    fn weekday_symbols(&self) -> CalendarResult<[String; 7]> {
        let available = self
            .remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if available {
            FixedLabels.weekday_symbols()
        } else {
            UnavailableLabels.weekday_symbols()
        }
    }

    fn month_name(&self, month: u32) -> CalendarResult<String> {
        FixedLabels.month_name(month)
    }
}

/// Fixed labels that queue another "next month" every time a grid is built
#[derive(Debug, Default)]
pub struct RequeueingLabels {
    sender: OnceLock<CommandSender>,
}

impl RequeueingLabels {
    pub fn attach(&self, sender: CommandSender) {
        let _ = self.sender.set(sender);
    }
}

impl LocaleLabelProvider for RequeueingLabels {
    fn weekday_symbols(&self) -> CalendarResult<[String; 7]> {
        if let Some(sender) = self.sender.get() {
            sender.advance(Direction::Next)?;
        }
        FixedLabels.weekday_symbols()
    }

    fn month_name(&self, month: u32) -> CalendarResult<String> {
        FixedLabels.month_name(month)
    }
}
