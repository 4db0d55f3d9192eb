use chrono::NaiveDate;
use thiserror::Error;
use tokio::sync::mpsc;

use crate::action::Action;
use crate::types::{Direction, NavigationUnit};

/// Calendar core errors
#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("{year}-{month:02} is outside the representable calendar range")]
    OutOfRange { year: i32, month: u32 },

    #[error("cannot move {direction:?} by one {unit:?} from {from}: outside the representable calendar range")]
    NavigationOutOfRange {
        from: NaiveDate,
        unit: NavigationUnit,
        direction: Direction,
    },

    #[error("Locale labels unavailable: {0}")]
    LocaleUnavailable(String),

    #[error("Invalid month index {0} (expected 1-12)")]
    InvalidMonth(u32),

    #[error("Invalid calendar date {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("Calendar controller is no longer receiving commands")]
    CommandSendFailed(#[from] mpsc::error::SendError<Action>),
}

/// Result type for calendar operations
pub type CalendarResult<T> = Result<T, CalendarError>;
