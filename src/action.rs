use chrono::NaiveDate;

use crate::types::{Direction, NavigationUnit};

/// Navigation commands
///
/// All changes to the displayed month happen through actions. They are
/// either applied directly on the controller or queued through a
/// [`crate::navigation::CommandSender`] and applied in the order sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move one month or one year forward/backward
    Change {
        unit: NavigationUnit,
        direction: Direction,
    },
    /// Show the month containing the clock's today
    JumpToToday,
    /// Show the month containing the given date
    JumpTo(NaiveDate),
}

impl Action {
    /// One month in `direction`
    pub fn advance(direction: Direction) -> Self {
        Action::Change {
            unit: NavigationUnit::Month,
            direction,
        }
    }

    pub fn next_month() -> Self {
        Self::advance(Direction::Next)
    }

    pub fn prev_month() -> Self {
        Self::advance(Direction::Prev)
    }
}
