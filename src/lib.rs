pub mod action;
pub mod calendar;
pub mod clock;
pub mod commands;
pub mod config;
pub mod error;
pub mod formatting;
pub mod grid;
pub mod locale;
pub mod navigation;
pub mod reducer;
pub mod state;
pub mod tui;
pub mod types;

#[cfg(test)]
pub mod testing;

#[cfg(test)]
mod integration_tests;

pub use action::Action;
pub use calendar::{CalendarSystem, Gregorian};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{CalendarError, CalendarResult};
pub use grid::{build_grid_state, generate_days, month_layout, MonthLayout};
pub use locale::{BuiltinLocale, LocaleLabelProvider};
pub use navigation::{CalendarNavigation, CalendarServices, CommandSender, GridSnapshot, ProcessReport};
pub use state::CalendarGridState;
pub use types::{CalendarDay, DateParts, Direction, NavigationUnit, COLUMNS_PER_ROW, GRID_CELLS, MAX_ROWS};
