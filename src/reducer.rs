use chrono::{Months, NaiveDate};
use tracing::debug;

use crate::action::Action;
use crate::calendar::first_of_month;
use crate::error::{CalendarError, CalendarResult};
use crate::grid::build_grid_state;
use crate::navigation::CalendarServices;
use crate::state::CalendarGridState;
use crate::types::{Direction, NavigationUnit};

/// Pure state reducer
///
/// Takes the current snapshot and an action and returns the snapshot that
/// should replace it. Nothing is published here; on error the caller keeps
/// the old snapshot.
pub fn reduce(
    state: &CalendarGridState,
    action: Action,
    services: &CalendarServices,
) -> CalendarResult<CalendarGridState> {
    let reference = match action {
        Action::Change { unit, direction } => {
            shift_reference_date(state.reference_date(), unit, direction)?
        }
        Action::JumpToToday => services.clock.today(),
        Action::JumpTo(date) => date,
    };

    debug!(
        "NAV: {:?} {} -> {}",
        action,
        state.reference_date(),
        first_of_month(reference)
    );

    build_grid_state(reference, services.calendar.as_ref(), services.labels.as_ref())
}

/// Move a reference date by one unit
///
/// The day is normalized to 1 first, so stepping from January 31st lands in
/// February rather than rolling over into March. Leaving chrono's date range
/// is an error, never a clamp.
pub fn shift_reference_date(
    reference: NaiveDate,
    unit: NavigationUnit,
    direction: Direction,
) -> CalendarResult<NaiveDate> {
    let from = first_of_month(reference);
    let step = Months::new(unit.months());
    let shifted = match direction {
        Direction::Next => from.checked_add_months(step),
        Direction::Prev => from.checked_sub_months(step),
    };
    shifted.ok_or(CalendarError::NavigationOutOfRange {
        from,
        unit,
        direction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Gregorian;
    use crate::testing::{date, test_services, FixedLabels};
    use chrono::Datelike;

    fn state_for(reference: NaiveDate) -> CalendarGridState {
        build_grid_state(reference, &Gregorian, &FixedLabels).unwrap()
    }

    #[test]
    fn test_shift_month_forward_and_back() {
        let d = date(2022, 7, 19);
        assert_eq!(
            shift_reference_date(d, NavigationUnit::Month, Direction::Next).unwrap(),
            date(2022, 8, 1)
        );
        assert_eq!(
            shift_reference_date(d, NavigationUnit::Month, Direction::Prev).unwrap(),
            date(2022, 6, 1)
        );
    }

    #[test]
    fn test_shift_from_month_end_does_not_skip_short_month() {
        let jan_31 = date(2023, 1, 31);
        let next = shift_reference_date(jan_31, NavigationUnit::Month, Direction::Next).unwrap();
        assert_eq!((next.year(), next.month()), (2023, 2));

        let mar_31 = date(2023, 3, 31);
        let prev = shift_reference_date(mar_31, NavigationUnit::Month, Direction::Prev).unwrap();
        assert_eq!((prev.year(), prev.month()), (2023, 2));
    }

    #[test]
    fn test_shift_across_year_boundary() {
        assert_eq!(
            shift_reference_date(date(2022, 12, 15), NavigationUnit::Month, Direction::Next).unwrap(),
            date(2023, 1, 1)
        );
        assert_eq!(
            shift_reference_date(date(2022, 1, 15), NavigationUnit::Month, Direction::Prev).unwrap(),
            date(2021, 12, 1)
        );
    }

    #[test]
    fn test_shift_by_year_keeps_month() {
        assert_eq!(
            shift_reference_date(date(2024, 2, 29), NavigationUnit::Year, Direction::Next).unwrap(),
            date(2025, 2, 1)
        );
        assert_eq!(
            shift_reference_date(date(2024, 2, 29), NavigationUnit::Year, Direction::Prev).unwrap(),
            date(2023, 2, 1)
        );
    }

    #[test]
    fn test_shift_past_representable_range_is_an_error() {
        let last = first_of_month(NaiveDate::MAX);
        let result = shift_reference_date(last, NavigationUnit::Month, Direction::Next);
        assert!(matches!(
            result,
            Err(CalendarError::NavigationOutOfRange {
                direction: Direction::Next,
                unit: NavigationUnit::Month,
                ..
            })
        ));

        let first = first_of_month(NaiveDate::MIN);
        let result = shift_reference_date(first, NavigationUnit::Year, Direction::Prev);
        assert!(matches!(result, Err(CalendarError::NavigationOutOfRange { .. })));
    }

    #[test]
    fn test_reduce_change() {
        let services = test_services(date(2022, 7, 4));
        let state = state_for(date(2022, 12, 1));

        let next = reduce(&state, Action::next_month(), &services).unwrap();
        assert_eq!(next.reference_date(), date(2023, 1, 1));
        assert_eq!(next.year_label(), 2023);
        assert_eq!(next.month_label(), "M1");

        let prev = reduce(&next, Action::prev_month(), &services).unwrap();
        assert_eq!(prev, state);
    }

    #[test]
    fn test_reduce_jump_to_today() {
        let services = test_services(date(2022, 7, 4));
        let state = state_for(date(1999, 3, 1));

        let new_state = reduce(&state, Action::JumpToToday, &services).unwrap();
        assert_eq!(new_state.reference_date(), date(2022, 7, 1));
    }

    #[test]
    fn test_reduce_jump_to() {
        let services = test_services(date(2022, 7, 4));
        let state = state_for(date(2022, 7, 1));

        let new_state = reduce(&state, Action::JumpTo(date(2024, 2, 17)), &services).unwrap();
        assert_eq!(new_state.reference_date(), date(2024, 2, 1));
        assert_eq!(new_state.current_month_days().count(), 29);
    }
}
