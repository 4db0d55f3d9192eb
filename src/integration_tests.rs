/// End-to-end tests through the public controller
///
/// These drive CalendarNavigation the way a view would: construct, read the
/// snapshot, send navigation commands, read again.
use std::sync::Arc;

use crate::calendar::Gregorian;
use crate::clock::FixedClock;
use crate::locale::BuiltinLocale;
use crate::navigation::{CalendarNavigation, CalendarServices};
use crate::testing::{date, test_services};
use crate::types::{DateParts, Direction, GRID_CELLS};

fn english_services(today: chrono::NaiveDate) -> CalendarServices {
    CalendarServices::new(
        Arc::new(Gregorian),
        Arc::new(BuiltinLocale::english()),
        Arc::new(FixedClock::new(today)),
    )
}

#[test]
fn test_july_2022_scenario() {
    let nav = CalendarNavigation::new(
        Some(DateParts::new(2022, 7, 1)),
        english_services(date(2022, 7, 4)),
    )
    .unwrap();
    let state = nav.state();

    assert_eq!(state.month_label(), "July");
    assert_eq!(state.year_label(), 2022);
    assert_eq!(
        state.weekday_symbols().as_slice(),
        ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
    );
    assert_eq!(state.leading_count(), 5);
    assert_eq!(state.current_month_days().count(), 31);
    assert_eq!(state.trailing_count(), 6);
    assert_eq!(state.days().len(), GRID_CELLS);
    assert_eq!(state.days()[0].day, 26);
    assert_eq!(state.days()[41].day, 6);
}

#[test]
fn test_february_2024_scenario() {
    let nav = CalendarNavigation::new(
        Some(DateParts::new(2024, 2, 20)),
        english_services(date(2022, 7, 4)),
    )
    .unwrap();
    let state = nav.state();

    assert_eq!(state.month_label(), "February");
    assert_eq!(state.leading_count(), 4);
    assert_eq!(state.current_month_days().count(), 29);
    assert_eq!(state.trailing_count(), 9);
}

#[test]
fn test_invalid_initial_date_scenario() {
    let today = date(2025, 11, 19);
    let nav = CalendarNavigation::new(Some(DateParts::new(2025, 2, 31)), english_services(today))
        .unwrap();
    let state = nav.state();

    assert_eq!(state.month_label(), "November");
    assert_eq!(state.year_label(), 2025);
    assert_eq!(state.days().len(), GRID_CELLS);
    let clock = FixedClock::new(today);
    assert_eq!(state.days().iter().filter(|d| d.is_today(&clock)).count(), 1);
}

#[test]
fn test_year_of_navigation_keeps_every_invariant() {
    let mut nav =
        CalendarNavigation::new(Some(DateParts::new(2023, 11, 30)), test_services(date(2024, 2, 29)))
            .unwrap();
    let clock = FixedClock::new(date(2024, 2, 29));
    let cal = Gregorian;

    for _ in 0..24 {
        let state = nav.advance(Direction::Next).unwrap();
        let (year, month) = (state.year_label(), state.month());
        let first = state.days().iter().position(|d| d.is_current_month).unwrap();

        assert_eq!(state.days().len(), GRID_CELLS);
        assert_eq!(
            state.current_month_days().count() as u32,
            crate::calendar::CalendarSystem::days_in_month(&cal, year, month).unwrap()
        );
        assert_eq!(
            first as u32,
            crate::calendar::CalendarSystem::weekday_index(&cal, year, month, 1).unwrap()
        );

        let todays = state.days().iter().filter(|d| d.is_today(&clock)).count();
        let expected = if (year, month) == (2024, 2) { 1 } else { 0 };
        assert_eq!(todays, expected, "{year}-{month}");
    }
}

#[test]
fn test_is_today_follows_the_clock_not_the_snapshot() {
    let nav = CalendarNavigation::new(
        Some(DateParts::new(2022, 7, 1)),
        english_services(date(2022, 7, 4)),
    )
    .unwrap();
    let state = nav.state();

    // Same snapshot, evaluated at two different "nows"
    let before_midnight = FixedClock::new(date(2022, 7, 4));
    let after_midnight = FixedClock::new(date(2022, 7, 5));
    assert_eq!(state.today_index(&before_midnight), Some(8));
    assert_eq!(state.today_index(&after_midnight), Some(9));
}

#[test]
fn test_observer_on_another_thread_sees_consistent_snapshots() {
    let mut nav = CalendarNavigation::new(
        Some(DateParts::new(2022, 1, 1)),
        test_services(date(2022, 1, 1)),
    )
    .unwrap();
    let rx = nav.subscribe();

    for _ in 0..12 {
        nav.advance(Direction::Next).unwrap();
    }

    let reader = std::thread::spawn(move || {
        let snapshot = rx.borrow().clone();
        (snapshot.reference_date(), snapshot.days()[snapshot.leading_count()])
    });
    let (reference, first_current) = reader.join().unwrap();

    assert_eq!(reference, date(2023, 1, 1));
    assert_eq!((first_current.day, first_current.month, first_current.year), (1, 1, 2023));
}
