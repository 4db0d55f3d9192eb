use std::sync::Arc;

use anyhow::{Context, Result};

use crate::clock::Clock;
use crate::commands::{parse_date_parts, resolve_locale};
use crate::config::Config;
use crate::formatting::{center, format_header, truncate};
use crate::navigation::{CalendarNavigation, CalendarServices};
use crate::state::CalendarGridState;
use crate::types::{CalendarDay, Direction};

/// Width of one day column, including its separator
const CELL_WIDTH: usize = 4;

/// Render one month as plain text, `cal` style
///
/// Today is wrapped in brackets, spillover days in parentheses (or left
/// blank when `show_spillover` is off).
pub fn format_month(
    state: &CalendarGridState,
    clock: &dyn Clock,
    show_spillover: bool,
    use_unicode: bool,
) -> String {
    let mut output = String::new();

    let title = format!("{} {}", state.month_label(), state.year_label());
    output.push_str(&format_header(&title, false, use_unicode));

    let weekdays: String = state
        .weekday_symbols()
        .iter()
        .map(|symbol| center(truncate(symbol, CELL_WIDTH - 1), CELL_WIDTH))
        .collect();
    output.push_str(weekdays.trim_end());
    output.push('\n');

    for week in state.weeks() {
        let line: String = week
            .iter()
            .map(|day| format_cell(day, clock, show_spillover))
            .collect();
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output
}

fn format_cell(day: &CalendarDay, clock: &dyn Clock, show_spillover: bool) -> String {
    if day.is_today(clock) {
        format!("[{:>2}]", day.day)
    } else if day.is_current_month {
        format!(" {:>2} ", day.day)
    } else if show_spillover {
        format!("({:>2})", day.day)
    } else {
        " ".repeat(CELL_WIDTH)
    }
}

/// Print `months` consecutive months starting at `date`
pub fn run(
    date: Option<String>,
    locale: Option<String>,
    months: usize,
    config: &Config,
) -> Result<()> {
    let initial = parse_date_parts(date.as_deref())?;
    let labels = resolve_locale(locale.as_deref().unwrap_or(&config.locale))?;
    let services = CalendarServices::with_labels(Arc::new(labels));
    let clock = services.clock.clone();

    let mut navigation =
        CalendarNavigation::new(initial, services).context("Failed to build calendar")?;

    for i in 0..months.max(1) {
        if i > 0 {
            navigation
                .advance(Direction::Next)
                .context("Failed to move to the next month")?;
            println!();
        }
        print!(
            "{}",
            format_month(
                &navigation.state(),
                clock.as_ref(),
                config.show_spillover,
                config.use_unicode
            )
        );
    }
    Ok(())
}
