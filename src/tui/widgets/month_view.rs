/// MonthView widget - the month header, weekday labels and day grid
///
/// Collapsed, only the first week row is drawn (like a folded calendar);
/// expanded, all six rows are.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use crate::clock::Clock;
use crate::config::Config;
use crate::formatting::center;
use crate::state::CalendarGridState;
use crate::types::{CalendarDay, COLUMNS_PER_ROW, MAX_ROWS};
use super::RenderableWidget;

/// Columns per day cell
const CELL_WIDTH: u16 = 5;

/// Title line + blank line + weekday line
const HEADER_HEIGHT: u16 = 3;

#[derive(Clone, Copy)]
pub struct MonthView<'a> {
    pub state: &'a CalendarGridState,
    pub clock: &'a dyn Clock,
    pub expanded: bool,
}

impl<'a> MonthView<'a> {
    pub fn new(state: &'a CalendarGridState, clock: &'a dyn Clock, expanded: bool) -> Self {
        Self {
            state,
            clock,
            expanded,
        }
    }

    fn visible_rows(&self) -> usize {
        if self.expanded {
            MAX_ROWS
        } else {
            1
        }
    }

    fn day_style(&self, day: &CalendarDay, config: &Config) -> Option<Style> {
        let theme = &config.theme;
        if day.is_today(self.clock) {
            Some(
                Style::default()
                    .fg(theme.today_fg)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            )
        } else if day.is_current_month {
            Some(Style::default().fg(theme.day_fg))
        } else if config.show_spillover {
            Some(Style::default().fg(theme.spillover_fg()))
        } else {
            None
        }
    }
}

impl RenderableWidget for MonthView<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &Config) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        // Month and year
        let month_style = Style::default().add_modifier(Modifier::BOLD);
        buf.set_stringn(
            area.x,
            area.y,
            self.state.month_label(),
            area.width as usize,
            month_style,
        );
        let year_x = area.x + unicode_width::UnicodeWidthStr::width(self.state.month_label()) as u16 + 1;
        if year_x < area.right() {
            buf.set_stringn(
                year_x,
                area.y,
                self.state.year_label().to_string(),
                (area.right() - year_x) as usize,
                Style::default(),
            );
        }

        // Weekday labels
        let weekday_y = area.y + 2;
        if weekday_y >= area.bottom() {
            return;
        }
        let weekday_style = Style::default().fg(config.theme.weekday_fg);
        for (col, symbol) in self.state.weekday_symbols().iter().enumerate() {
            let x = area.x + col as u16 * CELL_WIDTH;
            if x + CELL_WIDTH > area.right() {
                break;
            }
            let label = center(&symbol.to_uppercase(), CELL_WIDTH as usize);
            buf.set_string(x, weekday_y, label, weekday_style);
        }

        // Day cells
        let rows: Vec<&[CalendarDay]> = if self.expanded {
            self.state.weeks().collect()
        } else {
            vec![self.state.first_week()]
        };
        for (row, week) in rows.into_iter().enumerate() {
            let y = area.y + HEADER_HEIGHT + row as u16;
            if y >= area.bottom() {
                break;
            }
            for (col, day) in week.iter().enumerate() {
                let x = area.x + col as u16 * CELL_WIDTH;
                if x + CELL_WIDTH > area.right() {
                    break;
                }
                if let Some(style) = self.day_style(day, config) {
                    buf.set_string(x, y, format!(" {:>2}  ", day.day), style);
                }
            }
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(HEADER_HEIGHT + self.visible_rows() as u16)
    }

    fn preferred_width(&self) -> Option<u16> {
        Some(CELL_WIDTH * COLUMNS_PER_ROW as u16)
    }
}
