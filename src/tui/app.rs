/// Terminal calendar application state
///
/// Key presses become [`UiAction`]s. Calendar actions are queued on the
/// navigation's command channel and applied once per loop iteration by
/// [`CalendarApp::process_commands`], so the view only ever renders
/// complete snapshots.
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
};
use tracing::{debug, warn};

use crate::config::Config;
use crate::navigation::{CalendarNavigation, CommandSender};
use crate::tui::keys::UiAction;
use crate::tui::widgets::{MonthView, RenderableWidget, StatusBar};

pub struct CalendarApp {
    navigation: CalendarNavigation,
    sender: CommandSender,
    expanded: bool,
    error: Option<String>,
}

impl CalendarApp {
    pub fn new(navigation: CalendarNavigation) -> Self {
        let sender = navigation.command_sender();
        Self {
            navigation,
            sender,
            expanded: true,
            error: None,
        }
    }

    pub fn navigation(&self) -> &CalendarNavigation {
        &self.navigation
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Handle one UI action; returns false when the app should quit
    pub fn handle(&mut self, action: UiAction) -> bool {
        match action {
            UiAction::Quit => {
                debug!("ACTION: quit");
                return false;
            }
            UiAction::ToggleExpanded => {
                self.expanded = !self.expanded;
                debug!("ACTION: expanded = {}", self.expanded);
            }
            UiAction::Calendar(action) => {
                if let Err(e) = self.sender.send(action) {
                    warn!("ACTION: failed to queue {:?}: {}", action, e);
                    self.error = Some(e.to_string());
                }
            }
        }
        true
    }

    /// Apply queued calendar commands, returning how many ran
    ///
    /// The last failure, if any, is shown in the status bar until the next
    /// successful command.
    pub fn process_commands(&mut self) -> usize {
        let report = self.navigation.process_commands();
        if let Some((action, e)) = report.failed.last() {
            warn!("CMD: {:?} failed: {}", action, e);
            self.error = Some(e.to_string());
        } else if report.applied > 0 {
            self.error = None;
        }
        report.processed()
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, config: &Config) {
        let state = self.navigation.state();
        let clock = self.navigation.services().clock.clone();
        let view = MonthView::new(&state, clock.as_ref(), self.expanded);

        let mut status = StatusBar::new()
            .with_message(format!("{} {}", state.month_label(), state.year_label()));
        if let Some(error) = &self.error {
            status = status.with_error(error.clone());
        }

        let [calendar_area, status_area] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(status.preferred_height().unwrap_or(2)),
        ])
        .areas(area);

        // Center the grid horizontally, one blank line from the top
        let width = view.preferred_width().unwrap_or(calendar_area.width);
        let height = view.preferred_height().unwrap_or(calendar_area.height);
        let x = calendar_area.x + calendar_area.width.saturating_sub(width) / 2;
        let grid_area = Rect::new(
            x,
            calendar_area.y.saturating_add(1),
            width.min(calendar_area.width),
            height.min(calendar_area.height.saturating_sub(1)),
        );

        view.render(grid_area, buf, config);
        status.render(status_area, buf, config);
    }
}
