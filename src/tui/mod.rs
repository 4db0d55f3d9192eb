pub mod app;
pub mod keys;
pub mod widgets;

pub use app::CalendarApp;
pub use keys::{key_to_action, UiAction};

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::config::Config;
use crate::navigation::CalendarNavigation;

/// Event polling interval; also how often "today" is re-checked on screen
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Main entry point for TUI mode
pub fn run(navigation: CalendarNavigation, config: &Config) -> Result<(), io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, CalendarApp::new(navigation), config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: CalendarApp,
    config: &Config,
) -> Result<(), io::Error> {
    loop {
        // Apply queued navigation before drawing so the frame shows the latest month
        let processed = app.process_commands();
        if processed > 0 {
            tracing::debug!("LOOP: Processed {} commands", processed);
        }

        terminal.draw(|f| {
            let area = f.area();
            app.render(area, f.buffer_mut(), config);
        })?;

        if !event::poll(EVENT_POLL_INTERVAL)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(action) = key_to_action(key) {
                if !app.handle(action) {
                    tracing::debug!("ACTION: Quitting application");
                    break;
                }
            }
        }
    }
    Ok(())
}
