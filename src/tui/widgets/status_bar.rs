/// StatusBar widget - status message and keyboard hints at the bottom of the screen
///
/// Renders two lines:
/// - Top line: horizontal separator
/// - Bottom line: status message (or error) on the left, key hints on the right
///
/// Error messages take precedence over plain status messages and are drawn in red.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};
use unicode_width::UnicodeWidthStr;

use crate::config::Config;
use crate::formatting::truncate;
use crate::tui::widgets::RenderableWidget;

/// Gap between the status text and the hints, and between hints
const HINT_GAP: usize = 2;

/// Represents a keyboard hint displayed in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    /// The keyboard key (e.g., "←/→", "q")
    pub key: String,
    /// The action description (e.g., "Month", "Quit")
    pub action: String,
}

impl KeyHint {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }

    fn width(&self) -> usize {
        self.key.width() + 1 + self.action.width()
    }
}

/// Widget for displaying status information and keyboard hints
#[derive(Debug, Clone)]
pub struct StatusBar {
    pub message: Option<String>,
    pub error: Option<String>,
    pub hints: Vec<KeyHint>,
}

impl StatusBar {
    /// Create a StatusBar with the calendar's default hints
    pub fn new() -> Self {
        Self {
            message: None,
            error: None,
            hints: default_hints(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn with_hints(mut self, hints: Vec<KeyHint>) -> Self {
        self.hints = hints;
        self
    }

    /// Left-hand text and its style
    fn status_text(&self) -> Option<(String, Style)> {
        if let Some(error) = &self.error {
            Some((format!("ERROR: {}", error), Style::default().fg(Color::Red)))
        } else {
            self.message
                .as_ref()
                .map(|message| (message.clone(), Style::default()))
        }
    }

    /// Hints that fit into `available` columns, in order
    fn visible_hints(&self, available: usize) -> Vec<&KeyHint> {
        let mut used = 0;
        let mut visible = Vec::new();
        for hint in &self.hints {
            let needed = if visible.is_empty() {
                hint.width()
            } else {
                hint.width() + HINT_GAP
            };
            if used + needed > available {
                break;
            }
            used += needed;
            visible.push(hint);
        }
        visible
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

/// Hints for the calendar key bindings
pub fn default_hints() -> Vec<KeyHint> {
    vec![
        KeyHint::new("←/→", "Month"),
        KeyHint::new("↑/↓", "Year"),
        KeyHint::new("t", "Today"),
        KeyHint::new("e", "Expand"),
        KeyHint::new("q", "Quit"),
    ]
}

impl RenderableWidget for StatusBar {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &Config) {
        if area.width == 0 || area.height < 2 {
            return;
        }
        let width = area.width as usize;

        let separator = if config.use_unicode { "─" } else { "-" };
        buf.set_string(area.x, area.y, separator.repeat(width), Style::default());

        let y = area.y + 1;
        let mut left_width = 0;
        if let Some((text, style)) = self.status_text() {
            // 1 char margin on the left
            let shown = truncate(&text, width.saturating_sub(1));
            buf.set_string(area.x + 1, y, shown, style);
            left_width = 1 + shown.width();
        }

        let available = width.saturating_sub(left_width + HINT_GAP + 1);
        let hints = self.visible_hints(available);
        if hints.is_empty() {
            return;
        }

        let hints_width: usize =
            hints.iter().map(|h| h.width()).sum::<usize>() + HINT_GAP * (hints.len() - 1);
        // 1 char margin on the right
        let mut x = area.x + (width - hints_width - 1) as u16;
        let key_style = Style::default().add_modifier(Modifier::BOLD);
        let action_style = Style::default().fg(Color::DarkGray);
        for (i, hint) in hints.iter().enumerate() {
            if i > 0 {
                x += HINT_GAP as u16;
            }
            buf.set_string(x, y, &hint.key, key_style);
            x += hint.key.width() as u16 + 1;
            buf.set_string(x, y, &hint.action, action_style);
            x += hint.action.width() as u16;
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2) // Separator line + status line
    }
}
