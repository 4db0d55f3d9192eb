/// Widget-based rendering for the terminal calendar
///
/// Widgets render themselves directly to a ratatui Buffer from a calendar
/// snapshot. They only read the snapshot; navigation goes through actions.

#[cfg(test)]
pub mod testing;

pub mod month_view;
pub use month_view::MonthView;

pub mod status_bar;
pub use status_bar::{KeyHint, StatusBar};

use ratatui::{buffer::Buffer, layout::Rect};
use crate::config::Config;

/// Core trait for renderable widgets
///
/// # Object Safety
///
/// This trait is object-safe, meaning you can use trait objects to store
/// different widget types in collections.
pub trait RenderableWidget {
    /// Render this widget into the provided buffer
    ///
    /// # Arguments
    ///
    /// * `area` - The rectangular area to render into
    /// * `buf` - The buffer to write to
    /// * `config` - Display configuration (colors, spillover visibility)
    fn render(&self, area: Rect, buf: &mut Buffer, config: &Config);

    /// Get the preferred height of this widget
    ///
    /// Returns None if the widget can adapt to any height.
    fn preferred_height(&self) -> Option<u16> {
        None
    }

    /// Get the preferred width of this widget
    ///
    /// Returns None if the widget can adapt to any width.
    fn preferred_width(&self) -> Option<u16> {
        None
    }
}
