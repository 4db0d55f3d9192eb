/// Testing utilities for widget rendering
///
/// Helpers for rendering widgets into an in-memory buffer and inspecting the result.

use ratatui::{buffer::Buffer, layout::Rect, style::Color};

use crate::config::{Config, ThemeConfig};
use super::RenderableWidget;

/// Create a test Config with a fixed theme
///
/// Explicit colors keep tests independent of default theme changes.
pub fn test_config() -> Config {
    Config {
        use_unicode: true,
        show_spillover: true,
        theme: ThemeConfig {
            day_fg: Color::White,
            today_fg: Color::Rgb(0, 122, 255),
            weekday_fg: Color::Gray,
            spillover_fg: Some(Color::DarkGray),
        },
        ..Config::default()
    }
}

/// Render a widget to a buffer using [`test_config`]
pub fn render_widget(widget: &impl RenderableWidget, width: u16, height: u16) -> Buffer {
    let config = test_config();
    render_widget_with_config(widget, width, height, &config)
}

/// Render a widget to a buffer with a custom config
pub fn render_widget_with_config(
    widget: &impl RenderableWidget,
    width: u16,
    height: u16,
    config: &Config,
) -> Buffer {
    let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
    widget.render(buf.area, &mut buf, config);
    buf
}

/// Convert a buffer to a string, one line per row
pub fn buffer_to_string(buf: &Buffer) -> String {
    let area = buf.area();
    (0..area.height)
        .map(|y| buffer_line(buf, y))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Get the text content of a specific line in the buffer
pub fn buffer_line(buf: &Buffer, line: u16) -> String {
    let area = buf.area();
    let mut output = String::new();

    for x in 0..area.width {
        let cell = &buf[(x, line)];
        output.push_str(cell.symbol());
    }

    output
}

/// Get a single cell from the buffer
pub fn get_cell(buf: &Buffer, x: u16, y: u16) -> &ratatui::buffer::Cell {
    &buf[(x, y)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Style;

    struct TestWidget {
        text: String,
    }

    impl RenderableWidget for TestWidget {
        fn render(&self, area: Rect, buf: &mut Buffer, _config: &Config) {
            buf.set_string(area.x, area.y, &self.text, Style::default());
        }
    }

    #[test]
    fn test_render_widget() {
        let widget = TestWidget {
            text: "Sun".to_string(),
        };
        let buf = render_widget(&widget, 10, 1);

        assert_eq!(get_cell(&buf, 0, 0).symbol(), "S");
        assert_eq!(get_cell(&buf, 2, 0).symbol(), "n");
    }

    #[test]
    fn test_buffer_to_string() {
        let widget = TestWidget {
            text: "Hi".to_string(),
        };
        let buf = render_widget(&widget, 5, 2);
        assert_eq!(buffer_to_string(&buf), "Hi   \n     ");
    }

    #[test]
    fn test_buffer_line() {
        let widget = TestWidget {
            text: "Test".to_string(),
        };
        let buf = render_widget(&widget, 10, 1);
        assert_eq!(buffer_line(&buf, 0), "Test      ");
    }

    #[test]
    fn test_config_has_explicit_spillover_color() {
        let config = test_config();
        assert_eq!(config.theme.spillover_fg(), Color::DarkGray);
        assert!(config.show_spillover);
    }
}
