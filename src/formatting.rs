use unicode_width::UnicodeWidthStr;

/// Format a header with text and underline
///
/// # Arguments
/// * `text` - The header text to display
/// * `double_line` - If true, uses double-line (═/=), otherwise single-line (─/-)
/// * `use_unicode` - Box-drawing characters when true, ASCII otherwise
///
/// # Returns
/// A formatted string with the header text and an underline matching its display width
pub fn format_header(text: &str, double_line: bool, use_unicode: bool) -> String {
    let separator_char = match (double_line, use_unicode) {
        (true, true) => "═",
        (false, true) => "─",
        (true, false) => "=",
        (false, false) => "-",
    };
    format!("{}\n{}\n", text, separator_char.repeat(text.width()))
}

/// Center `text` in a field of `width` columns, truncating if it does not fit
pub fn center(text: &str, width: usize) -> String {
    let text = truncate(text, width);
    let text_width = text.width();
    let left = (width - text_width) / 2;
    let right = width - text_width - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// Keep at most `width` display columns of `text`
pub fn truncate(text: &str, width: usize) -> &str {
    let mut used = 0;
    for (idx, ch) in text.char_indices() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + ch_width > width {
            return &text[..idx];
        }
        used += ch_width;
    }
    text
}
