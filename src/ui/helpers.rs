//! Shared rendering utilities.
//!
//! Widths are counted in `char`s so accented station names ("Gare Arrivée")
//! pad and truncate correctly.

use crate::ui::theme::Theme;

/// Moves the cursor to a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of terminal cells `text` occupies, assuming one cell per `char`.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Pads or truncates `text` to exactly `width` cells.
///
/// Truncated text ends with `…`.
///
/// # Examples
///
/// ```
/// use tgvmax::ui::helpers::fit;
///
/// assert_eq!(fit("Lyon", 6), "Lyon  ");
/// assert_eq!(fit("Marseille Saint-Charles", 10), "Marseille…");
/// ```
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let len = display_width(text);
    if len <= width {
        let mut out = String::with_capacity(text.len() + width - len);
        out.push_str(text);
        out.extend(std::iter::repeat(' ').take(width - len));
        return out;
    }
    if width == 0 {
        return String::new();
    }

    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}

/// Prints `text` centered on a full-width line, padded with spaces.
pub fn print_centered(text: &str, cols: usize) {
    let text = if display_width(text) > cols { fit(text, cols) } else { text.to_string() };
    let len = display_width(&text);
    let padding = cols.saturating_sub(len) / 2;

    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
}

/// Clears `row` with the default colours.
pub fn clear_row(row: usize, cols: usize) {
    position_cursor(row, 1);
    print!("{}{}", Theme::reset(), " ".repeat(cols));
}
