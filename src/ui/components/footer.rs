//! Footer and status line renderers.

use crate::ui::helpers::{clear_row, fit, position_cursor, print_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the keybinding hints centered and dimmed.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print_centered(&footer.keybindings, cols);
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the status message, or blanks the line when there is none.
pub fn render_status(row: usize, status: Option<&str>, theme: &Theme, cols: usize) -> usize {
    let Some(message) = status else {
        clear_row(row, cols);
        return row + 1;
    };

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.status_fg));
    print!("{}", fit(&format!(" {message}"), cols));
    print!("{}", Theme::reset());
    row + 1
}
