//! Placeholders for the results area.
//!
//! Covers the three states without a table: before the first search, while a
//! search is pending, and after a search that matched nothing.

use crate::ui::helpers::{position_cursor, print_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

use super::table::render_panel_title;

/// Renders the "no trips found" placeholder under the results title.
///
/// ```text
/// Résultats (0)
///
///                 Aucun trajet trouvé
///       Modifiez vos critères puis relancez la recherche
/// ```
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let row = render_panel_title(row, &empty.title, false, theme, cols) + 1;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print_centered(&empty.message, cols);
    print!("{}", Theme::reset());

    position_cursor(row + 1, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print_centered(&empty.subtitle, cols);
    print!("{}", Theme::reset());

    row + 2
}

/// Renders a single dimmed hint line (no search yet, search in progress).
pub fn render_hint(row: usize, hint: &str, theme: &Theme, cols: usize) -> usize {
    position_cursor(row + 1, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print_centered(hint, cols);
    print!("{}", Theme::reset());
    row + 2
}
