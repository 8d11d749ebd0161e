//! Composable UI component renderers.
//!
//! # Components
//!
//! - `header`: Title bar and fixture summary
//! - `form`: Criteria form with the departure-station checklist
//! - `table`: Results page, column headers and pager
//! - `empty`: Placeholders when there is no table to show
//! - `footer`: Status line and keybinding hints
//!
//! # Layout
//!
//! ```text
//! [Header title]
//! [Header subtitle]
//! [Border]
//! [Form rows × 8]
//! [Border]
//! [Results title / table / pager, or a placeholder]
//! [padding]
//! [Status]
//! [Border]
//! [Footer]
//! ```

mod empty;
mod footer;
mod form;
mod header;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ResultsPanel, UIViewModel};

use empty::{render_empty_state, render_hint};
use footer::{render_footer, render_status};
use form::render_form;
use header::render_header;
use table::render_results_page;

/// Renders a horizontal rule and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the whole screen for `vm`.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 1;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_form(current_row, &vm.form, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    let _current_row = match &vm.results {
        ResultsPanel::NotSearched => {
            render_hint(current_row, "Renseignez vos critères puis lancez la recherche (s)", theme, cols)
        }
        ResultsPanel::Searching => render_hint(current_row, "Recherche en cours…", theme, cols),
        ResultsPanel::Empty(empty) => render_empty_state(current_row, empty, theme, cols),
        ResultsPanel::Page(page) => render_results_page(current_row, page, theme, cols),
    };

    let footer_row = rows;
    let border_row = footer_row.saturating_sub(1);
    let status_row = border_row.saturating_sub(1);

    render_status(status_row, vm.status.as_deref(), theme, cols);
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
