//! Results table renderer.
//!
//! Seven columns, titled like the CSV export. Date, time and train reference
//! have fixed widths; the remaining width goes to zones and stations, stations
//! first.

use crate::export::CSV_HEADERS;
use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{PagerInfo, ResultsPage};

const COLUMN_GAP: &str = "  ";
const DATE_WIDTH: usize = 10;
const TIME_WIDTH: usize = 12;
const TRAIN_WIDTH: usize = 10;
const ZONE_WIDTH: usize = 12;
const MIN_STATION_WIDTH: usize = 8;

/// Column widths for a terminal `cols` wide, in `CSV_HEADERS` order.
fn column_widths(cols: usize) -> [usize; 7] {
    let gaps = COLUMN_GAP.len() * (CSV_HEADERS.len() - 1);
    let fixed = DATE_WIDTH + TIME_WIDTH + TRAIN_WIDTH + 2 * ZONE_WIDTH + gaps;
    let station = (cols.saturating_sub(fixed) / 2).max(MIN_STATION_WIDTH);

    [DATE_WIDTH, TIME_WIDTH, ZONE_WIDTH, station, ZONE_WIDTH, station, TRAIN_WIDTH]
}

fn print_cells(cells: [&str; 7], widths: &[usize; 7], cols: usize) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| fit(cell, *width))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    print!("{}", fit(&line, cols));
}

/// Renders a panel title, marked when the panel has focus.
pub fn render_panel_title(row: usize, title: &str, is_focused: bool, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.label_fg));
    let marker = if is_focused { "▸ " } else { "  " };
    print!("{}", fit(&format!("{marker}{title}"), cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders title, column headers, the page rows and the pager line.
///
/// Returns the next free row.
pub fn render_results_page(row: usize, page: &ResultsPage, theme: &Theme, cols: usize) -> usize {
    let widths = column_widths(cols);
    let mut current_row = render_panel_title(row, &page.title, page.is_focused, theme, cols);

    position_cursor(current_row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print_cells(CSV_HEADERS, &widths, cols);
    print!("{}", Theme::reset());
    current_row += 1;

    for trip in &page.trips {
        position_cursor(current_row, 1);
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print_cells(trip.columns(), &widths, cols);
        print!("{}", Theme::reset());
        current_row += 1;
    }

    if let Some(pager) = &page.pager {
        current_row = render_pager(current_row, pager, theme, cols);
    }

    current_row
}

/// Renders `‹ précédent   Page i / n   suivant ›`, dimming the hints that
/// would do nothing.
fn render_pager(row: usize, pager: &PagerInfo, theme: &Theme, cols: usize) -> usize {
    let hint = |label: &str, enabled: bool| {
        let color = if enabled { &theme.colors.label_fg } else { &theme.colors.disabled_fg };
        format!("{}{label}{}", Theme::fg(color), Theme::reset())
    };

    let page = format!("Page {} / {}", pager.current, pager.total);
    let visible_len = "‹ précédent".chars().count() + page.chars().count() + "suivant ›".chars().count() + 6;
    let padding = cols.saturating_sub(visible_len) / 2;

    position_cursor(row, 1);
    print!("{}", " ".repeat(padding));
    print!("{}", hint("‹ précédent", pager.has_previous));
    print!("   {}{page}{}   ", Theme::fg(&theme.colors.text_normal), Theme::reset());
    print!("{}", hint("suivant ›", pager.has_next));
    print!("{}", " ".repeat(cols.saturating_sub(padding + visible_len)));
    row + 1
}
