//! Criteria form renderer.
//!
//! One line per field: a fixed-width label, then the value. The departure
//! stations render as an inline checklist:
//!
//! ```text
//! ▸ Gares de départ   [x] Paris Gare de Lyon  [ ] Paris Nord  [ ] Paris Est
//! ```

use crate::ui::helpers::{display_width, fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ChecklistItem, FieldValue, FormRow, FormView};

const LABEL_WIDTH: usize = 18;

/// Renders every form row and returns the next free row.
pub fn render_form(row: usize, form: &FormView, theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for field in &form.rows {
        current_row = render_form_row(current_row, field, theme, cols);
    }
    current_row
}

fn render_form_row(row: usize, field: &FormRow, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let marker = if field.is_focused { "▸ " } else { "  " };
    print!("{}", Theme::fg(&theme.colors.label_fg));
    print!("{marker}{}", fit(field.label, LABEL_WIDTH));
    print!("{}", Theme::reset());

    let used = display_width(marker) + LABEL_WIDTH;
    let remaining = cols.saturating_sub(used);

    match &field.value {
        FieldValue::Text(text) => {
            let color = if field.is_disabled { &theme.colors.disabled_fg } else { &theme.colors.text_normal };
            if field.is_focused && !field.is_disabled {
                print!("{}", Theme::fg(&theme.colors.selection_fg));
                print!("{}", Theme::bg(&theme.colors.selection_bg));
                print!(" {text} ");
                print!("{}", Theme::reset());
                print!("{}", " ".repeat(remaining.saturating_sub(display_width(text) + 2)));
            } else {
                print!("{}", Theme::fg(color));
                print!("{}", fit(text, remaining));
                print!("{}", Theme::reset());
            }
        }
        FieldValue::Editing(buffer) => {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
            print!(" {buffer}█ ");
            print!("{}", Theme::reset());
            print!("{}", " ".repeat(remaining.saturating_sub(display_width(buffer) + 3)));
        }
        FieldValue::Checklist(items) => render_checklist(items, theme, remaining),
    }

    row + 1
}

fn render_checklist(items: &[ChecklistItem], theme: &Theme, width: usize) {
    let mut used = 0;
    for item in items {
        let mark = if item.is_checked { "[x]" } else { "[ ]" };
        let cell_width = display_width(item.label) + 6;
        if used + cell_width > width {
            break;
        }

        if item.is_cursor {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else if item.is_checked {
            print!("{}", Theme::fg(&theme.colors.checked_fg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
        print!("{mark} {}", item.label);
        print!("{}", Theme::reset());
        print!("  ");
        used += cell_width;
    }
    print!("{}", " ".repeat(width.saturating_sub(used)));
}
