//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready strings and flags only; no lookups or
//! business rules happen while drawing.

use crate::domain::Trip;

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,

    pub form: FormView,

    pub results: ResultsPanel,

    pub footer: FooterInfo,

    /// Transient feedback (export path, invalid date, worker error).
    pub status: Option<String>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,

    /// Secondary line, e.g. the number of trips loaded.
    pub subtitle: String,
}

/// The criteria form, one row per field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub rows: Vec<FormRow>,

    /// Whether the form panel has keyboard focus.
    pub is_focused: bool,
}

/// A single labelled form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRow {
    pub label: &'static str,

    pub value: FieldValue,

    pub is_focused: bool,

    /// Field cannot be changed right now (arrival station without zone).
    pub is_disabled: bool,
}

/// Rendered content of a form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Plain text: a date, a zone or station name, or a placeholder.
    Text(String),

    /// Date being typed; the renderer shows a caret after it.
    Editing(String),

    /// Departure station checkboxes.
    Checklist(Vec<ChecklistItem>),
}

/// One checkbox of the departure-station list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem {
    pub label: &'static str,

    pub is_checked: bool,

    /// Under the checklist cursor.
    pub is_cursor: bool,
}

/// What the results area shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsPanel {
    /// No search submitted yet.
    NotSearched,

    /// A search is scheduled or running.
    Searching,

    /// The last search returned nothing.
    Empty(EmptyState),

    /// One page of the last result set.
    Page(ResultsPage),
}

/// One page of results, ready to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsPage {
    /// "Résultats (n)", with "50+" when the set was capped.
    pub title: String,

    pub trips: Vec<Trip>,

    /// Present only when there is more than one page.
    pub pager: Option<PagerInfo>,

    pub is_focused: bool,
}

/// Page indicator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerInfo {
    pub current: usize,
    pub total: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub title: String,

    pub message: String,

    pub subtitle: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text for the focused panel.
    pub keybindings: String,
}
