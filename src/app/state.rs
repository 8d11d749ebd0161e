//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for the plugin thread: the form
//! being edited, the last accepted result set with its pager, focus and input
//! modes, and the bookkeeping that lets only the most recent search win.
//!
//! # Search lifecycle
//!
//! Every submit takes a new request id and queues `(id, criteria)` behind a
//! timer. When a timer fires the oldest queued entry is taken; it is only sent
//! to the worker if it is still the latest request. Replies carry the id back,
//! and a reply is applied only when its id is the latest one issued. Older
//! timers and replies are dropped.
//!
//! # Example
//!
//! ```rust
//! use tgvmax::app::AppState;
//! use tgvmax::ui::Theme;
//! use tgvmax::Config;
//!
//! let mut state = AppState::new(Theme::default(), &Config::default());
//! let _schedule = state.submit_search();
//! assert!(state.is_searching());
//! ```

use super::form::{DateField, FormField, SearchForm, ANY_STATION_LABEL, NO_ZONE_LABEL};
use super::modes::{InputMode, Panel};
use super::pagination::Pager;
use super::Action;
use crate::domain::{FilterPolicy, Network, ResultSet, SearchCriteria};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ChecklistItem, EmptyState, FieldValue, FooterInfo, FormRow, FormView, HeaderInfo, PagerInfo,
    ResultsPage, ResultsPanel, UIViewModel,
};
use crate::worker::WorkerMessage;
use crate::Config;
use chrono::NaiveDate;
use std::collections::VecDeque;

/// Longest text accepted by the date editor (`YYYY-MM-DD`).
const DATE_INPUT_LEN: usize = 10;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    pub form: SearchForm,

    /// Last accepted result set; `None` until the first search completes.
    pub results: Option<ResultSet>,

    /// Pager over `results`; `None` when there are no rows.
    pub pager: Option<Pager>,

    pub panel: Panel,

    pub input_mode: InputMode,

    /// Text typed into the date editor.
    pub edit_buffer: String,

    /// Feedback line under the results.
    pub status: Option<String>,

    /// Number of trips in the loaded fixture, once the worker reports it.
    pub trip_count: Option<usize>,

    pub theme: Theme,

    pub filter_policy: FilterPolicy,

    pub search_delay_ms: u64,

    pub export_dir: String,

    pub fixture_file: Option<String>,

    /// Submitted searches waiting for their timer, oldest first.
    scheduled: VecDeque<(u64, SearchCriteria)>,

    /// Id of the most recent submit.
    latest_request: u64,

    /// Id of the most recent request that was answered.
    settled_request: u64,
}

impl AppState {
    #[must_use]
    pub fn new(theme: Theme, config: &Config) -> Self {
        Self {
            form: SearchForm::new(Network::standard()),
            results: None,
            pager: None,
            panel: Panel::Form,
            input_mode: InputMode::Normal,
            edit_buffer: String::new(),
            status: None,
            trip_count: None,
            theme,
            filter_policy: config.filter_policy,
            search_delay_ms: config.search_delay_ms,
            export_dir: config.export_dir.clone(),
            fixture_file: config.fixture_file.clone(),
            scheduled: VecDeque::new(),
            latest_request: 0,
            settled_request: 0,
        }
    }

    /// Whether a submitted search has not been answered yet.
    #[must_use]
    pub const fn is_searching(&self) -> bool {
        self.latest_request > self.settled_request
    }

    #[must_use]
    pub const fn latest_request(&self) -> u64 {
        self.latest_request
    }

    /// Snapshots the form and schedules a search for it.
    ///
    /// Any search still pending is superseded.
    pub fn submit_search(&mut self) -> Action {
        self.latest_request += 1;
        let criteria = self.form.snapshot();

        tracing::debug!(
            request_id = self.latest_request,
            empty_criteria = criteria.is_empty(),
            superseded = self.scheduled.len(),
            "search submitted"
        );

        self.scheduled.push_back((self.latest_request, criteria));
        self.status = None;

        #[allow(clippy::cast_precision_loss)]
        let delay_secs = self.search_delay_ms as f64 / 1000.0;
        Action::ScheduleSearch { delay_secs }
    }

    /// Takes the search whose timer just fired, if it is still current.
    pub fn take_due_search(&mut self) -> Option<WorkerMessage> {
        let (request_id, criteria) = self.scheduled.pop_front()?;

        if request_id != self.latest_request {
            tracing::debug!(request_id, latest = self.latest_request, "dropping superseded search");
            return None;
        }

        Some(WorkerMessage::search(request_id, criteria, self.filter_policy))
    }

    /// Applies a worker reply. Returns `false` for stale replies.
    pub fn accept_results(&mut self, request_id: u64, results: &ResultSet) -> bool {
        if request_id != self.latest_request {
            tracing::debug!(request_id, latest = self.latest_request, "dropping stale results");
            return false;
        }

        self.settled_request = request_id;
        self.pager = Pager::for_len(results.len());
        self.results = Some(results.clone());

        tracing::debug!(
            request_id,
            shown = results.len(),
            total = results.total_matches(),
            "results accepted"
        );
        true
    }

    /// Marks `request_id` as answered with an error. Returns `false` when stale.
    pub fn fail_search(&mut self, request_id: u64, message: &str) -> bool {
        if request_id != self.latest_request {
            return false;
        }
        self.settled_request = request_id;
        self.status = Some(format!("Recherche impossible : {message}"));
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.pager.as_mut().is_some_and(Pager::next)
    }

    pub fn previous_page(&mut self) -> bool {
        self.pager.as_mut().is_some_and(Pager::previous)
    }

    /// Builds the export request for the whole result set.
    ///
    /// Export is disabled while there is nothing to export; a status explains
    /// why and `None` is returned.
    pub fn export_request(&mut self) -> Option<WorkerMessage> {
        match &self.results {
            Some(results) if !results.is_empty() => {
                self.status = Some("Export en cours…".to_string());
                Some(WorkerMessage::export_csv(
                    results.trips().to_vec(),
                    self.export_dir.clone(),
                ))
            }
            _ => {
                self.status = Some("Aucun résultat à exporter".to_string());
                None
            }
        }
    }

    /// Opens the date editor on `field`, prefilled with its current value.
    pub fn begin_date_edit(&mut self, field: DateField) {
        self.edit_buffer = self
            .form
            .date(field)
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        self.input_mode = InputMode::EditingDate(field);
    }

    /// Appends a character to the date being typed. Only digits and `-` fit.
    pub fn push_date_char(&mut self, c: char) -> bool {
        if !(c.is_ascii_digit() || c == '-') || self.edit_buffer.len() >= DATE_INPUT_LEN {
            return false;
        }
        self.edit_buffer.push(c);
        true
    }

    /// Parses the edit buffer into the edited bound and closes the editor.
    ///
    /// Empty or unparsable text clears the bound and reports it in the status.
    pub fn commit_date_edit(&mut self) {
        let InputMode::EditingDate(field) = self.input_mode else {
            return;
        };

        let text = self.edit_buffer.trim();
        match NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            Ok(date) => {
                self.form.set_date(field, Some(date));
                self.status = None;
            }
            Err(e) => {
                tracing::debug!(input = %text, error = %e, "date input rejected");
                self.status = Some(if text.is_empty() {
                    format!("{} : date effacée", field.label())
                } else {
                    format!("{} : date invalide « {text} » (AAAA-MM-JJ), effacée", field.label())
                });
                self.form.set_date(field, None);
            }
        }

        self.edit_buffer.clear();
        self.input_mode = InputMode::Normal;
    }

    pub fn cancel_date_edit(&mut self) {
        self.edit_buffer.clear();
        self.input_mode = InputMode::Normal;
    }

    /// Computes the view model for the current frame.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        UIViewModel {
            header: self.compute_header(),
            form: self.compute_form(),
            results: self.compute_results(),
            footer: self.compute_footer(),
            status: self.status.clone(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let subtitle = match self.trip_count {
            Some(count) => format!("{count} trajets disponibles"),
            None => "Chargement des trajets…".to_string(),
        };
        HeaderInfo {
            title: " TGV Max ".to_string(),
            subtitle,
        }
    }

    fn compute_form(&self) -> FormView {
        let form_focused = self.panel == Panel::Form;
        let rows = FormField::ALL
            .iter()
            .map(|&field| FormRow {
                label: field.label(),
                value: self.field_value(field),
                is_focused: form_focused && self.form.focus() == field,
                is_disabled: field == FormField::ArrivalStation && !self.form.arrival_station_enabled(),
            })
            .collect();

        FormView {
            rows,
            is_focused: form_focused,
        }
    }

    fn field_value(&self, field: FormField) -> FieldValue {
        let network = self.form.network();
        let criteria = self.form.criteria();
        let zone_name = |id: Option<&str>| {
            id.and_then(|id| network.zone(id))
                .map_or(NO_ZONE_LABEL, |zone| zone.name)
                .to_string()
        };

        match field {
            FormField::Date(date_field) => match self.input_mode {
                InputMode::EditingDate(editing) if editing == date_field => {
                    FieldValue::Editing(self.edit_buffer.clone())
                }
                _ => FieldValue::Text(
                    self.form
                        .date(date_field)
                        .map_or_else(|| "--".to_string(), |d| d.format("%Y-%m-%d").to_string()),
                ),
            },
            FormField::DepartureZone => FieldValue::Text(zone_name(criteria.departure_zone.as_deref())),
            FormField::ArrivalZone => FieldValue::Text(zone_name(criteria.arrival_zone.as_deref())),
            FormField::DepartureStations => {
                let options = self.form.departure_station_options();
                if options.is_empty() {
                    return FieldValue::Text("Choisir une zone de départ".to_string());
                }
                let cursor_visible = self.panel == Panel::Form && self.form.focus() == field;
                FieldValue::Checklist(
                    options
                        .iter()
                        .enumerate()
                        .map(|(i, station)| ChecklistItem {
                            label: station.name,
                            is_checked: criteria.departure_stations.iter().any(|s| s == station.id),
                            is_cursor: cursor_visible && i == self.form.station_cursor(),
                        })
                        .collect(),
                )
            }
            FormField::ArrivalStation => FieldValue::Text(
                criteria
                    .arrival_station
                    .as_deref()
                    .and_then(|id| network.station(id))
                    .map_or(ANY_STATION_LABEL, |(_, station)| station.name)
                    .to_string(),
            ),
        }
    }

    fn compute_results(&self) -> ResultsPanel {
        if self.is_searching() {
            return ResultsPanel::Searching;
        }

        let Some(results) = &self.results else {
            return ResultsPanel::NotSearched;
        };

        let title = format!("Résultats ({})", results.count_label());

        let Some(pager) = self.pager else {
            return ResultsPanel::Empty(EmptyState {
                title,
                message: "Aucun trajet trouvé".to_string(),
                subtitle: "Modifiez vos critères puis relancez la recherche".to_string(),
            });
        };

        let trips = results
            .trips()
            .get(pager.page_range())
            .map(<[_]>::to_vec)
            .unwrap_or_default();

        ResultsPanel::Page(ResultsPage {
            title,
            trips,
            pager: pager.is_paginated().then_some(PagerInfo {
                current: pager.current(),
                total: pager.total_pages(),
                has_previous: pager.has_previous(),
                has_next: pager.has_next(),
            }),
            is_focused: self.panel == Panel::Results,
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.input_mode, self.panel) {
            (InputMode::EditingDate(_), _) => "AAAA-MM-JJ  Enter: valider  Esc: annuler  Backspace: effacer",
            (InputMode::Normal, Panel::Form) => {
                "j/k: champ  h/l: choix  Espace: cocher  Enter: éditer/rechercher  s: rechercher  i: inverser  x: vider  Tab: résultats  q: quitter"
            }
            (InputMode::Normal, Panel::Results) => {
                "h/l: page  e: exporter CSV  s: relancer  Tab: formulaire  q: quitter"
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Trip;

    fn state() -> AppState {
        AppState::new(Theme::default(), &Config::default())
    }

    fn trips(n: usize) -> Vec<Trip> {
        (0..n)
            .map(|i| Trip {
                id: format!("t{i:02}"),
                date: "2025-06-01".to_string(),
                time: format!("{:02}:00", i % 24),
                ..Trip::default()
            })
            .collect()
    }

    fn result_set(n: usize) -> ResultSet {
        ResultSet::build(
            &trips(n),
            &SearchCriteria::default(),
            FilterPolicy::Ignore,
            Network::standard(),
        )
    }

    #[test]
    fn test_only_latest_scheduled_search_is_sent() {
        let mut state = state();
        state.submit_search();
        state.submit_search();

        assert!(state.take_due_search().is_none());
        match state.take_due_search() {
            Some(WorkerMessage::Search { request_id, .. }) => assert_eq!(request_id, 2),
            other => panic!("unexpected message: {other:?}"),
        }
        assert!(state.take_due_search().is_none());
    }

    #[test]
    fn test_stale_results_do_not_replace_held_set() {
        let mut state = state();
        state.submit_search();
        assert!(state.accept_results(1, &result_set(3)));

        state.submit_search();
        assert!(!state.accept_results(1, &result_set(12)));
        assert_eq!(state.results.as_ref().map(ResultSet::len), Some(3));
        assert!(state.is_searching());
    }

    #[test]
    fn test_searching_panel_while_pending() {
        let mut state = state();
        assert_eq!(state.compute_viewmodel().results, ResultsPanel::NotSearched);

        state.submit_search();
        assert_eq!(state.compute_viewmodel().results, ResultsPanel::Searching);
    }

    #[test]
    fn test_empty_results_show_placeholder_and_block_export() {
        let mut state = state();
        state.submit_search();
        state.accept_results(1, &result_set(0));

        match state.compute_viewmodel().results {
            ResultsPanel::Empty(empty) => assert_eq!(empty.message, "Aucun trajet trouvé"),
            other => panic!("unexpected panel: {other:?}"),
        }
        assert!(state.export_request().is_none());
        assert!(state.status.is_some());
    }

    #[test]
    fn test_page_view_and_count_label() {
        let mut state = state();
        state.submit_search();
        state.accept_results(1, &result_set(60));
        state.next_page();

        match state.compute_viewmodel().results {
            ResultsPanel::Page(page) => {
                assert_eq!(page.title, "Résultats (50+)");
                assert_eq!(page.trips.len(), 10);
                let pager = page.pager.unwrap();
                assert_eq!((pager.current, pager.total), (2, 5));
                assert!(pager.has_previous && pager.has_next);
            }
            other => panic!("unexpected panel: {other:?}"),
        }
    }

    #[test]
    fn test_single_page_hides_pager() {
        let mut state = state();
        state.submit_search();
        state.accept_results(1, &result_set(4));

        match state.compute_viewmodel().results {
            ResultsPanel::Page(page) => {
                assert_eq!(page.title, "Résultats (4)");
                assert!(page.pager.is_none());
            }
            other => panic!("unexpected panel: {other:?}"),
        }
    }

    #[test]
    fn test_date_editor_commit_and_reject() {
        let mut state = state();
        state.begin_date_edit(DateField::DepartureFrom);
        for c in "2025-06-03x".chars() {
            state.push_date_char(c);
        }
        state.commit_date_edit();
        assert_eq!(
            state.form.date(DateField::DepartureFrom),
            NaiveDate::from_ymd_opt(2025, 6, 3)
        );
        assert_eq!(state.input_mode, InputMode::Normal);

        state.begin_date_edit(DateField::DepartureFrom);
        assert_eq!(state.edit_buffer, "2025-06-03");
        state.edit_buffer = "2025-13-40".to_string();
        state.commit_date_edit();
        assert_eq!(state.form.date(DateField::DepartureFrom), None);
        assert!(state.status.as_deref().is_some_and(|s| s.contains("invalide")));
    }

    #[test]
    fn test_export_request_covers_whole_set() {
        let mut state = state();
        state.submit_search();
        state.accept_results(1, &result_set(25));

        match state.export_request() {
            Some(WorkerMessage::ExportCsv { trips, .. }) => assert_eq!(trips.len(), 25),
            other => panic!("unexpected message: {other:?}"),
        }
    }
}
