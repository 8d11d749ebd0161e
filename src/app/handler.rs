//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place `AppState` is mutated. It maps each
//! [`Event`] to state changes plus a list of [`Action`]s for the plugin shim to
//! execute, and reports whether the screen needs redrawing.
//!
//! # Event Types
//!
//! - **Form**: `FocusNext`, `FocusPrevious`, `NextOption`, `PreviousOption`,
//!   `ToggleStation`, `Activate`, `Invert`, `ClearField`
//! - **Results**: `NextPage`, `PreviousPage`, `Export`
//! - **Both panels**: `Submit`, `SwitchPanel`, `CloseFocus`
//! - **Date editor**: `Char`, `Backspace`, `Activate`, `Escape`
//! - **System**: `SearchTimerElapsed`, `PermissionsResult`, `WorkerResponse`
//!
//! # Example
//!
//! ```rust
//! use tgvmax::app::{handle_event, Action, AppState, Event};
//! use tgvmax::ui::Theme;
//! use tgvmax::Config;
//!
//! let mut state = AppState::new(Theme::default(), &Config::default());
//! let (_render, actions) = handle_event(&mut state, &Event::Submit)?;
//! assert!(matches!(actions[..], [Action::ScheduleSearch { .. }]));
//! # Ok::<(), tgvmax::TgvMaxError>(())
//! ```

use super::form::FormField;
use super::modes::{InputMode, Panel};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::infrastructure::paths::strip_host_prefix;
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events triggered by user input, timers, or worker responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves form focus to the next field (wraps).
    FocusNext,
    /// Moves form focus to the previous field (wraps).
    FocusPrevious,
    /// Selects the next option of the focused field.
    NextOption,
    /// Selects the previous option of the focused field.
    PreviousOption,
    /// Toggles the departure station under the checklist cursor.
    ToggleStation,
    /// Enter: opens the date editor, commits it, or submits the form.
    Activate,
    /// Submits the current criteria.
    Submit,
    /// Swaps departure and arrival.
    Invert,
    /// Clears the focused field.
    ClearField,
    /// Moves keyboard focus between the form and the results.
    SwitchPanel,
    NextPage,
    PreviousPage,
    /// Exports the whole result set as CSV.
    Export,
    /// Typed character while editing a date.
    Char(char),
    /// Removes the last typed character while editing a date.
    Backspace,
    /// Cancels the date editor, or dismisses the status line.
    Escape,
    /// Hides the plugin.
    CloseFocus,

    /// The search delay for the oldest scheduled search has elapsed.
    SearchTimerElapsed,

    /// Outcome of the host filesystem permission request.
    PermissionsResult {
        granted: bool,
    },

    /// Wraps a response from the background worker thread.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The boolean is `true` when the UI should re-render.
///
/// # Errors
///
/// Returns an error if an event cannot be processed. None of the current
/// events fail; failures from the worker arrive as responses and end up in the
/// status line.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    if let InputMode::EditingDate(_) = state.input_mode {
        if let Some(outcome) = handle_date_editor(state, event) {
            return Ok(outcome);
        }
    }

    match event {
        Event::FocusNext if state.panel == Panel::Form => {
            state.form.focus_next();
            Ok((true, vec![]))
        }
        Event::FocusPrevious if state.panel == Panel::Form => {
            state.form.focus_previous();
            Ok((true, vec![]))
        }
        Event::NextOption | Event::PreviousOption if state.panel == Panel::Form => {
            let delta = if *event == Event::NextOption { 1 } else { -1 };
            state.form.cycle_option(delta);
            Ok((true, vec![]))
        }
        Event::ToggleStation if state.panel == Panel::Form => {
            Ok((state.form.toggle_under_cursor(), vec![]))
        }
        Event::Activate => match (state.panel, state.form.focus()) {
            (Panel::Form, FormField::Date(field)) => {
                state.begin_date_edit(field);
                Ok((true, vec![]))
            }
            (Panel::Form, FormField::DepartureStations) if !state.form.departure_station_options().is_empty() => {
                Ok((state.form.toggle_under_cursor(), vec![]))
            }
            (Panel::Form, _) => Ok((true, vec![state.submit_search()])),
            (Panel::Results, _) => Ok((false, vec![])),
        },
        Event::Submit => Ok((true, vec![state.submit_search()])),
        Event::Invert if state.panel == Panel::Form => {
            state.form.invert();
            Ok((true, vec![]))
        }
        Event::ClearField if state.panel == Panel::Form => {
            state.form.clear_focused();
            Ok((true, vec![]))
        }
        Event::SwitchPanel => {
            state.panel = state.panel.toggled();
            Ok((true, vec![]))
        }
        Event::NextPage if state.panel == Panel::Results => Ok((state.next_page(), vec![])),
        Event::PreviousPage if state.panel == Panel::Results => Ok((state.previous_page(), vec![])),
        Event::Export => {
            let actions = state
                .export_request()
                .map(Action::PostToWorker)
                .into_iter()
                .collect();
            Ok((true, actions))
        }
        Event::Escape => Ok((state.status.take().is_some(), vec![])),
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::SearchTimerElapsed => match state.take_due_search() {
            Some(message) => {
                tracing::debug!(request_id = state.latest_request(), "posting search to worker");
                Ok((false, vec![Action::PostToWorker(message)]))
            }
            None => Ok((false, vec![])),
        },
        Event::PermissionsResult { granted } => {
            if !granted {
                tracing::warn!("filesystem access denied, using the embedded fixture");
                state.status = Some("Accès aux fichiers refusé : export indisponible".to_string());
            }
            let fixture_file = if *granted { state.fixture_file.clone() } else { None };
            Ok((!granted, vec![Action::PostToWorker(WorkerMessage::load_fixture(fixture_file))]))
        }
        Event::WorkerResponse(response) => Ok(handle_worker_response(state, response)),
        Event::FocusNext
        | Event::FocusPrevious
        | Event::NextOption
        | Event::PreviousOption
        | Event::ToggleStation
        | Event::Invert
        | Event::ClearField
        | Event::NextPage
        | Event::PreviousPage
        | Event::Char(_)
        | Event::Backspace => Ok((false, vec![])),
    }
}

/// Routes editor keys while a date field is open.
///
/// Returns `None` for events the editor does not consume, so timers and worker
/// replies keep flowing.
fn handle_date_editor(state: &mut AppState, event: &Event) -> Option<(bool, Vec<Action>)> {
    match event {
        Event::Char(c) => Some((state.push_date_char(*c), vec![])),
        Event::Backspace => Some((state.edit_buffer.pop().is_some(), vec![])),
        Event::Activate => {
            state.commit_date_edit();
            Some((true, vec![]))
        }
        Event::Escape => {
            state.cancel_date_edit();
            Some((true, vec![]))
        }
        Event::SearchTimerElapsed | Event::PermissionsResult { .. } | Event::WorkerResponse(_) => None,
        _ => Some((false, vec![])),
    }
}

fn handle_worker_response(state: &mut AppState, response: &WorkerResponse) -> (bool, Vec<Action>) {
    match response {
        WorkerResponse::FixtureLoaded { trip_count, origin } => {
            tracing::debug!(trip_count, origin = %origin, "fixture ready");
            state.trip_count = Some(*trip_count);
            (true, vec![])
        }
        WorkerResponse::SearchCompleted { request_id, results } => {
            (state.accept_results(*request_id, results), vec![])
        }
        WorkerResponse::SearchFailed { request_id, message } => {
            (state.fail_search(*request_id, message), vec![])
        }
        WorkerResponse::Exported { path, rows } => {
            tracing::info!(path = %path, rows, "export written");
            state.status = Some(format!("{rows} trajets exportés vers {}", strip_host_prefix(path)));
            (true, vec![])
        }
        WorkerResponse::Error { message } => {
            tracing::error!(message = %message, "worker error");
            state.status = Some(message.clone());
            (true, vec![])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FilterPolicy, Network, ResultSet, SearchCriteria, Trip};
    use crate::ui::viewmodel::ResultsPanel;
    use crate::ui::Theme;
    use crate::Config;

    fn state() -> AppState {
        AppState::new(Theme::default(), &Config::default())
    }

    fn results(n: usize) -> ResultSet {
        let trips: Vec<Trip> = (0..n)
            .map(|i| Trip {
                id: format!("t{i}"),
                date: "2025-06-02".to_string(),
                time: "07:00".to_string(),
                ..Trip::default()
            })
            .collect();
        ResultSet::build(&trips, &SearchCriteria::default(), FilterPolicy::Ignore, Network::standard())
    }

    #[test]
    fn test_submit_schedules_configured_delay() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        assert!(render);
        assert_eq!(actions, vec![Action::ScheduleSearch { delay_secs: 0.5 }]);
    }

    #[test]
    fn test_activate_on_zone_submits() {
        let mut state = state();
        for _ in 0..4 {
            handle_event(&mut state, &Event::FocusNext).unwrap();
        }
        assert_eq!(state.form.focus(), FormField::DepartureZone);

        let (_, actions) = handle_event(&mut state, &Event::Activate).unwrap();
        assert!(matches!(actions[..], [Action::ScheduleSearch { .. }]));
    }

    #[test]
    fn test_date_editor_swallows_command_keys() {
        let mut state = state();
        handle_event(&mut state, &Event::Activate).unwrap();
        assert!(matches!(state.input_mode, InputMode::EditingDate(_)));

        let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        assert!(actions.is_empty());

        handle_event(&mut state, &Event::Char('2')).unwrap();
        handle_event(&mut state, &Event::Escape).unwrap();
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.edit_buffer.is_empty());
    }

    #[test]
    fn test_superseded_reply_is_ignored() {
        let mut state = state();
        handle_event(&mut state, &Event::Submit).unwrap();
        handle_event(&mut state, &Event::Submit).unwrap();

        let stale = WorkerResponse::SearchCompleted { request_id: 1, results: results(5) };
        let (render, _) = handle_event(&mut state, &Event::WorkerResponse(stale)).unwrap();
        assert!(!render);
        assert!(state.results.is_none());

        let fresh = WorkerResponse::SearchCompleted { request_id: 2, results: results(15) };
        let (render, _) = handle_event(&mut state, &Event::WorkerResponse(fresh)).unwrap();
        assert!(render);
        assert!(matches!(state.compute_viewmodel().results, ResultsPanel::Page(_)));
    }

    #[test]
    fn test_paging_requires_results_focus() {
        let mut state = state();
        handle_event(&mut state, &Event::Submit).unwrap();
        state.accept_results(1, &results(25));

        let (render, _) = handle_event(&mut state, &Event::NextPage).unwrap();
        assert!(!render);

        handle_event(&mut state, &Event::SwitchPanel).unwrap();
        let (render, _) = handle_event(&mut state, &Event::NextPage).unwrap();
        assert!(render);
        assert_eq!(state.pager.map(|p| p.current()), Some(2));
    }

    #[test]
    fn test_export_posts_to_worker() {
        let mut state = state();
        handle_event(&mut state, &Event::Submit).unwrap();
        state.accept_results(1, &results(3));

        let (_, actions) = handle_event(&mut state, &Event::Export).unwrap();
        assert!(matches!(actions[..], [Action::PostToWorker(WorkerMessage::ExportCsv { .. })]));

        let done = WorkerResponse::Exported { path: "/host/tgvmax-results-2025-06-01.csv".to_string(), rows: 3 };
        handle_event(&mut state, &Event::WorkerResponse(done)).unwrap();
        assert_eq!(
            state.status.as_deref(),
            Some("3 trajets exportés vers ~/tgvmax-results-2025-06-01.csv")
        );
    }

    #[test]
    fn test_denied_permissions_fall_back_to_embedded_fixture() {
        let mut state = state();
        state.fixture_file = Some("~/trips.json".to_string());

        let (_, actions) = handle_event(&mut state, &Event::PermissionsResult { granted: false }).unwrap();
        assert!(matches!(
            actions[..],
            [Action::PostToWorker(WorkerMessage::LoadFixture { fixture_file: None, .. })]
        ));
    }
}
