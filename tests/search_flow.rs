//! Drives the plugin event loop against a real worker, the way `main.rs` does,
//! without the Zellij host.

use tgvmax::ui::viewmodel::ResultsPanel;
use tgvmax::worker::{TgvMaxWorker, WorkerMessage, WorkerResponse};
use tgvmax::{handle_event, initialize, Action, AppState, Config, Event, Panel};

/// Feeds `event` to the state and lets the worker answer every posted message.
fn pump(state: &mut AppState, worker: &mut TgvMaxWorker, event: Event) -> Vec<Action> {
    let mut pending = vec![event];
    let mut other_actions = Vec::new();

    while let Some(event) = pending.pop() {
        let (_render, actions) = handle_event(state, &event).unwrap();
        for action in actions {
            match action {
                Action::PostToWorker(message) => {
                    pending.push(Event::WorkerResponse(worker.handle_message(message)));
                }
                other => other_actions.push(other),
            }
        }
    }

    other_actions
}

fn loaded(config: &Config) -> (AppState, TgvMaxWorker) {
    let mut state = initialize(config);
    let mut worker = TgvMaxWorker::default();
    pump(&mut state, &mut worker, Event::PermissionsResult { granted: true });
    (state, worker)
}

#[test]
fn test_fixture_loads_after_permissions() {
    let (state, _worker) = loaded(&Config::default());

    assert_eq!(state.trip_count, Some(54));
    assert_eq!(state.compute_viewmodel().header.subtitle, "54 trajets disponibles");
}

#[test]
fn test_submit_search_and_page_through_results() {
    let (mut state, mut worker) = loaded(&Config::default());

    let actions = pump(&mut state, &mut worker, Event::Submit);
    assert_eq!(actions, vec![Action::ScheduleSearch { delay_secs: 0.5 }]);
    assert!(state.is_searching());
    assert_eq!(state.compute_viewmodel().results, ResultsPanel::Searching);

    pump(&mut state, &mut worker, Event::SearchTimerElapsed);
    assert!(!state.is_searching());

    let page = match state.compute_viewmodel().results {
        ResultsPanel::Page(page) => page,
        other => panic!("expected a results page, got {other:?}"),
    };
    assert_eq!(page.title, "Résultats (50+)");
    assert_eq!(page.trips.len(), 10);
    assert!(page
        .trips
        .windows(2)
        .all(|pair| (pair[0].date.as_str(), pair[0].time.as_str()) <= (pair[1].date.as_str(), pair[1].time.as_str())));

    pump(&mut state, &mut worker, Event::SwitchPanel);
    assert_eq!(state.panel, Panel::Results);
    for _ in 0..10 {
        pump(&mut state, &mut worker, Event::NextPage);
    }

    let pager = state.pager.as_ref().expect("pager for 50 results");
    assert_eq!(pager.current(), 5);
    assert_eq!(pager.total_pages(), 5);
    assert!(!pager.has_next());
}

#[test]
fn test_only_latest_submit_reaches_the_worker() {
    let (mut state, mut worker) = loaded(&Config::default());

    pump(&mut state, &mut worker, Event::Submit);
    pump(&mut state, &mut worker, Event::Submit);

    let (_, first) = handle_event(&mut state, &Event::SearchTimerElapsed).unwrap();
    assert!(first.is_empty());

    let (_, second) = handle_event(&mut state, &Event::SearchTimerElapsed).unwrap();
    match second.as_slice() {
        [Action::PostToWorker(WorkerMessage::Search { request_id, .. })] => {
            assert_eq!(*request_id, state.latest_request());
        }
        other => panic!("expected one search, got {other:?}"),
    }
}

#[test]
fn test_stale_reply_is_ignored() {
    let (mut state, mut worker) = loaded(&Config::default());

    pump(&mut state, &mut worker, Event::Submit);
    let stale_id = state.latest_request();
    pump(&mut state, &mut worker, Event::Submit);

    let reply = worker.handle_message(WorkerMessage::search(
        stale_id,
        state.form.snapshot(),
        state.filter_policy,
    ));
    assert!(matches!(reply, WorkerResponse::SearchCompleted { .. }));

    let (render, _) = handle_event(&mut state, &Event::WorkerResponse(reply)).unwrap();
    assert!(!render);
    assert!(state.results.is_none());
    assert!(state.is_searching());
}

#[test]
fn test_export_writes_csv_and_reports_status() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        export_dir: dir.path().to_string_lossy().into_owned(),
        ..Config::default()
    };
    let (mut state, mut worker) = loaded(&config);

    pump(&mut state, &mut worker, Event::Export);
    assert_eq!(state.status.as_deref(), Some("Aucun résultat à exporter"));

    pump(&mut state, &mut worker, Event::Submit);
    pump(&mut state, &mut worker, Event::SearchTimerElapsed);
    pump(&mut state, &mut worker, Event::Export);

    let status = state.status.clone().unwrap_or_default();
    assert!(status.starts_with("50 trajets exportés vers "), "status: {status}");

    let exported: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(exported.len(), 1);

    let path = exported[0].as_ref().unwrap().path();
    let contents = std::fs::read_to_string(path).unwrap();
    assert_eq!(contents.lines().count(), 51);
}
