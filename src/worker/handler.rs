//! Worker thread implementation for trip search and CSV export.
//!
//! Searching and exporting run off the render thread: the worker owns the trip
//! fixture, builds result sets on request and writes export files. Each request
//! joins the plugin's trace through the context carried in the message.

use crate::domain::error::{Result, TgvMaxError};
use crate::domain::{FilterPolicy, Network, ResultSet, SearchCriteria, Trip};
use crate::export::write_export;
use crate::infrastructure::paths;
use crate::storage::{JsonFixture, TripSource};
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// Worker thread state.
///
/// Runs on a separate thread spawned by Zellij. The trip source is loaded by
/// `LoadFixture`, or lazily from the embedded fixture when a search arrives
/// first.
#[derive(Serialize, Deserialize, Default)]
pub struct TgvMaxWorker {
    #[serde(skip)]
    source: Option<Box<dyn TripSource>>,
}

impl TgvMaxWorker {
    /// Creates a worker over an already loaded trip source.
    #[must_use]
    pub fn with_source(source: Box<dyn TripSource>) -> Self {
        Self { source: Some(source) }
    }

    /// Loads the fixture from `fixture_file`, or the embedded one when unset.
    fn open_fixture(fixture_file: Option<&str>) -> Result<JsonFixture> {
        match fixture_file.map(str::trim).filter(|f| !f.is_empty()) {
            Some(file) => JsonFixture::from_file(paths::expand_tilde(file)),
            None => JsonFixture::embedded(),
        }
    }

    /// Returns the trip source, loading the embedded fixture if needed.
    fn source(&mut self) -> Result<&dyn TripSource> {
        if self.source.is_none() {
            tracing::debug!("no fixture loaded yet, falling back to the embedded one");
            self.source = Some(Box::new(JsonFixture::embedded()?));
        }

        self.source
            .as_deref()
            .ok_or_else(|| TgvMaxError::Worker("trip source unavailable".to_string()))
    }

    /// Handles the `LoadFixture` message.
    fn handle_load_fixture(&mut self, fixture_file: Option<&str>) -> WorkerResponse {
        match Self::open_fixture(fixture_file) {
            Ok(fixture) => {
                let trip_count = fixture.trips().len();
                let origin = fixture.describe();
                tracing::info!(trip_count, origin = %origin, "trip fixture loaded");
                self.source = Some(Box::new(fixture));
                WorkerResponse::FixtureLoaded { trip_count, origin }
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load trip fixture");
                WorkerResponse::Error {
                    message: format!("Chargement des trajets impossible : {e}"),
                }
            }
        }
    }

    /// Handles the `Search` message.
    ///
    /// The response always echoes `request_id` so the plugin can drop answers to
    /// superseded searches.
    fn handle_search(
        &mut self,
        request_id: u64,
        criteria: &SearchCriteria,
        policy: FilterPolicy,
    ) -> WorkerResponse {
        match self.source() {
            Ok(source) => {
                let results = ResultSet::build(source.trips(), criteria, policy, Network::standard());
                tracing::debug!(
                    request_id,
                    shown = results.len(),
                    total = results.total_matches(),
                    "search completed"
                );
                WorkerResponse::SearchCompleted { request_id, results }
            }
            Err(e) => {
                tracing::warn!(request_id, error = %e, "search failed");
                WorkerResponse::SearchFailed {
                    request_id,
                    message: e.to_string(),
                }
            }
        }
    }

    /// Handles the `ExportCsv` message.
    fn handle_export(trips: &[Trip], export_dir: &str) -> WorkerResponse {
        let dir = paths::resolve_export_dir(export_dir);
        let today = chrono::Utc::now().date_naive();

        match write_export(&dir, trips, today) {
            Ok(path) => {
                tracing::info!(path = ?path, rows = trips.len(), "results exported");
                WorkerResponse::Exported {
                    path: path.display().to_string(),
                    rows: trips.len(),
                }
            }
            Err(e) => {
                tracing::warn!(dir = ?dir, error = %e, "export failed");
                WorkerResponse::Error {
                    message: format!("Export impossible : {e}"),
                }
            }
        }
    }

    /// Attaches the parent trace context carried by `message` to this thread.
    ///
    /// The returned guard must be held while the message is processed.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = match message {
            WorkerMessage::LoadFixture { trace_context, .. }
            | WorkerMessage::Search { trace_context, .. }
            | WorkerMessage::ExportCsv { trace_context, .. } => trace_context,
        }
        .as_ref()?;

        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        let otel_context = opentelemetry::Context::current().with_remote_span_context(span_context);

        Some(otel_context.attach())
    }

    /// Processes one message and returns the response for the plugin.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);

        match message {
            WorkerMessage::LoadFixture { fixture_file, .. } => {
                let _span = tracing::debug_span!("worker_load_fixture").entered();
                self.handle_load_fixture(fixture_file.as_deref())
            }

            WorkerMessage::Search {
                request_id,
                criteria,
                policy,
                ..
            } => {
                let _span = tracing::debug_span!("worker_search", request_id, ?policy).entered();
                self.handle_search(request_id, &criteria, policy)
            }

            WorkerMessage::ExportCsv { trips, export_dir, .. } => {
                let _span = tracing::debug_span!("worker_export", rows = trips.len()).entered();
                Self::handle_export(&trips, &export_dir)
            }
        }
    }
}

/// Tracks whether worker tracing has been initialized.
static WORKER_TRACING_INITIALIZED: std::sync::atomic::AtomicBool =
    std::sync::atomic::AtomicBool::new(false);

fn init_worker_tracing() {
    crate::observability::init_tracing(&crate::Config::default());
}

impl ZellijWorker<'_> for TgvMaxWorker {
    /// Deserializes the payload, handles it, and posts the JSON response back
    /// to the plugin under the same message name.
    fn on_message(&mut self, message: String, payload: String) {
        if !WORKER_TRACING_INITIALIZED.swap(true, std::sync::atomic::Ordering::Relaxed) {
            init_worker_tracing();
        }

        let worker_message: WorkerMessage = match serde_json::from_str(&payload) {
            Ok(msg) => msg,
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker message");
                return;
            }
        };

        let response = self.handle_message(worker_message);

        match serde_json::to_string(&response) {
            Ok(payload) => post_message_to_plugin(PluginMessage {
                name: message,
                payload,
                worker_name: None,
            }),
            Err(e) => tracing::debug!(error = %e, "failed to serialize worker response"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip(id: &str, date: &str, time: &str) -> Trip {
        Trip {
            id: id.to_string(),
            date: date.to_string(),
            time: time.to_string(),
            departure_zone: "Paris".to_string(),
            departure_station: "Paris Gare de Lyon".to_string(),
            arrival_zone: "Lyon".to_string(),
            arrival_station: "Lyon Part-Dieu".to_string(),
            train_ref: format!("TGV {id}"),
        }
    }

    #[test]
    fn test_search_echoes_request_id_and_sorts() {
        let trips = vec![trip("b", "2025-06-02", "08:00"), trip("a", "2025-06-01", "09:00")];
        let mut worker = TgvMaxWorker::with_source(Box::new(trips));

        let response = worker.handle_message(WorkerMessage::search(
            42,
            SearchCriteria::default(),
            FilterPolicy::Ignore,
        ));

        match response {
            WorkerResponse::SearchCompleted { request_id, results } => {
                assert_eq!(request_id, 42);
                let ids: Vec<_> = results.trips().iter().map(|t| t.id.as_str()).collect();
                assert_eq!(ids, vec!["a", "b"]);
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn test_search_without_fixture_uses_embedded_trips() {
        let mut worker = TgvMaxWorker::default();
        let response = worker.handle_message(WorkerMessage::search(
            1,
            SearchCriteria::default(),
            FilterPolicy::Ignore,
        ));

        match response {
            WorkerResponse::SearchCompleted { results, .. } => {
                assert_eq!(results.len(), crate::domain::MAX_RESULTS);
                assert_eq!(results.count_label(), "50+");
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn test_load_fixture_reports_missing_file() {
        let mut worker = TgvMaxWorker::default();
        let response =
            worker.handle_message(WorkerMessage::load_fixture(Some("/nonexistent/trips.json".to_string())));
        assert!(matches!(response, WorkerResponse::Error { .. }));
    }

    #[test]
    fn test_export_writes_file_into_directory() {
        let dir = tempfile::tempdir().unwrap();
        let export_dir = dir.path().display().to_string();

        let response = TgvMaxWorker::handle_export(&[trip("a", "2025-06-01", "09:00")], &export_dir);

        match response {
            WorkerResponse::Exported { path, rows } => {
                assert_eq!(rows, 1);
                let contents = std::fs::read_to_string(path).unwrap();
                assert_eq!(contents.lines().count(), 2);
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }
}
