//! Worker thread message types for cross-thread communication.
//!
//! Request and response protocol between the plugin thread and the background
//! worker that owns the trip fixture. Messages travel as JSON and carry an
//! optional trace context so worker spans join the plugin trace.

use crate::domain::{FilterPolicy, ResultSet, SearchCriteria, Trip};
use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-thread span propagation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across threads.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the trace and span IDs of the current tracing span.
    ///
    /// Returns `None` when no valid OpenTelemetry span is active (for instance
    /// when tracing was never initialized).
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }
}

/// Generates constructors that attach the current trace context to each
/// `WorkerMessage` variant.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " message with current trace context")]
                #[must_use]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    load_fixture(LoadFixture { fixture_file: Option<String> }),
    search(Search { request_id: u64, criteria: SearchCriteria, policy: FilterPolicy }),
    export_csv(ExportCsv { trips: Vec<Trip>, export_dir: String }),
}

/// Messages sent from the plugin thread to the worker thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// (Re)load the trip fixture, from `fixture_file` or the embedded copy.
    LoadFixture {
        fixture_file: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Build the result set for one submitted search.
    Search {
        /// Sequence number of the search; echoed in the response.
        request_id: u64,
        criteria: SearchCriteria,
        policy: FilterPolicy,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Write the given trips as a CSV file into `export_dir`.
    ExportCsv {
        trips: Vec<Trip>,
        export_dir: String,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

/// Responses sent from the worker thread back to the plugin thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The fixture is loaded and ready to be searched.
    FixtureLoaded {
        trip_count: usize,
        /// Human-readable origin of the trips.
        origin: String,
    },

    /// The result set for `request_id` is ready.
    SearchCompleted { request_id: u64, results: ResultSet },

    /// The search for `request_id` could not run (fixture unavailable).
    SearchFailed { request_id: u64, message: String },

    /// The CSV export was written.
    Exported {
        /// Sandbox path of the written file.
        path: String,
        /// Number of trip rows (header excluded).
        rows: usize,
    },

    /// Any other worker failure.
    Error { message: String },
}
