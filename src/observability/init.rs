//! Tracing subscriber setup.

use super::tracer;
use crate::infrastructure::paths::get_data_dir;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service and instrumentation scope name recorded on every span.
pub const SERVICE_NAME: &str = "TgvMax";

/// File name of the OTLP trace log inside the data directory.
pub const TRACE_FILE_NAME: &str = "tgvmax-otlp.json";

/// Level used when `trace_level` is unset or not a valid filter.
const DEFAULT_LEVEL: &str = "info";

/// Filter directive for `trace_level`, or `info` when it is unset or invalid.
fn filter_directive(trace_level: Option<&str>) -> &str {
    trace_level
        .map(str::trim)
        .filter(|level| !level.is_empty() && EnvFilter::try_new(level).is_ok())
        .unwrap_or(DEFAULT_LEVEL)
}

/// Installs the global subscriber: `EnvFilter` plus an OpenTelemetry layer
/// exporting to `~/.local/share/zellij/tgvmax/tgvmax-otlp.json`.
///
/// Tracing is best effort: when the data directory cannot be created, or a
/// subscriber is already installed, nothing happens. Returns whether this call
/// installed the subscriber.
pub fn init_tracing(config: &Config) -> bool {
    let data_dir = get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return false;
    }

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SERVICE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);

    let provider = tracer::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource, SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    tracing_subscriber::registry()
        .with(EnvFilter::new(filter_directive(config.trace_level.as_deref())))
        .with(otel_layer)
        .try_init()
        .is_ok()
}
