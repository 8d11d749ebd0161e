//! OpenTelemetry tracing with file-based span export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON Lines
//! ```
//!
//! Spans land in `~/.local/share/zellij/tgvmax/tgvmax-otlp.json` (10 MB per
//! file, three backups). The level comes from the `trace_level` configuration
//! key and defaults to `info`. The worker thread installs the same pipeline and
//! joins plugin traces through the context carried in each message.
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - `tracer`: Tracer provider and file span exporter
//! - `span_formatter`: OTLP JSON encoding
//! - `file_writer`: Size-rotated trace file

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, SERVICE_NAME, TRACE_FILE_NAME};
