//! CSV export of search results.
//!
//! Serialization lives in `writer`; the worker calls [`write_export`] with the
//! presenter's full result set and reports the written path back to the plugin.

pub mod writer;

pub use writer::{export_file_name, to_csv, write_export, CSV_HEADERS, CSV_MIME_TYPE};
