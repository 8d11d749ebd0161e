//! Infrastructure layer for filesystem interactions.
//!
//! Utilities for the Zellij plugin sandbox, where the host filesystem is mounted
//! under `/host`: data directory for traces and export directory resolution.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, resolve_export_dir, strip_host_prefix};
