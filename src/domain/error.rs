//! Error types for the TGV Max plugin.
//!
//! This module defines the centralized error type [`TgvMaxError`] and a type alias
//! [`Result`] used throughout the crate. Variants are implemented with `thiserror`.

use thiserror::Error;

/// The main error type for TGV Max plugin operations.
///
/// The search itself cannot fail once trips are loaded; errors come from the
/// edges of the plugin: reading the trip fixture, writing the CSV export, loading
/// a theme, or talking to the background worker.
///
/// # Examples
///
/// ```
/// use tgvmax::TgvMaxError;
///
/// fn load() -> Result<(), TgvMaxError> {
///     Err(TgvMaxError::Fixture("duplicate trip id: trip-001".to_string()))
/// }
///
/// assert!(load().unwrap_err().to_string().contains("trip-001"));
/// ```
#[derive(Debug, Error)]
pub enum TgvMaxError {
    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The trip fixture could not be parsed or breaks an invariant
    /// (for instance two trips sharing an identifier).
    #[error("Fixture error: {0}")]
    Fixture(String),

    /// CSV serialization failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The export file could not be produced.
    #[error("Export error: {0}")]
    Export(String),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),
}

/// A specialized `Result` type for TGV Max operations.
pub type Result<T> = std::result::Result<T, TgvMaxError>;
