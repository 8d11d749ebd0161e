//! JSON trip fixture.
//!
//! The plugin ships with an embedded fixture (`fixtures/trips.json`). A different
//! file can be supplied through the `fixture_file` configuration key; it must use
//! the same camelCase record layout. Trips are validated once at load time and
//! kept in memory for the lifetime of the worker.

use crate::domain::error::{Result, TgvMaxError};
use crate::domain::Trip;
use crate::storage::backend::TripSource;
use crate::storage::models::TripRecord;
use std::collections::HashSet;
use std::path::Path;

/// Fixture bundled into the plugin binary.
const EMBEDDED_FIXTURE: &str = include_str!("../../fixtures/trips.json");

/// In-memory trip list parsed from a JSON fixture.
#[derive(Debug, Clone)]
pub struct JsonFixture {
    /// Where the trips came from, for logs.
    origin: String,

    trips: Vec<Trip>,
}

impl JsonFixture {
    /// Loads the fixture compiled into the plugin.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded JSON is malformed or contains duplicate
    /// trip identifiers.
    pub fn embedded() -> Result<Self> {
        Self::from_json("embedded", EMBEDDED_FIXTURE)
    }

    /// Loads a fixture from a file on disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not a JSON array of trip
    /// records, or contains duplicate trip identifiers.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tgvmax::storage::{JsonFixture, TripSource};
    ///
    /// let fixture = JsonFixture::from_file("/host/trips.json")?;
    /// println!("{}", fixture.describe());
    /// # Ok::<(), tgvmax::TgvMaxError>(())
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "loading trip fixture from file");

        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&path.display().to_string(), &contents)
    }

    /// Parses and validates fixture JSON.
    ///
    /// # Errors
    ///
    /// Returns [`TgvMaxError::Fixture`] on malformed JSON or a duplicate id.
    pub fn from_json(origin: &str, json: &str) -> Result<Self> {
        let _span = tracing::debug_span!("parse_fixture", origin = %origin).entered();

        let records: Vec<TripRecord> = serde_json::from_str(json)
            .map_err(|e| TgvMaxError::Fixture(format!("failed to parse {origin}: {e}")))?;

        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(TgvMaxError::Fixture(format!(
                    "duplicate trip id in {origin}: {}",
                    record.id
                )));
            }
        }

        let trips: Vec<Trip> = records.into_iter().map(Trip::from).collect();

        tracing::debug!(trip_count = trips.len(), "fixture parsed");

        Ok(Self {
            origin: origin.to_string(),
            trips,
        })
    }
}

impl TripSource for JsonFixture {
    fn trips(&self) -> &[Trip] {
        &self.trips
    }

    fn describe(&self) -> String {
        format!("{} trips from {}", self.trips.len(), self.origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TWO_TRIPS: &str = r#"[
        {"id": "a", "date": "2025-06-02", "time": "08:00", "departureZone": "Paris",
         "departureStation": "Paris Nord", "arrivalZone": "Lille",
         "arrivalStation": "Lille Europe", "trainRef": "TGV 7001"},
        {"id": "b", "date": "2025-06-01", "time": "09:00", "departureZone": "Lyon",
         "departureStation": "Lyon Perrache", "arrivalZone": "Marseille",
         "arrivalStation": "Marseille Saint-Charles", "trainRef": "TGV 7002"}
    ]"#;

    #[test]
    fn test_embedded_fixture_loads() {
        let fixture = JsonFixture::embedded().unwrap();
        assert!(!fixture.trips().is_empty());
        assert!(fixture.describe().ends_with("from embedded"));
    }

    #[test]
    fn test_fixture_keeps_file_order() {
        let fixture = JsonFixture::from_json("test", TWO_TRIPS).unwrap();
        let ids: Vec<&str> = fixture.trips().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_empty_array_is_a_valid_fixture() {
        let fixture = JsonFixture::from_json("empty", "[]").unwrap();
        assert!(fixture.trips().is_empty());
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let json = TWO_TRIPS.replace("\"id\": \"b\"", "\"id\": \"a\"");
        let err = JsonFixture::from_json("dup", &json).unwrap_err();
        assert!(matches!(err, TgvMaxError::Fixture(ref msg) if msg.contains("duplicate")));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let err = JsonFixture::from_json("bad", "{not json").unwrap_err();
        assert!(matches!(err, TgvMaxError::Fixture(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TWO_TRIPS.as_bytes()).unwrap();

        let fixture = JsonFixture::from_file(file.path()).unwrap();
        assert_eq!(fixture.trips().len(), 2);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonFixture::from_file(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, TgvMaxError::Io(_)));
    }
}
