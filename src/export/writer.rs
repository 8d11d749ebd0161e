//! CSV serialization of a result set.
//!
//! The export always covers the whole result set, never just the visible page.
//! Fields are written with the `csv` crate's default quoting: a field is quoted
//! only when it contains a delimiter, a quote or a line break, so ordinary station
//! names come out exactly as a plain comma join would produce them.

use crate::domain::error::{Result, TgvMaxError};
use crate::domain::Trip;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Column titles, in export order.
pub const CSV_HEADERS: [&str; 7] = [
    "Date",
    "Heure Départ",
    "Zone Départ",
    "Gare Départ",
    "Zone Arrivée",
    "Gare Arrivée",
    "Réf. Train",
];

/// MIME type advertised for exported files.
pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8";

/// Serializes trips to CSV text: header row first, one `\n`-terminated row
/// per trip.
///
/// # Errors
///
/// Returns an error if the CSV writer fails, which only happens on I/O errors of
/// the in-memory buffer.
///
/// # Examples
///
/// ```
/// use tgvmax::export::to_csv;
/// use tgvmax::Trip;
///
/// let csv = to_csv(&[Trip { date: "2025-06-01".into(), ..Trip::default() }])?;
/// assert_eq!(csv.lines().count(), 2);
/// assert!(csv.starts_with("Date,Heure Départ,"));
/// # Ok::<(), tgvmax::TgvMaxError>(())
/// ```
pub fn to_csv(trips: &[Trip]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADERS)?;
    for trip in trips {
        writer.write_record(trip.columns())?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| TgvMaxError::Export(format!("failed to flush CSV buffer: {e}")))?;

    String::from_utf8(bytes).map_err(|e| TgvMaxError::Export(format!("CSV is not UTF-8: {e}")))
}

/// File name for an export made on `date`: `tgvmax-results-YYYY-MM-DD.csv`.
#[must_use]
pub fn export_file_name(date: NaiveDate) -> String {
    format!("tgvmax-results-{}.csv", date.format("%Y-%m-%d"))
}

/// Writes the CSV export for `trips` into `dir` and returns the file path.
///
/// An existing file with the same name (same day) is overwritten.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn write_export(dir: &Path, trips: &[Trip], date: NaiveDate) -> Result<PathBuf> {
    let _span = tracing::debug_span!("write_export", dir = ?dir, rows = trips.len()).entered();

    let contents = to_csv(trips)?;
    let path = dir.join(export_file_name(date));

    std::fs::create_dir_all(dir)?;
    std::fs::write(&path, contents)?;

    tracing::debug!(path = ?path, mime = CSV_MIME_TYPE, "export written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip(station: &str) -> Trip {
        Trip {
            id: "t".into(),
            date: "2025-06-01".into(),
            time: "08:00".into(),
            departure_zone: "Paris".into(),
            departure_station: station.into(),
            arrival_zone: "Lyon".into(),
            arrival_station: "Lyon Part-Dieu".into(),
            train_ref: "TGV 6111".into(),
        }
    }

    #[test]
    fn test_header_row_is_fixed() {
        let csv = to_csv(&[]).unwrap();
        assert_eq!(
            csv,
            "Date,Heure Départ,Zone Départ,Gare Départ,Zone Arrivée,Gare Arrivée,Réf. Train\n"
        );
    }

    #[test]
    fn test_rows_follow_column_order() {
        let csv = to_csv(&[trip("Paris Gare de Lyon")]).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(row, "2025-06-01,08:00,Paris,Paris Gare de Lyon,Lyon,Lyon Part-Dieu,TGV 6111");
    }

    #[test]
    fn test_line_count_is_rows_plus_header() {
        let trips: Vec<Trip> = (0..23).map(|_| trip("Paris Nord")).collect();
        assert_eq!(to_csv(&trips).unwrap().lines().count(), 24);
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let csv = to_csv(&[trip("Paris, Bercy")]).unwrap();
        assert!(csv.contains(",\"Paris, Bercy\","));
    }

    #[test]
    fn test_export_file_name() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 9).unwrap();
        assert_eq!(export_file_name(date), "tgvmax-results-2025-06-09.csv");
    }

    #[test]
    fn test_write_export_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 6, 9).unwrap();

        let path = write_export(dir.path(), &[trip("Paris Est")], date).unwrap();

        assert_eq!(path, dir.path().join("tgvmax-results-2025-06-09.csv"));
        let written = std::fs::read_to_string(path).unwrap();
        assert_eq!(written.lines().count(), 2);
    }
}
