//! Trip domain model.
//!
//! A [`Trip`] is one TGV Max journey as it appears in the fixture. All fields
//! are kept as the strings stored in the fixture: ordering relies on lexical
//! comparison of the ISO date and `HH:MM` time.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A single journey record.
///
/// Trips are immutable once loaded. The `date` is an ISO calendar date
/// (`2025-06-01`) and `time` a 24-hour departure time (`08:00`), so comparing
/// the raw strings orders trips chronologically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    pub id: String,
    pub date: String,
    pub time: String,
    pub departure_zone: String,
    pub departure_station: String,
    pub arrival_zone: String,
    pub arrival_station: String,
    pub train_ref: String,
}

impl Trip {
    /// Compares two trips by departure date, then departure time.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use tgvmax::Trip;
    ///
    /// let mut early = Trip::default();
    /// early.date = "2024-05-30".into();
    /// early.time = "09:00".into();
    ///
    /// let mut late = early.clone();
    /// late.date = "2024-06-01".into();
    /// late.time = "08:00".into();
    ///
    /// assert_eq!(early.cmp_departure(&late), Ordering::Less);
    /// ```
    #[must_use]
    pub fn cmp_departure(&self, other: &Self) -> Ordering {
        self.date
            .cmp(&other.date)
            .then_with(|| self.time.cmp(&other.time))
    }

    /// Field values in export/table column order.
    #[must_use]
    pub fn columns(&self) -> [&str; 7] {
        [
            &self.date,
            &self.time,
            &self.departure_zone,
            &self.departure_station,
            &self.arrival_zone,
            &self.arrival_station,
            &self.train_ref,
        ]
    }
}
