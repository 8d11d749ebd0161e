//! Fixture record models.
//!
//! The trip fixture is a JSON array of camelCase records. [`TripRecord`]
//! mirrors that shape and is kept separate from the domain [`Trip`] so the
//! file format can evolve on its own.

use crate::domain::Trip;
use serde::{Deserialize, Serialize};

/// One trip as stored in the fixture file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRecord {
    pub id: String,
    pub date: String,
    pub time: String,
    pub departure_zone: String,
    pub departure_station: String,
    pub arrival_zone: String,
    pub arrival_station: String,
    pub train_ref: String,
}

impl From<TripRecord> for Trip {
    fn from(record: TripRecord) -> Self {
        Self {
            id: record.id,
            date: record.date,
            time: record.time,
            departure_zone: record.departure_zone,
            departure_station: record.departure_station,
            arrival_zone: record.arrival_zone,
            arrival_station: record.arrival_station,
            train_ref: record.train_ref,
        }
    }
}
