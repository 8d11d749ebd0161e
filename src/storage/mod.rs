//! Storage layer for the static trip list.
//!
//! Trips come from a read-only JSON fixture injected into the worker through the
//! [`TripSource`] trait. Nothing here is ever written back.
//!
//! # Modules
//!
//! - `backend`: [`TripSource`] trait abstraction
//! - `json`: JSON fixture loader (embedded or on-disk)
//! - `ordering`: Departure ordering used by result sets
//! - `models`: Fixture record types separate from domain models

pub mod backend;
pub mod json;
pub mod models;
pub mod ordering;

pub use backend::TripSource;
pub use json::JsonFixture;
pub use models::TripRecord;
pub use ordering::sort_by_departure;
