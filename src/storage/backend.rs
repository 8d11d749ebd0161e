//! Trip source abstraction.
//!
//! The [`TripSource`] trait is the fixture boundary: the worker asks it for the
//! read-only trip list and never learns where the trips came from. Tests inject
//! small in-memory sources through the same trait.

use crate::domain::Trip;

/// Read-only provider of the static trip list.
///
/// # Implementations
///
/// - [`JsonFixture`](crate::storage::JsonFixture): embedded or on-disk JSON fixture
/// - `Vec<Trip>`: in-memory list, handy for tests and alternate fixtures
///
/// # Examples
///
/// ```
/// use tgvmax::storage::TripSource;
/// use tgvmax::Trip;
///
/// let source: Box<dyn TripSource> = Box::new(vec![Trip::default()]);
/// assert_eq!(source.trips().len(), 1);
/// ```
pub trait TripSource: Send {
    /// All trips, in fixture order.
    fn trips(&self) -> &[Trip];

    /// Short label used in logs.
    fn describe(&self) -> String {
        format!("{} trips", self.trips().len())
    }
}

impl TripSource for Vec<Trip> {
    fn trips(&self) -> &[Trip] {
        self
    }
}
