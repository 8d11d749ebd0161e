//! Departure ordering for trip lists.
//!
//! Trips are ordered by travel date, then departure time, comparing the stored
//! strings lexically. The sort is stable, so trips leaving at the same minute
//! keep their fixture order.

use crate::domain::Trip;

/// Sorts trips in place by `(date, time)` ascending.
///
/// # Examples
///
/// ```
/// use tgvmax::storage::sort_by_departure;
/// use tgvmax::Trip;
///
/// let mut trips = vec![
///     Trip { date: "2024-06-01".into(), time: "08:00".into(), ..Trip::default() },
///     Trip { date: "2024-05-30".into(), time: "09:00".into(), ..Trip::default() },
/// ];
/// sort_by_departure(&mut trips);
/// assert_eq!(trips[0].date, "2024-05-30");
/// ```
pub fn sort_by_departure(trips: &mut [Trip]) {
    trips.sort_by(Trip::cmp_departure);
}
