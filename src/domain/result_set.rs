//! Result set produced by a single search.
//!
//! [`ResultSet::build`] is the filter/sort/limit pass run by the worker for every
//! accepted search: copy the trips, keep the ones the [`FilterPolicy`] admits,
//! order them by departure, remember how many matched, and keep the first
//! [`MAX_RESULTS`].

use super::{Network, SearchCriteria, Trip};
use crate::storage::sort_by_departure;
use serde::{Deserialize, Serialize};

/// Maximum number of trips held by a result set.
pub const MAX_RESULTS: usize = 50;

/// How submitted criteria are applied to the trip list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterPolicy {
    /// Criteria are accepted but not applied: every trip is returned, sorted
    /// and capped.
    #[default]
    Ignore,

    /// Criteria narrow the trip list (departure dates, zones and stations).
    /// The return date range is collected but not applied to one-way trips.
    Apply,
}

impl FilterPolicy {
    /// Parses a policy name from plugin configuration (`ignore` or `apply`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "ignore" => Some(Self::Ignore),
            "apply" => Some(Self::Apply),
            _ => None,
        }
    }
}

/// Ordered, capped list of trips answering one search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSet {
    trips: Vec<Trip>,
    total_matches: usize,
}

impl ResultSet {
    /// Runs the filter/sort/limit pass over `source`.
    ///
    /// The source slice is never modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use tgvmax::domain::{FilterPolicy, Network, ResultSet, SearchCriteria};
    /// use tgvmax::Trip;
    ///
    /// let trip = |date: &str, time: &str| Trip {
    ///     date: date.into(),
    ///     time: time.into(),
    ///     ..Trip::default()
    /// };
    /// let source = vec![
    ///     trip("2024-06-01", "08:00"),
    ///     trip("2024-06-01", "10:00"),
    ///     trip("2024-05-30", "09:00"),
    /// ];
    ///
    /// let set = ResultSet::build(
    ///     &source,
    ///     &SearchCriteria::default(),
    ///     FilterPolicy::Ignore,
    ///     Network::standard(),
    /// );
    /// let order: Vec<_> = set.trips().iter().map(|t| (t.date.as_str(), t.time.as_str())).collect();
    /// assert_eq!(
    ///     order,
    ///     vec![("2024-05-30", "09:00"), ("2024-06-01", "08:00"), ("2024-06-01", "10:00")]
    /// );
    /// ```
    #[must_use]
    pub fn build(
        source: &[Trip],
        criteria: &SearchCriteria,
        policy: FilterPolicy,
        network: &Network,
    ) -> Self {
        let _span = tracing::debug_span!("build_result_set",
            source_len = source.len(),
            policy = ?policy
        )
        .entered();

        let mut trips: Vec<Trip> = match policy {
            FilterPolicy::Ignore => source.to_vec(),
            FilterPolicy::Apply => source
                .iter()
                .filter(|trip| matches_criteria(trip, criteria, network))
                .cloned()
                .collect(),
        };

        sort_by_departure(&mut trips);

        let total_matches = trips.len();
        trips.truncate(MAX_RESULTS);

        tracing::debug!(
            total_matches = total_matches,
            kept = trips.len(),
            "result set built"
        );

        Self {
            trips,
            total_matches,
        }
    }

    #[must_use]
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Number of trips that matched before truncation to [`MAX_RESULTS`].
    #[must_use]
    pub const fn total_matches(&self) -> usize {
        self.total_matches
    }

    /// Count shown in the results title: `50+` once the matches overflow the
    /// cap, the exact number otherwise.
    #[must_use]
    pub fn count_label(&self) -> String {
        if self.total_matches > MAX_RESULTS {
            format!("{MAX_RESULTS}+")
        } else {
            self.trips.len().to_string()
        }
    }
}

/// Whether a trip satisfies the departure/arrival filters of `criteria`.
fn matches_criteria(trip: &Trip, criteria: &SearchCriteria, network: &Network) -> bool {
    if !criteria.departure_dates.contains(&trip.date) {
        return false;
    }

    let zone_matches = |zone_id: &Option<String>, zone_name: &str| {
        zone_id.as_deref().map_or(true, |id| {
            network.zone(id).is_some_and(|zone| zone.name == zone_name)
        })
    };
    let station_matches = |station_id: &str, station_name: &str| {
        network
            .station(station_id)
            .is_some_and(|(_, station)| station.name == station_name)
    };

    if !zone_matches(&criteria.departure_zone, &trip.departure_zone) {
        return false;
    }
    if !criteria.departure_stations.is_empty()
        && !criteria
            .departure_stations
            .iter()
            .any(|id| station_matches(id, &trip.departure_station))
    {
        return false;
    }
    if !zone_matches(&criteria.arrival_zone, &trip.arrival_zone) {
        return false;
    }
    criteria
        .arrival_station
        .as_deref()
        .map_or(true, |id| station_matches(id, &trip.arrival_station))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DateRange;
    use chrono::NaiveDate;

    fn trip(id: &str, date: &str, time: &str, from: (&str, &str), to: (&str, &str)) -> Trip {
        Trip {
            id: id.into(),
            date: date.into(),
            time: time.into(),
            departure_zone: from.0.into(),
            departure_station: from.1.into(),
            arrival_zone: to.0.into(),
            arrival_station: to.1.into(),
            train_ref: format!("TGV {id}"),
        }
    }

    fn sample() -> Vec<Trip> {
        vec![
            trip("a", "2025-06-02", "08:00", ("Paris", "Paris Nord"), ("Lille", "Lille Europe")),
            trip("b", "2025-06-01", "10:00", ("Lyon", "Lyon Part-Dieu"), ("Paris", "Paris Gare de Lyon")),
            trip("c", "2025-06-01", "07:30", ("Paris", "Paris Gare de Lyon"), ("Lyon", "Lyon Part-Dieu")),
            trip("d", "2025-06-03", "12:00", ("Paris", "Paris Montparnasse"), ("Bordeaux", "Bordeaux Saint-Jean")),
        ]
    }

    fn many(count: usize) -> Vec<Trip> {
        (0..count)
            .map(|i| {
                trip(
                    &format!("t{i}"),
                    &format!("2025-07-{:02}", 1 + i % 28),
                    &format!("{:02}:00", i % 24),
                    ("Paris", "Paris Nord"),
                    ("Lille", "Lille Europe"),
                )
            })
            .collect()
    }

    fn ids(set: &ResultSet) -> Vec<&str> {
        set.trips().iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_ignore_policy_returns_everything_sorted() {
        let criteria = SearchCriteria {
            departure_zone: Some("bordeaux".into()),
            ..Default::default()
        };
        let set = ResultSet::build(&sample(), &criteria, FilterPolicy::Ignore, Network::standard());
        assert_eq!(ids(&set), vec!["c", "b", "a", "d"]);
    }

    #[test]
    fn test_length_is_capped_at_fifty() {
        for size in [0, 7, 50, 51, 120] {
            let set = ResultSet::build(
                &many(size),
                &SearchCriteria::default(),
                FilterPolicy::Ignore,
                Network::standard(),
            );
            assert_eq!(set.len(), size.min(MAX_RESULTS));
            assert_eq!(set.total_matches(), size);
        }
    }

    #[test]
    fn test_adjacent_trips_are_ordered() {
        let set = ResultSet::build(
            &many(90),
            &SearchCriteria::default(),
            FilterPolicy::Ignore,
            Network::standard(),
        );
        for pair in set.trips().windows(2) {
            assert!((&pair[0].date, &pair[0].time) <= (&pair[1].date, &pair[1].time));
        }
    }

    #[test]
    fn test_count_label() {
        let build = |n| {
            ResultSet::build(&many(n), &SearchCriteria::default(), FilterPolicy::Ignore, Network::standard())
        };
        assert_eq!(build(12).count_label(), "12");
        assert_eq!(build(50).count_label(), "50");
        assert_eq!(build(51).count_label(), "50+");
    }

    #[test]
    fn test_apply_policy_filters_by_zone_and_station() {
        let network = Network::standard();
        let criteria = SearchCriteria {
            departure_zone: Some("paris".into()),
            departure_stations: vec!["paris-gare-de-lyon".into(), "paris-nord".into()],
            ..Default::default()
        };
        let set = ResultSet::build(&sample(), &criteria, FilterPolicy::Apply, network);
        assert_eq!(ids(&set), vec!["c", "a"]);

        let criteria = SearchCriteria {
            arrival_zone: Some("lyon".into()),
            arrival_station: Some("lyon-part-dieu".into()),
            ..Default::default()
        };
        let set = ResultSet::build(&sample(), &criteria, FilterPolicy::Apply, network);
        assert_eq!(ids(&set), vec!["c"]);
    }

    #[test]
    fn test_apply_policy_filters_by_departure_dates_only() {
        let criteria = SearchCriteria {
            departure_dates: DateRange {
                from: NaiveDate::from_ymd_opt(2025, 6, 2),
                to: None,
            },
            return_dates: DateRange {
                from: NaiveDate::from_ymd_opt(2030, 1, 1),
                to: None,
            },
            ..Default::default()
        };
        let set = ResultSet::build(&sample(), &criteria, FilterPolicy::Apply, Network::standard());
        assert_eq!(ids(&set), vec!["a", "d"]);
    }

    #[test]
    fn test_apply_policy_unknown_zone_matches_nothing() {
        let criteria = SearchCriteria {
            departure_zone: Some("nantes".into()),
            ..Default::default()
        };
        let set = ResultSet::build(&sample(), &criteria, FilterPolicy::Apply, Network::standard());
        assert!(set.is_empty());
    }

    #[test]
    fn test_policy_names() {
        assert_eq!(FilterPolicy::from_name("Apply"), Some(FilterPolicy::Apply));
        assert_eq!(FilterPolicy::from_name(" ignore "), Some(FilterPolicy::Ignore));
        assert_eq!(FilterPolicy::from_name("strict"), None);
    }
}
