//! Search criteria value objects.
//!
//! [`SearchCriteria`] is the snapshot the criteria form hands to the result-set
//! holder when the user submits a search. Every field is optional and no
//! combination is rejected.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive calendar-date range with optional bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Whether an ISO `YYYY-MM-DD` date string falls inside the range.
    ///
    /// Bounds are compared against their ISO rendering, matching the lexical
    /// ordering used for trips. Missing bounds are open.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use tgvmax::domain::DateRange;
    ///
    /// let range = DateRange {
    ///     from: NaiveDate::from_ymd_opt(2025, 6, 2),
    ///     to: None,
    /// };
    /// assert!(!range.contains("2025-06-01"));
    /// assert!(range.contains("2025-06-02"));
    /// ```
    #[must_use]
    pub fn contains(&self, iso_date: &str) -> bool {
        let after_start = self
            .from
            .map_or(true, |from| iso_date >= from.format("%Y-%m-%d").to_string().as_str());
        let before_end = self
            .to
            .map_or(true, |to| iso_date <= to.format("%Y-%m-%d").to_string().as_str());
        after_start && before_end
    }
}

/// Filters collected by the search form.
///
/// Zones and stations are referenced by their [`Network`](super::Network)
/// identifiers. `departure_stations` keeps selection order and never holds
/// duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub departure_dates: DateRange,
    pub return_dates: DateRange,
    pub departure_zone: Option<String>,
    pub departure_stations: Vec<String>,
    pub arrival_zone: Option<String>,
    pub arrival_station: Option<String>,
}

impl SearchCriteria {
    /// True when no field has been filled in.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.departure_dates.is_empty()
            && self.return_dates.is_empty()
            && self.departure_zone.is_none()
            && self.departure_stations.is_empty()
            && self.arrival_zone.is_none()
            && self.arrival_station.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_open_range_contains_everything() {
        assert!(DateRange::default().contains("1999-01-01"));
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let range = DateRange {
            from: date(2025, 6, 2),
            to: date(2025, 6, 4),
        };
        assert!(range.contains("2025-06-02"));
        assert!(range.contains("2025-06-04"));
        assert!(!range.contains("2025-06-05"));
        assert!(!range.contains("2025-06-01"));
    }

    #[test]
    fn test_default_criteria_is_empty() {
        assert!(SearchCriteria::default().is_empty());

        let criteria = SearchCriteria {
            arrival_zone: Some("lyon".into()),
            ..Default::default()
        };
        assert!(!criteria.is_empty());
    }

    #[test]
    fn test_criteria_json_roundtrip_keeps_dates() {
        let criteria = SearchCriteria {
            departure_dates: DateRange {
                from: date(2025, 6, 1),
                to: None,
            },
            departure_stations: vec!["paris-nord".into()],
            ..Default::default()
        };
        let json = serde_json::to_string(&criteria).unwrap();
        assert!(json.contains("2025-06-01"));
        let back: SearchCriteria = serde_json::from_str(&json).unwrap();
        assert_eq!(back, criteria);
    }
}
