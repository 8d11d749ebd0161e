//! Search criteria form.
//!
//! [`SearchForm`] owns the values being edited and the keyboard focus inside the
//! form. Zone and station choices are validated against the [`Network`] so the
//! criteria it hands out always reference known identifiers, and stations always
//! belong to the zone selected next to them.

use crate::domain::{DateRange, Network, SearchCriteria, Station};
use chrono::{Days, NaiveDate};

/// One bound of one of the two date ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    DepartureFrom,
    DepartureTo,
    ReturnFrom,
    ReturnTo,
}

impl DateField {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::DepartureFrom => "Départ du",
            Self::DepartureTo => "Départ au",
            Self::ReturnFrom => "Retour du",
            Self::ReturnTo => "Retour au",
        }
    }
}

/// Focusable rows of the form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Date(DateField),
    DepartureZone,
    DepartureStations,
    ArrivalZone,
    ArrivalStation,
}

impl FormField {
    pub const ALL: [Self; 8] = [
        Self::Date(DateField::DepartureFrom),
        Self::Date(DateField::DepartureTo),
        Self::Date(DateField::ReturnFrom),
        Self::Date(DateField::ReturnTo),
        Self::DepartureZone,
        Self::DepartureStations,
        Self::ArrivalZone,
        Self::ArrivalStation,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Date(field) => field.label(),
            Self::DepartureZone => "Zone de départ",
            Self::DepartureStations => "Gares de départ",
            Self::ArrivalZone => "Zone d'arrivée",
            Self::ArrivalStation => "Gare d'arrivée",
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }
}

/// Label of the "no zone" option at the top of both zone lists.
pub const NO_ZONE_LABEL: &str = "Aucune";

/// Label of the "any station" option at the top of the arrival station list.
pub const ANY_STATION_LABEL: &str = "Toutes les gares";

/// Moves `current` by `delta` within `0..len`, wrapping at both ends.
fn wrap_index(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    (current as isize + delta).rem_euclid(len) as usize
}

/// Editable search criteria plus focus state.
#[derive(Debug, Clone)]
pub struct SearchForm {
    network: &'static Network,
    criteria: SearchCriteria,
    focus: FormField,
    /// Cursor inside the departure-station checklist.
    station_cursor: usize,
}

impl SearchForm {
    #[must_use]
    pub fn new(network: &'static Network) -> Self {
        Self {
            network,
            criteria: SearchCriteria::default(),
            focus: FormField::ALL[0],
            station_cursor: 0,
        }
    }

    #[must_use]
    pub const fn network(&self) -> &'static Network {
        self.network
    }

    #[must_use]
    pub const fn focus(&self) -> FormField {
        self.focus
    }

    #[must_use]
    pub const fn station_cursor(&self) -> usize {
        self.station_cursor
    }

    /// Current values, as they would be submitted.
    #[must_use]
    pub const fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    /// Produces the criteria to submit. Any combination is accepted.
    #[must_use]
    pub fn snapshot(&self) -> SearchCriteria {
        self.criteria.clone()
    }

    #[must_use]
    pub const fn date(&self, field: DateField) -> Option<NaiveDate> {
        match field {
            DateField::DepartureFrom => self.criteria.departure_dates.from,
            DateField::DepartureTo => self.criteria.departure_dates.to,
            DateField::ReturnFrom => self.criteria.return_dates.from,
            DateField::ReturnTo => self.criteria.return_dates.to,
        }
    }

    pub fn set_date(&mut self, field: DateField, value: Option<NaiveDate>) {
        let (range, is_start): (&mut DateRange, bool) = match field {
            DateField::DepartureFrom => (&mut self.criteria.departure_dates, true),
            DateField::DepartureTo => (&mut self.criteria.departure_dates, false),
            DateField::ReturnFrom => (&mut self.criteria.return_dates, true),
            DateField::ReturnTo => (&mut self.criteria.return_dates, false),
        };

        if is_start {
            range.from = value;
        } else {
            range.to = value;
        }
    }

    /// Stations offered by the departure checklist.
    #[must_use]
    pub fn departure_station_options(&self) -> &'static [Station] {
        self.criteria
            .departure_zone
            .as_deref()
            .map(|zone| self.network.stations_in(zone))
            .unwrap_or(&[])
    }

    /// Stations offered by the arrival list, excluding the "any" entry.
    #[must_use]
    pub fn arrival_station_options(&self) -> &'static [Station] {
        self.criteria
            .arrival_zone
            .as_deref()
            .map(|zone| self.network.stations_in(zone))
            .unwrap_or(&[])
    }

    /// Arrival station selection is only possible once a zone is chosen.
    #[must_use]
    pub const fn arrival_station_enabled(&self) -> bool {
        self.criteria.arrival_zone.is_some()
    }

    /// Sets the departure zone, clearing the selected departure stations.
    ///
    /// Unknown zone identifiers select no zone.
    pub fn select_departure_zone(&mut self, zone_id: Option<&str>) {
        let zone = zone_id.and_then(|id| self.network.zone(id));
        self.criteria.departure_zone = zone.map(|z| z.id.to_string());
        self.criteria.departure_stations.clear();
        self.station_cursor = 0;
    }

    /// Adds or removes a departure station.
    ///
    /// Stations outside the current departure zone are ignored. Returns whether
    /// the selection changed.
    pub fn toggle_departure_station(&mut self, station_id: &str) -> bool {
        let Some(zone) = self.criteria.departure_zone.as_deref() else {
            return false;
        };
        if !self.network.zone_contains(zone, station_id) {
            tracing::debug!(zone, station_id, "ignoring station outside departure zone");
            return false;
        }

        let stations = &mut self.criteria.departure_stations;
        if let Some(index) = stations.iter().position(|s| s == station_id) {
            stations.remove(index);
        } else {
            stations.push(station_id.to_string());
        }
        true
    }

    /// Sets the arrival zone, clearing the arrival station.
    pub fn select_arrival_zone(&mut self, zone_id: Option<&str>) {
        let zone = zone_id.and_then(|id| self.network.zone(id));
        self.criteria.arrival_zone = zone.map(|z| z.id.to_string());
        self.criteria.arrival_station = None;
    }

    /// Sets the arrival station; only stations of the arrival zone are accepted.
    ///
    /// Returns whether the value was accepted.
    pub fn select_arrival_station(&mut self, station_id: Option<&str>) -> bool {
        let Some(zone) = self.criteria.arrival_zone.as_deref() else {
            return false;
        };

        match station_id {
            None => {
                self.criteria.arrival_station = None;
                true
            }
            Some(id) if self.network.zone_contains(zone, id) => {
                self.criteria.arrival_station = Some(id.to_string());
                true
            }
            Some(_) => false,
        }
    }

    /// Swaps departure and arrival.
    ///
    /// Zones swap; the first selected departure station becomes the arrival
    /// station and the previous arrival station becomes the only departure
    /// station. Date ranges are left alone.
    pub fn invert(&mut self) {
        let criteria = &mut self.criteria;
        let first_departure = criteria.departure_stations.first().cloned();
        let previous_arrival = criteria.arrival_station.take();

        std::mem::swap(&mut criteria.departure_zone, &mut criteria.arrival_zone);
        criteria.departure_stations = previous_arrival.into_iter().collect();
        criteria.arrival_station = first_departure;
        self.station_cursor = 0;

        tracing::debug!(
            departure_zone = ?criteria.departure_zone,
            arrival_zone = ?criteria.arrival_zone,
            "departure and arrival inverted"
        );
    }

    pub fn focus_next(&mut self) {
        let next = wrap_index(self.focus.position(), 1, FormField::ALL.len());
        self.focus = FormField::ALL[next];
    }

    pub fn focus_previous(&mut self) {
        let previous = wrap_index(self.focus.position(), -1, FormField::ALL.len());
        self.focus = FormField::ALL[previous];
    }

    /// Moves the focused field to its next (`delta > 0`) or previous option.
    ///
    /// Zone and arrival-station lists wrap around and start with their "none"
    /// entry. In the departure checklist the cursor moves instead. On a date
    /// field the date shifts by `delta` days when set.
    pub fn cycle_option(&mut self, delta: isize) {
        match self.focus {
            FormField::Date(field) => {
                let shifted = self.date(field).and_then(|date| {
                    let days = Days::new(delta.unsigned_abs() as u64);
                    if delta < 0 {
                        date.checked_sub_days(days)
                    } else {
                        date.checked_add_days(days)
                    }
                });
                if shifted.is_some() {
                    self.set_date(field, shifted);
                }
            }
            FormField::DepartureZone => {
                let next = self.cycled_zone(self.criteria.departure_zone.as_deref(), delta);
                self.select_departure_zone(next);
            }
            FormField::ArrivalZone => {
                let next = self.cycled_zone(self.criteria.arrival_zone.as_deref(), delta);
                self.select_arrival_zone(next);
            }
            FormField::DepartureStations => {
                let len = self.departure_station_options().len();
                self.station_cursor = wrap_index(self.station_cursor, delta, len);
            }
            FormField::ArrivalStation => {
                let options = self.arrival_station_options();
                if options.is_empty() {
                    return;
                }
                let current = self
                    .criteria
                    .arrival_station
                    .as_deref()
                    .and_then(|id| options.iter().position(|s| s.id == id))
                    .map_or(0, |i| i + 1);
                let next = wrap_index(current, delta, options.len() + 1);
                let station = next.checked_sub(1).map(|i| options[i].id);
                self.select_arrival_station(station);
            }
        }
    }

    /// Zone id reached from `current` by `delta` steps over `[none, zones..]`.
    fn cycled_zone(&self, current: Option<&str>, delta: isize) -> Option<&'static str> {
        let zones = self.network.zones();
        let index = current
            .and_then(|id| zones.iter().position(|z| z.id == id))
            .map_or(0, |i| i + 1);
        let next = wrap_index(index, delta, zones.len() + 1);
        next.checked_sub(1).map(|i| zones[i].id)
    }

    /// Toggles the departure station under the checklist cursor.
    pub fn toggle_under_cursor(&mut self) -> bool {
        if self.focus != FormField::DepartureStations {
            return false;
        }
        match self.departure_station_options().get(self.station_cursor) {
            Some(station) => self.toggle_departure_station(station.id),
            None => false,
        }
    }

    /// Resets the focused field to its empty value.
    pub fn clear_focused(&mut self) {
        match self.focus {
            FormField::Date(field) => self.set_date(field, None),
            FormField::DepartureZone => self.select_departure_zone(None),
            FormField::DepartureStations => self.criteria.departure_stations.clear(),
            FormField::ArrivalZone => self.select_arrival_zone(None),
            FormField::ArrivalStation => self.criteria.arrival_station = None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> SearchForm {
        SearchForm::new(Network::standard())
    }

    #[test]
    fn test_new_departure_zone_clears_stations() {
        let mut form = form();
        form.select_departure_zone(Some("paris"));
        assert!(form.toggle_departure_station("paris-nord"));
        assert_eq!(form.criteria().departure_stations, vec!["paris-nord"]);

        form.select_departure_zone(Some("lyon"));
        assert!(form.criteria().departure_stations.is_empty());
        assert_eq!(form.criteria().departure_zone.as_deref(), Some("lyon"));
    }

    #[test]
    fn test_new_arrival_zone_clears_station() {
        let mut form = form();
        form.select_arrival_zone(Some("lyon"));
        assert!(form.select_arrival_station(Some("lyon-perrache")));

        form.select_arrival_zone(Some("lille"));
        assert_eq!(form.criteria().arrival_station, None);
    }

    #[test]
    fn test_station_outside_zone_is_rejected() {
        let mut form = form();
        assert!(!form.toggle_departure_station("paris-nord"));

        form.select_departure_zone(Some("lyon"));
        assert!(!form.toggle_departure_station("paris-nord"));
        assert!(form.criteria().departure_stations.is_empty());

        assert!(!form.select_arrival_station(Some("lyon-part-dieu")));
        form.select_arrival_zone(Some("marseille"));
        assert!(!form.select_arrival_station(Some("lyon-part-dieu")));
    }

    #[test]
    fn test_toggle_twice_deselects() {
        let mut form = form();
        form.select_departure_zone(Some("paris"));
        form.toggle_departure_station("paris-est");
        form.toggle_departure_station("paris-nord");
        form.toggle_departure_station("paris-est");
        assert_eq!(form.criteria().departure_stations, vec!["paris-nord"]);
    }

    #[test]
    fn test_invert_swaps_zones_and_stations() {
        let mut form = form();
        form.select_departure_zone(Some("paris"));
        form.toggle_departure_station("paris-gare-de-lyon");
        form.toggle_departure_station("paris-nord");
        form.select_arrival_zone(Some("lyon"));
        form.select_arrival_station(Some("lyon-part-dieu"));

        form.invert();

        let criteria = form.criteria();
        assert_eq!(criteria.departure_zone.as_deref(), Some("lyon"));
        assert_eq!(criteria.departure_stations, vec!["lyon-part-dieu"]);
        assert_eq!(criteria.arrival_zone.as_deref(), Some("paris"));
        assert_eq!(criteria.arrival_station.as_deref(), Some("paris-gare-de-lyon"));
    }

    #[test]
    fn test_invert_keeps_dates() {
        let mut form = form();
        let date = NaiveDate::from_ymd_opt(2025, 6, 3);
        form.set_date(DateField::DepartureFrom, date);
        form.select_departure_zone(Some("bordeaux"));

        form.invert();

        assert_eq!(form.date(DateField::DepartureFrom), date);
        assert_eq!(form.criteria().arrival_zone.as_deref(), Some("bordeaux"));
        assert_eq!(form.criteria().departure_zone, None);
        assert_eq!(form.criteria().arrival_station, None);
    }

    #[test]
    fn test_cycle_zone_wraps_through_none() {
        let mut form = form();
        form.focus = FormField::DepartureZone;

        form.cycle_option(1);
        assert_eq!(form.criteria().departure_zone.as_deref(), Some("paris"));

        form.cycle_option(-1);
        assert_eq!(form.criteria().departure_zone, None);

        form.cycle_option(-1);
        assert_eq!(form.criteria().departure_zone.as_deref(), Some("bordeaux"));
    }

    #[test]
    fn test_cycle_arrival_station_needs_zone() {
        let mut form = form();
        form.focus = FormField::ArrivalStation;
        form.cycle_option(1);
        assert_eq!(form.criteria().arrival_station, None);

        form.select_arrival_zone(Some("lyon"));
        form.cycle_option(1);
        assert_eq!(form.criteria().arrival_station.as_deref(), Some("lyon-part-dieu"));
        form.cycle_option(1);
        form.cycle_option(1);
        assert_eq!(form.criteria().arrival_station, None);
    }

    #[test]
    fn test_toggle_under_cursor() {
        let mut form = form();
        form.select_departure_zone(Some("lille"));
        form.focus = FormField::DepartureStations;
        form.cycle_option(1);

        assert!(form.toggle_under_cursor());
        assert_eq!(form.criteria().departure_stations, vec!["lille-flandres"]);
    }

    #[test]
    fn test_date_shift_and_clear() {
        let mut form = form();
        form.set_date(DateField::ReturnTo, NaiveDate::from_ymd_opt(2025, 6, 30));
        form.focus = FormField::Date(DateField::ReturnTo);

        form.cycle_option(1);
        assert_eq!(form.date(DateField::ReturnTo), NaiveDate::from_ymd_opt(2025, 7, 1));

        form.clear_focused();
        assert_eq!(form.date(DateField::ReturnTo), None);
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = form();
        form.focus_previous();
        assert_eq!(form.focus(), FormField::ArrivalStation);
        form.focus_next();
        assert_eq!(form.focus(), FormField::Date(DateField::DepartureFrom));
    }

    #[test]
    fn test_snapshot_of_untouched_form_is_empty() {
        assert!(form().snapshot().is_empty());
    }
}
