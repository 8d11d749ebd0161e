//! Zone and station lookup table.
//!
//! The [`Network`] is the single immutable mapping from zone identifiers to the
//! stations they contain. The criteria form uses it to build its option lists and
//! the result-set filter uses it to resolve selected identifiers to the display
//! names stored in trips.

/// A boarding/alighting point belonging to exactly one zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Station {
    pub id: &'static str,
    pub name: &'static str,
}

/// A coarse geographic grouping of stations (a metropolitan area).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zone {
    pub id: &'static str,
    pub name: &'static str,
    pub stations: &'static [Station],
}

/// Immutable zone → stations table keyed by zone identifier.
#[derive(Debug, PartialEq, Eq)]
pub struct Network {
    zones: &'static [Zone],
}

static STANDARD: Network = Network::new(&[
    Zone {
        id: "paris",
        name: "Paris",
        stations: &[
            Station { id: "paris-gare-de-lyon", name: "Paris Gare de Lyon" },
            Station { id: "paris-montparnasse", name: "Paris Montparnasse" },
            Station { id: "paris-nord", name: "Paris Nord" },
            Station { id: "paris-est", name: "Paris Est" },
        ],
    },
    Zone {
        id: "lyon",
        name: "Lyon",
        stations: &[
            Station { id: "lyon-part-dieu", name: "Lyon Part-Dieu" },
            Station { id: "lyon-perrache", name: "Lyon Perrache" },
        ],
    },
    Zone {
        id: "marseille",
        name: "Marseille",
        stations: &[Station { id: "marseille-saint-charles", name: "Marseille Saint-Charles" }],
    },
    Zone {
        id: "lille",
        name: "Lille",
        stations: &[
            Station { id: "lille-europe", name: "Lille Europe" },
            Station { id: "lille-flandres", name: "Lille Flandres" },
        ],
    },
    Zone {
        id: "bordeaux",
        name: "Bordeaux",
        stations: &[Station { id: "bordeaux-saint-jean", name: "Bordeaux Saint-Jean" }],
    },
]);

impl Network {
    /// Builds a table over a static zone list.
    ///
    /// Zone identifiers are expected to be unique, as are station identifiers
    /// across the whole table.
    #[must_use]
    pub const fn new(zones: &'static [Zone]) -> Self {
        Self { zones }
    }

    /// The TGV Max zones offered by the search form.
    ///
    /// # Examples
    ///
    /// ```
    /// use tgvmax::domain::Network;
    ///
    /// let network = Network::standard();
    /// assert_eq!(network.zone("lyon").map(|z| z.name), Some("Lyon"));
    /// ```
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    #[must_use]
    pub const fn zones(&self) -> &'static [Zone] {
        self.zones
    }

    /// Looks up a zone by identifier.
    #[must_use]
    pub fn zone(&self, id: &str) -> Option<&'static Zone> {
        self.zones.iter().find(|zone| zone.id == id)
    }

    /// Stations of a zone, or an empty slice for an unknown zone.
    #[must_use]
    pub fn stations_in(&self, zone_id: &str) -> &'static [Station] {
        self.zone(zone_id).map(|zone| zone.stations).unwrap_or(&[])
    }

    /// Looks up a station anywhere in the table, returning it with its zone.
    #[must_use]
    pub fn station(&self, id: &str) -> Option<(&'static Zone, &'static Station)> {
        self.zones.iter().find_map(|zone| {
            zone.stations
                .iter()
                .find(|station| station.id == id)
                .map(|station| (zone, station))
        })
    }

    /// Whether `station_id` belongs to `zone_id`.
    #[must_use]
    pub fn zone_contains(&self, zone_id: &str, station_id: &str) -> bool {
        self.stations_in(zone_id).iter().any(|station| station.id == station_id)
    }
}
