// Fleet snapshot domain model
use crate::domain::station::StationReading;
use chrono::{DateTime, Utc};

/// All stations of one city, in registry order.
#[derive(Debug, Clone, PartialEq)]
pub struct CityGroup {
    pub city: String,
    pub stations: Vec<StationReading>,
}

/// The complete result of one aggregation cycle.
///
/// Immutable once produced: each refresh cycle builds a brand-new snapshot
/// that replaces the previous one wholesale. Stale and fresh data are never
/// merged.
#[derive(Debug, Clone, PartialEq)]
pub struct FleetSnapshot {
    pub cities: Vec<CityGroup>,
    pub fetched_at: DateTime<Utc>,
    /// True if any station's fetch soft-failed this cycle.
    pub partial: bool,
}

impl FleetSnapshot {
    /// Buckets settled readings by city, in first-seen order. Readings keep
    /// their input order within each city. Callers are expected to have
    /// filtered out cityless stations already; any that slip through are
    /// dropped here as well.
    pub fn group(readings: Vec<StationReading>, fetched_at: DateTime<Utc>) -> Self {
        let mut cities: Vec<CityGroup> = Vec::new();
        let mut partial = false;

        for reading in readings {
            let Some(city) = reading.station.city.clone() else {
                continue;
            };
            if reading.latest.is_none() {
                partial = true;
            }
            match cities.iter_mut().find(|g| g.city == city) {
                Some(group) => group.stations.push(reading),
                None => cities.push(CityGroup {
                    city,
                    stations: vec![reading],
                }),
            }
        }

        Self {
            cities,
            fetched_at,
            partial,
        }
    }

    /// Case-insensitive substring match on the city name. An empty query
    /// matches every group; group order is preserved.
    pub fn search(&self, query: &str) -> Vec<&CityGroup> {
        let needle = query.to_lowercase();
        self.cities
            .iter()
            .filter(|g| g.city.to_lowercase().contains(&needle))
            .collect()
    }
}
