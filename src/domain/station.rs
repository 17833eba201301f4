// Station domain models
use crate::domain::sample::Sample;

/// One entry of the static station registry, loaded once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct StationRecord {
    pub id: String,
    pub name: String,
    /// Stations without a city cannot be grouped and are left out of
    /// aggregation entirely.
    pub city: Option<String>,
}

impl StationRecord {
    pub fn new(id: String, name: String, city: Option<String>) -> Self {
        Self { id, name, city }
    }
}

/// A station paired with its most recent sample, if one could be fetched.
///
/// `latest = None` means the fetch or parse failed for that station. The
/// station still appears in the snapshot so consumers can render a
/// "no data" state instead of silently dropping it.
#[derive(Debug, Clone, PartialEq)]
pub struct StationReading {
    pub station: StationRecord,
    pub latest: Option<Sample>,
}
