// Fleet service - Use case for aggregating the whole station fleet
use crate::application::reading_service::ReadingService;
use crate::application::series_client::SeriesClient;
use crate::domain::snapshot::FleetSnapshot;
use crate::domain::station::StationRecord;
use chrono::Utc;
use std::sync::Arc;

#[derive(Clone)]
pub struct FleetService {
    readings: ReadingService,
    registry: Arc<Vec<StationRecord>>,
}

impl FleetService {
    pub fn new(client: Arc<dyn SeriesClient>, registry: Vec<StationRecord>) -> Self {
        Self {
            readings: ReadingService::new(client),
            registry: Arc::new(registry),
        }
    }

    /// Runs one aggregation cycle: one fetch per stationed-city registry
    /// entry, all in flight at once, settled together before the snapshot is
    /// built. There is no concurrency cap; registries are tens to low
    /// hundreds of stations. A bounded worker pool becomes necessary before
    /// this grows into the thousands.
    ///
    /// Never fails: individual fetches soft-fail into absent readings, and
    /// the snapshot's `partial` flag records that the cycle was degraded.
    pub async fn aggregate(&self) -> FleetSnapshot {
        let stationed: Vec<&StationRecord> = self
            .registry
            .iter()
            .filter(|station| station.city.is_some())
            .collect();

        tracing::info!(stations = stationed.len(), "aggregation cycle started");

        let fetches = stationed
            .iter()
            .map(|&station| self.readings.fetch_latest(station));
        let readings = futures::future::join_all(fetches).await;

        let snapshot = FleetSnapshot::group(readings, Utc::now());
        tracing::info!(
            cities = snapshot.cities.len(),
            partial = snapshot.partial,
            "aggregation cycle complete"
        );
        snapshot
    }
}
