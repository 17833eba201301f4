// Client trait for the upstream telemetry feed
use async_trait::async_trait;

#[async_trait]
pub trait SeriesClient: Send + Sync {
    /// Fetch the raw delimited time series for one station, covering the
    /// current single-day window at daily granularity for both particulate
    /// parameters.
    async fn fetch_series(&self, station_id: &str) -> anyhow::Result<String>;
}
