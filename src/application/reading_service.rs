// Reading service - Use case for fetching one station's latest sample
use crate::application::series_client::SeriesClient;
use crate::domain::station::{StationRecord, StationReading};
use crate::infrastructure::series_csv;
use std::sync::Arc;

#[derive(Clone)]
pub struct ReadingService {
    client: Arc<dyn SeriesClient>,
}

impl ReadingService {
    pub fn new(client: Arc<dyn SeriesClient>) -> Self {
        Self { client }
    }

    /// Fetches the most recent sample for one station. Never fails: a
    /// transport error or an empty/unparseable body resolves to
    /// `latest = None` for that station. Retry is the refresh cycle's job,
    /// not this call's.
    ///
    /// The feed is assumed chronologically ascending, so "latest" is the
    /// last parsed row. If the feed ever misorders rows we still take the
    /// last one, matching upstream behavior.
    pub async fn fetch_latest(&self, station: &StationRecord) -> StationReading {
        let latest = match self.client.fetch_series(&station.id).await {
            Ok(body) => {
                let mut samples = series_csv::parse(&body);
                if samples.is_empty() {
                    tracing::warn!(
                        station = %station.id,
                        "series response was empty or malformed"
                    );
                }
                samples.pop()
            }
            Err(error) => {
                tracing::warn!(station = %station.id, %error, "series fetch failed");
                None
            }
        };

        StationReading {
            station: station.clone(),
            latest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FixedClient {
        body: anyhow::Result<String>,
    }

    #[async_trait]
    impl SeriesClient for FixedClient {
        async fn fetch_series(&self, _station_id: &str) -> anyhow::Result<String> {
            match &self.body {
                Ok(body) => Ok(body.clone()),
                Err(e) => Err(anyhow::anyhow!("{}", e)),
            }
        }
    }

    fn station() -> StationRecord {
        StationRecord::new(
            "site_104".to_string(),
            "Bandra".to_string(),
            Some("Mumbai".to_string()),
        )
    }

    #[tokio::test]
    async fn test_latest_is_the_last_row() {
        let service = ReadingService::new(Arc::new(FixedClient {
            body: Ok("dt_time,pm2.5cnc,pm10cnc\n\
                      2025-03-14 00:00:00,10,20\n\
                      2025-03-14 01:00:00,30,40\n"
                .to_string()),
        }));

        let reading = service.fetch_latest(&station()).await;
        let latest = reading.latest.unwrap();
        assert_eq!(latest.dt_time, "2025-03-14 01:00:00");
        assert_eq!(latest.pm25, 30.0);
        assert_eq!(latest.pm10, 40.0);
    }

    #[tokio::test]
    async fn test_transport_error_resolves_to_absent() {
        let service = ReadingService::new(Arc::new(FixedClient {
            body: Err(anyhow::anyhow!("connection refused")),
        }));

        let reading = service.fetch_latest(&station()).await;
        assert_eq!(reading.station.id, "site_104");
        assert!(reading.latest.is_none());
    }

    #[tokio::test]
    async fn test_empty_body_resolves_to_absent() {
        let service = ReadingService::new(Arc::new(FixedClient {
            body: Ok(String::new()),
        }));

        let reading = service.fetch_latest(&station()).await;
        assert!(reading.latest.is_none());
    }
}
