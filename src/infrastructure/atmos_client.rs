// Atmos device-data client
use crate::application::series_client::SeriesClient;
use crate::infrastructure::config::AtmosSettings;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AtmosError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("atmos returned status {0}")]
    BadStatus(reqwest::StatusCode),
}

#[derive(Debug, Clone)]
pub struct AtmosClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    avg_period: u32,
}

impl AtmosClient {
    pub fn new(settings: &AtmosSettings) -> anyhow::Result<Self> {
        // A hung station would otherwise delay the whole cycle indefinitely,
        // so every request carries a client-side timeout. Expiry surfaces as
        // a transport error and becomes a soft failure upstream.
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            avg_period: settings.avg_period,
        })
    }

    /// Builds the device-data URL for one station and one day. The feed
    /// reports gaps as literal "NaN" tokens (`gaps=1&gap_value=NaN`), which
    /// the series parser coerces to 0.
    fn build_series_url(&self, station_id: &str, day: NaiveDate) -> String {
        let day = day.format("%Y-%m-%d");
        format!(
            "{}/adp/v4/getDeviceDataParam/imei/{}/params/pm2.5cnc,pm10cnc/startdate/{}T00:00/enddate/{}T00:00/ts/dd/avg/{}/api/{}?gaps=1&gap_value=NaN",
            self.base_url,
            urlencoding::encode(station_id),
            day,
            day,
            self.avg_period,
            self.api_key,
        )
    }
}

#[async_trait]
impl SeriesClient for AtmosClient {
    async fn fetch_series(&self, station_id: &str) -> anyhow::Result<String> {
        let url = self.build_series_url(station_id, Utc::now().date_naive());

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(AtmosError::Transport)?;

        if !response.status().is_success() {
            return Err(AtmosError::BadStatus(response.status()).into());
        }

        Ok(response.text().await.map_err(AtmosError::Transport)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> AtmosSettings {
        AtmosSettings {
            base_url: "https://atmos.urbansciences.in/".to_string(),
            api_key: "testkey".to_string(),
            avg_period: 7,
            refresh_interval_secs: 300,
            request_timeout_secs: 30,
        }
    }

    #[test]
    fn test_build_series_url() {
        let client = AtmosClient::new(&settings()).unwrap();
        let day = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let url = client.build_series_url("site_104", day);

        assert_eq!(
            url,
            "https://atmos.urbansciences.in/adp/v4/getDeviceDataParam/imei/site_104\
             /params/pm2.5cnc,pm10cnc/startdate/2025-03-14T00:00/enddate/2025-03-14T00:00\
             /ts/dd/avg/7/api/testkey?gaps=1&gap_value=NaN"
        );
    }

    #[test]
    fn test_build_series_url_escapes_station_id() {
        let client = AtmosClient::new(&settings()).unwrap();
        let day = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let url = client.build_series_url("site 104/x", day);

        assert!(url.contains("/imei/site%20104%2Fx/"));
    }
}
