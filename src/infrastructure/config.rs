use crate::domain::station::StationRecord;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AtmosConfig {
    pub atmos: AtmosSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AtmosSettings {
    pub base_url: String,
    pub api_key: String,
    /// Averaging window the feed applies server-side.
    #[serde(default = "default_avg_period")]
    pub avg_period: u32,
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_avg_period() -> u32 {
    7
}

fn default_refresh_interval_secs() -> u64 {
    300
}

fn default_request_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Deserialize, Clone)]
pub struct StationsConfig {
    #[serde(default)]
    pub stations: Vec<StationEntry>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StationEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub city: Option<String>,
}

impl StationEntry {
    pub fn into_record(self) -> StationRecord {
        StationRecord::new(self.id, self.name, self.city)
    }
}

pub fn load_atmos_config() -> anyhow::Result<AtmosConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/atmos"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Loads the static station registry. Read once at startup; the registry is
/// read-only for the lifetime of the process.
pub fn load_stations() -> anyhow::Result<Vec<StationRecord>> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/stations"))
        .build()?;

    let parsed: StationsConfig = settings.try_deserialize()?;
    Ok(parsed
        .stations
        .into_iter()
        .map(StationEntry::into_record)
        .collect())
}
