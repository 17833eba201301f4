// HTTP request handlers
use crate::domain::aqi;
use crate::domain::snapshot::{CityGroup, FleetSnapshot};
use crate::domain::station::StationReading;
use crate::presentation::app_state::AppState;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

#[derive(Serialize)]
pub struct FleetDto {
    pub fetched_at: String,
    pub partial: bool,
    pub cities: Vec<CityGroupDto>,
}

#[derive(Serialize)]
pub struct CityGroupDto {
    pub city: String,
    pub stations: Vec<StationDto>,
}

#[derive(Serialize)]
pub struct StationDto {
    pub id: String,
    pub name: String,
    /// Absent when the last cycle could not fetch this station.
    pub latest: Option<SampleDto>,
}

#[derive(Serialize)]
pub struct SampleDto {
    pub dt_time: String,
    pub pm25: f64,
    pub pm10: f64,
    pub aqi_label: &'static str,
    pub aqi_color: &'static str,
    pub aqi_rank: u8,
}

impl StationDto {
    fn from_reading(reading: &StationReading) -> Self {
        let latest = reading.latest.as_ref().map(|sample| {
            let category = aqi::classify(sample.pm25);
            SampleDto {
                dt_time: sample.dt_time.clone(),
                pm25: sample.pm25,
                pm10: sample.pm10,
                aqi_label: category.label,
                aqi_color: category.color,
                aqi_rank: category.rank,
            }
        });
        Self {
            id: reading.station.id.clone(),
            name: reading.station.name.clone(),
            latest,
        }
    }
}

impl CityGroupDto {
    fn from_group(group: &CityGroup) -> Self {
        Self {
            city: group.city.clone(),
            stations: group.stations.iter().map(StationDto::from_reading).collect(),
        }
    }
}

impl FleetDto {
    fn from_snapshot(snapshot: &FleetSnapshot, query: &str) -> Self {
        Self {
            fetched_at: snapshot.fetched_at.to_rfc3339(),
            partial: snapshot.partial,
            cities: snapshot
                .search(query)
                .into_iter()
                .map(CityGroupDto::from_group)
                .collect(),
        }
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// City groups with latest readings, optionally filtered by `?q=`.
/// Answers 503 until the first aggregation cycle has settled.
pub async fn list_cities(
    Query(params): Query<SearchQuery>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let query = params.q.unwrap_or_default();
    let current = state.snapshot.borrow().clone();

    match current {
        Some(snapshot) => Json(FleetDto::from_snapshot(&snapshot, &query)).into_response(),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "loading" })),
        )
            .into_response(),
    }
}

/// Manual refresh: kicks an aggregation cycle unless one is in flight.
pub async fn refresh(State(state): State<Arc<AppState>>) -> StatusCode {
    state.scheduler.trigger();
    StatusCode::ACCEPTED
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample::Sample;
    use crate::domain::station::StationRecord;
    use chrono::Utc;

    fn snapshot() -> FleetSnapshot {
        FleetSnapshot::group(
            vec![
                StationReading {
                    station: StationRecord::new(
                        "site_104".to_string(),
                        "Bandra".to_string(),
                        Some("Mumbai".to_string()),
                    ),
                    latest: Some(Sample::new("2025-03-14 00:00:00".to_string(), 120.0, 200.0)),
                },
                StationReading {
                    station: StationRecord::new(
                        "site_212".to_string(),
                        "Shadipur".to_string(),
                        Some("Delhi".to_string()),
                    ),
                    latest: None,
                },
            ],
            Utc::now(),
        )
    }

    #[test]
    fn test_fleet_dto_carries_aqi_for_present_samples_only() {
        let dto = FleetDto::from_snapshot(&snapshot(), "");

        assert!(dto.partial);
        assert_eq!(dto.cities.len(), 2);

        let mumbai = &dto.cities[0].stations[0];
        let latest = mumbai.latest.as_ref().unwrap();
        assert_eq!(latest.aqi_label, "Unhealthy for Sensitive Groups");
        assert_eq!(latest.aqi_color, "#FF9100");

        let delhi = &dto.cities[1].stations[0];
        assert!(delhi.latest.is_none());
    }

    #[test]
    fn test_fleet_dto_applies_the_search_filter() {
        let dto = FleetDto::from_snapshot(&snapshot(), "del");
        assert_eq!(dto.cities.len(), 1);
        assert_eq!(dto.cities[0].city, "Delhi");
    }
}
