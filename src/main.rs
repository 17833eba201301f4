// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::application::fleet_service::FleetService;
use crate::application::refresh_scheduler::RefreshScheduler;
use crate::infrastructure::atmos_client::AtmosClient;
use crate::infrastructure::config::{load_atmos_config, load_stations};
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{health_check, list_cities, refresh};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration and the static station registry
    let atmos_config = load_atmos_config()?;
    let registry = load_stations()?;
    tracing::info!(stations = registry.len(), "station registry loaded");

    // Create the feed client (infrastructure layer)
    let client = Arc::new(AtmosClient::new(&atmos_config.atmos)?);

    // Create services (application layer)
    let fleet_service = FleetService::new(client, registry);
    let (scheduler, snapshot) = RefreshScheduler::new(fleet_service);
    let refresh_loop = scheduler
        .clone()
        .run(Duration::from_secs(atmos_config.atmos.refresh_interval_secs));

    // Create application state
    let state = Arc::new(AppState {
        scheduler: scheduler.clone(),
        snapshot,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/cities", get(list_cities))
        .route("/refresh", post(refresh))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = "0.0.0.0:8080".parse().unwrap();
    println!("Starting vayuveda-telemetry service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    // Stop the timer; an in-flight cycle finishes but its result is dropped.
    scheduler.shutdown();
    let _ = refresh_loop.await;

    Ok(())
}
