// Infrastructure layer - External dependencies and adapters
pub mod atmos_client;
pub mod config;
pub mod series_csv;
