// Application layer - Use cases and service seams
pub mod fleet_service;
pub mod reading_service;
pub mod refresh_scheduler;
pub mod series_client;
