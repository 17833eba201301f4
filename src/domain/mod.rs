// Domain layer - Core data model and pure logic
pub mod aqi;
pub mod sample;
pub mod snapshot;
pub mod station;
