//! `Vayu` - Simulated air-quality dashboard for Indian cities
//!
//! This library provides the AQI domain core (band classification, health
//! guidance, synthetic forecast and historical series, insights, analytics
//! and mock weather) behind the terminal dashboard and the HTTP API.

pub mod api;
pub mod aqi;
pub mod chart;
pub mod cities;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use aqi::classify::QualityBand;
pub use aqi::snapshot::build_snapshot;
pub use config::VayuConfig;
pub use error::VayuError;
pub use models::{AqiSnapshot, City, DailyForecast, HistoricalPoint, Pollutants};
pub use weather::WeatherSnapshot;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, VayuError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
