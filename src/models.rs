//! Data models for air quality snapshots
//!
//! This module contains the data structures used for representing AQI data:
//! the static city registry entry, the per-request snapshot, and the points
//! of the generated forecast and historical series.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::aqi::classify::QualityBand;

/// Static registry entry for a monitored city
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct City {
    /// City name
    pub name: String,
    /// Baseline AQI value
    pub aqi: u32,
    /// Quality band for the baseline value
    pub quality: QualityBand,
}

impl City {
    /// Create a registry entry, deriving the band from the AQI value
    #[must_use]
    pub fn new(name: &str, aqi: u32) -> Self {
        Self {
            name: name.to_string(),
            aqi,
            quality: QualityBand::from_aqi(aqi),
        }
    }
}

/// Pollutant concentration breakdown, derived from the composite AQI
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pollutants {
    pub pm25: u32,
    pub pm10: u32,
    pub o3: u32,
    pub no2: u32,
    pub so2: u32,
    pub co: u32,
}

impl Pollutants {
    /// Derive the pollutant breakdown as fixed fractions of the AQI value
    #[must_use]
    pub fn from_aqi(aqi: u32) -> Self {
        let fraction = |f: f64| (aqi as f64 * f).floor() as u32;
        Self {
            pm25: fraction(0.6),
            pm10: fraction(0.8),
            o3: fraction(0.4),
            no2: fraction(0.3),
            so2: fraction(0.2),
            co: fraction(0.1),
        }
    }
}

/// One day of the generated AQI forecast
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyForecast {
    /// Forecast date
    pub date: NaiveDate,
    /// Predicted AQI value
    pub aqi: u32,
    /// Quality band for the predicted value
    pub quality: QualityBand,
    /// Predicted temperature in Celsius
    pub temperature: u32,
    /// Predicted relative humidity percentage
    pub humidity: u32,
}

impl DailyForecast {
    /// Short display label, e.g. "Mon, Aug 25"
    #[must_use]
    pub fn date_label(&self) -> String {
        self.date.format("%a, %b %-d").to_string()
    }
}

/// One day of the generated historical AQI series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoricalPoint {
    /// Observation date
    pub date: NaiveDate,
    /// Recorded AQI value
    pub aqi: u32,
    /// Quality band for the recorded value
    pub quality: QualityBand,
}

impl HistoricalPoint {
    /// Short display label, e.g. "Aug 25"
    #[must_use]
    pub fn date_label(&self) -> String {
        self.date.format("%b %-d").to_string()
    }
}

/// Complete air quality snapshot for one city, built fresh per request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AqiSnapshot {
    /// City name (registry spelling)
    pub city: String,
    /// Current composite AQI value
    pub aqi: u32,
    /// Quality band for the current value
    pub quality: QualityBand,
    /// Pollutant concentration breakdown
    pub pollutants: Pollutants,
    /// Health guidance for the current band
    pub recommendation: String,
    /// When this snapshot was assembled
    pub last_updated: DateTime<Utc>,
    /// Generated forecast series (starts today)
    pub forecast: Vec<DailyForecast>,
    /// Generated historical series (ends today, ascending)
    pub historical: Vec<HistoricalPoint>,
}
