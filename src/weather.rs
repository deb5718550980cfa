//! Mock weather conditions for the weather tab
//!
//! Everything here is generated display data: current conditions drawn from
//! the ranges the dashboard shows, plus a short outlook reusing the forecast
//! temperature and humidity rules.

use chrono::{Days, Utc};
use rand::RngExt;
use serde::{Deserialize, Serialize};

/// Coarse sky condition for the outlook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkyCondition {
    Sunny,
    PartlyCloudy,
    Rainy,
}

impl SkyCondition {
    /// Condition inferred from relative humidity
    #[must_use]
    pub fn from_humidity(humidity: u32) -> Self {
        if humidity < 45 {
            SkyCondition::Sunny
        } else if humidity < 60 {
            SkyCondition::PartlyCloudy
        } else {
            SkyCondition::Rainy
        }
    }

    /// Display label for the condition
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            SkyCondition::Sunny => "Sunny",
            SkyCondition::PartlyCloudy => "Partly cloudy",
            SkyCondition::Rainy => "Rainy",
        }
    }
}

/// One day of the weather outlook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyOutlook {
    /// Display label ("Today", then weekday names)
    pub day: String,
    /// Temperature in Celsius
    pub temperature: u32,
    /// Relative humidity percentage
    pub humidity: u32,
    /// Sky condition derived from humidity
    pub condition: SkyCondition,
}

/// Generated current conditions plus a short outlook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// City this snapshot was generated for
    pub city: String,
    /// Temperature in Celsius
    pub temperature: u32,
    /// Relative humidity percentage
    pub humidity: u32,
    /// Wind speed in km/h
    pub wind_speed_kmh: u32,
    /// Wind direction in degrees (0-360, where 0/360 is North)
    pub wind_direction: u16,
    /// Visibility in kilometers
    pub visibility_km: u32,
    /// Cloud cover percentage (0-100)
    pub cloud_cover: u32,
    /// UV index (0-11)
    pub uv_index: u32,
    /// Six-day outlook starting today
    pub outlook: Vec<DailyOutlook>,
}

/// Days shown in the outlook, today included
const OUTLOOK_DAYS: usize = 6;

impl WeatherSnapshot {
    /// Generate a fresh weather snapshot for a city
    pub fn generate(city: &str, rng: &mut impl RngExt) -> Self {
        let today = Utc::now().date_naive();

        let outlook = (0..OUTLOOK_DAYS)
            .map(|offset| {
                let date = today.checked_add_days(Days::new(offset as u64)).unwrap_or(today);
                let humidity = rng.random_range(30..80);
                DailyOutlook {
                    day: if offset == 0 {
                        "Today".to_string()
                    } else {
                        date.format("%A").to_string()
                    },
                    temperature: rng.random_range(25..40),
                    humidity,
                    condition: SkyCondition::from_humidity(humidity),
                }
            })
            .collect();

        Self {
            city: city.to_string(),
            temperature: rng.random_range(25..=40),
            humidity: rng.random_range(30..=80),
            wind_speed_kmh: rng.random_range(4..=20),
            wind_direction: rng.random_range(0..360),
            visibility_km: rng.random_range(2..=10),
            cloud_cover: rng.random_range(0..=100),
            uv_index: rng.random_range(0..=11),
            outlook,
        }
    }

    /// Convert wind direction from degrees to a cardinal direction
    #[must_use]
    pub fn wind_direction_to_cardinal(degrees: u16) -> &'static str {
        match degrees {
            0..=11 | 349..=360 => "N",
            12..=33 => "NNE",
            34..=56 => "NE",
            57..=78 => "ENE",
            79..=101 => "E",
            102..=123 => "ESE",
            124..=146 => "SE",
            147..=168 => "SSE",
            169..=191 => "S",
            192..=213 => "SSW",
            214..=236 => "SW",
            237..=258 => "WSW",
            259..=281 => "W",
            282..=303 => "WNW",
            304..=326 => "NW",
            327..=348 => "NNW",
            _ => "Unknown",
        }
    }

    /// Format wind information, e.g. "9 km/h (132° SE)"
    #[must_use]
    pub fn format_wind(&self) -> String {
        format!(
            "{} km/h ({}° {})",
            self.wind_speed_kmh,
            self.wind_direction,
            Self::wind_direction_to_cardinal(self.wind_direction)
        )
    }
}
