//! Synthetic AQI time-series generation
//!
//! Forecast and historical series are bounded random walks around a city
//! baseline: each day deviates from the baseline by a uniform variation and
//! is clamped into a configured range. Generators take the RNG as an
//! argument so tests can seed them.

use chrono::{Days, NaiveDate, Utc};
use rand::RngExt;

use crate::aqi::classify::QualityBand;
use crate::models::{DailyForecast, HistoricalPoint};

/// Parameters for one generated series
#[derive(Debug, Clone, Copy)]
pub struct SeriesParams {
    /// Number of days in the series
    pub days: usize,
    /// Maximum absolute deviation from the baseline
    pub variation: i32,
    /// Lower clamp for generated values
    pub min_aqi: i32,
    /// Upper clamp for generated values
    pub max_aqi: i32,
}

/// Deviate from the baseline and clamp into the configured range
fn walk(base_aqi: u32, params: &SeriesParams, rng: &mut impl RngExt) -> u32 {
    let variation = rng.random_range(-params.variation..=params.variation);
    (base_aqi as i32 + variation).clamp(params.min_aqi, params.max_aqi) as u32
}

/// Generate a daily AQI forecast starting today
///
/// Temperature and humidity are drawn uniformly from the ranges the
/// dashboard displays (25-39 degrees Celsius, 40-79 percent).
pub fn generate_forecast(
    base_aqi: u32,
    params: &SeriesParams,
    rng: &mut impl RngExt,
) -> Vec<DailyForecast> {
    let today = Utc::now().date_naive();
    (0..params.days)
        .map(|offset| {
            let aqi = walk(base_aqi, params, rng);
            DailyForecast {
                date: add_days(today, offset),
                aqi,
                quality: QualityBand::from_aqi(aqi),
                temperature: rng.random_range(25..40),
                humidity: rng.random_range(40..80),
            }
        })
        .collect()
}

/// Generate a historical AQI series ending today, oldest point first
pub fn generate_historical(
    base_aqi: u32,
    params: &SeriesParams,
    rng: &mut impl RngExt,
) -> Vec<HistoricalPoint> {
    let today = Utc::now().date_naive();
    (0..params.days)
        .rev()
        .map(|back| {
            let aqi = walk(base_aqi, params, rng);
            HistoricalPoint {
                date: sub_days(today, back),
                aqi,
                quality: QualityBand::from_aqi(aqi),
            }
        })
        .collect()
}

fn add_days(date: NaiveDate, offset: usize) -> NaiveDate {
    date.checked_add_days(Days::new(offset as u64)).unwrap_or(date)
}

fn sub_days(date: NaiveDate, back: usize) -> NaiveDate {
    date.checked_sub_days(Days::new(back as u64)).unwrap_or(date)
}
