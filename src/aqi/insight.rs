//! Advisory insights and tiered health measures
//!
//! The "AI" insight is a fixed advisory text picked from the average of the
//! forecast series; health measures escalate through four tiers of masks,
//! air purifiers and general guidance.

use serde::{Deserialize, Serialize};

use crate::models::DailyForecast;

const INSIGHT_IMPROVING: &str = "Based on meteorological patterns and pollution trends, the next \
    7 days show promising air quality improvements. Perfect time for morning walks and outdoor yoga!";
const INSIGHT_MODERATE: &str = "Air quality analysis indicates moderate pollution levels ahead. \
    Consider indoor workouts and keep windows closed during peak traffic hours.";
const INSIGHT_CONCERNING: &str = "Pollution forecasting models predict concerning air quality. \
    Stock up on N95 masks and consider investing in a HEPA air purifier for your home.";
const INSIGHT_CLEARING: &str = "Weather patterns suggest cleaner air is coming! Light winds and \
    expected rainfall will help clear pollutants. Great week for outdoor activities.";
const INSIGHT_STABLE: &str = "AI models show stable, moderate air quality. Sensitive individuals \
    should monitor conditions and limit prolonged outdoor exposure during midday hours.";

/// Pick the advisory text matching the forecast average
///
/// An empty forecast reads as the concerning tier; the generators never
/// produce one, but the advisory must not divide by zero.
#[must_use]
pub fn forecast_insight(forecast: &[DailyForecast]) -> &'static str {
    if forecast.is_empty() {
        return INSIGHT_CONCERNING;
    }

    let sum: u32 = forecast.iter().map(|d| d.aqi).sum();
    let average = f64::from(sum) / forecast.len() as f64;

    if average <= 50.0 {
        INSIGHT_IMPROVING
    } else if average <= 75.0 {
        INSIGHT_CLEARING
    } else if average <= 100.0 {
        INSIGHT_STABLE
    } else if average <= 130.0 {
        INSIGHT_MODERATE
    } else {
        INSIGHT_CONCERNING
    }
}

/// Mask recommendation entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MaskRecommendation {
    pub name: String,
    pub effectiveness: String,
    pub price: String,
}

/// Air purifier recommendation entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurifierRecommendation {
    pub name: String,
    pub room_size: String,
    pub price: String,
    pub features: Vec<String>,
}

/// Tiered protective measures for the current AQI level
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthMeasures {
    pub masks: Vec<MaskRecommendation>,
    pub purifiers: Vec<PurifierRecommendation>,
    pub general: Vec<String>,
}

fn mask(name: &str, effectiveness: &str, price: &str) -> MaskRecommendation {
    MaskRecommendation {
        name: name.to_string(),
        effectiveness: effectiveness.to_string(),
        price: price.to_string(),
    }
}

fn purifier(name: &str, room_size: &str, price: &str, features: &[&str]) -> PurifierRecommendation {
    PurifierRecommendation {
        name: name.to_string(),
        room_size: room_size.to_string(),
        price: price.to_string(),
        features: features.iter().map(|f| (*f).to_string()).collect(),
    }
}

fn general(items: &[&str]) -> Vec<String> {
    items.iter().map(|i| (*i).to_string()).collect()
}

/// Protective measures for the given AQI level
#[must_use]
pub fn health_measures(aqi: u32) -> HealthMeasures {
    if aqi <= 50 {
        HealthMeasures {
            masks: vec![],
            purifiers: vec![],
            general: general(&[
                "Enjoy outdoor activities",
                "Perfect for morning jogs",
                "Great day for cycling",
            ]),
        }
    } else if aqi <= 100 {
        HealthMeasures {
            masks: vec![
                mask("Cloth Mask", "Basic protection", "₹50-100"),
                mask("Surgical Mask", "Moderate protection", "₹5-15 per piece"),
            ],
            purifiers: vec![
                purifier(
                    "Xiaomi Air Purifier 3H",
                    "Up to 484 sq ft",
                    "₹12,999",
                    &["HEPA filter", "App control"],
                ),
                purifier(
                    "Honeywell Air Touch A5",
                    "Up to 500 sq ft",
                    "₹15,999",
                    &["Pre-filter + HEPA", "Touch panel"],
                ),
            ],
            general: general(&[
                "Limit prolonged outdoor activities",
                "Close windows during peak hours",
                "Use air purifier in bedroom",
            ]),
        }
    } else if aqi <= 150 {
        HealthMeasures {
            masks: vec![
                mask("N95 Mask", "High protection (95%)", "₹25-50 per piece"),
                mask("KN95 Mask", "High protection (95%)", "₹20-40 per piece"),
                mask("P2 Respirator", "Very high protection", "₹100-200"),
            ],
            purifiers: vec![
                purifier(
                    "Dyson Pure Cool TP04",
                    "Up to 800 sq ft",
                    "₹45,900",
                    &["HEPA + Carbon filter", "Air multiplier", "App control"],
                ),
                purifier(
                    "Blueair Blue Pure 211+",
                    "Up to 540 sq ft",
                    "₹25,999",
                    &["3-stage filtration", "Energy efficient"],
                ),
                purifier(
                    "Coway Airmega 150",
                    "Up to 214 sq ft",
                    "₹18,999",
                    &["4-stage filtration", "Smart mode"],
                ),
            ],
            general: general(&[
                "Wear masks outdoors",
                "Avoid outdoor exercise",
                "Keep air purifiers running",
                "Stay hydrated",
            ]),
        }
    } else {
        HealthMeasures {
            masks: vec![
                mask("N99 Mask", "Maximum protection (99%)", "₹150-300 per piece"),
                mask("P3 Respirator", "Professional grade", "₹500-1000"),
                mask("Full Face Respirator", "Complete protection", "₹2000-5000"),
            ],
            purifiers: vec![
                purifier(
                    "IQAir HealthPro Plus",
                    "Up to 1125 sq ft",
                    "₹89,999",
                    &["Medical grade HEPA", "V5-Cell gas filter"],
                ),
                purifier(
                    "Austin Air HealthMate Plus",
                    "Up to 1500 sq ft",
                    "₹65,999",
                    &["4-stage filtration", "5-year warranty"],
                ),
                purifier(
                    "Rabbit Air MinusA2",
                    "Up to 815 sq ft",
                    "₹55,999",
                    &["6-stage filtration", "Wall mountable"],
                ),
            ],
            general: general(&[
                "Stay indoors",
                "Seal windows and doors",
                "Use multiple air purifiers",
                "Avoid all outdoor activities",
                "Consult doctor if breathing issues",
            ]),
        }
    }
}
