//! AQI classification into quality bands and health guidance
//!
//! The band thresholds follow the standard Indian AQI breakpoints used by
//! the dashboard: 0-50 Good, 51-100 Moderate, 101-150 Unhealthy for
//! Sensitive Groups, 151-200 Unhealthy, 201-300 Very Unhealthy, 301+
//! Hazardous.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordinal air quality band derived from a numeric AQI value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum QualityBand {
    #[serde(rename = "Good")]
    Good,
    #[serde(rename = "Moderate")]
    Moderate,
    #[serde(rename = "Unhealthy for Sensitive Groups")]
    UnhealthyForSensitive,
    #[serde(rename = "Unhealthy")]
    Unhealthy,
    #[serde(rename = "Very Unhealthy")]
    VeryUnhealthy,
    #[serde(rename = "Hazardous")]
    Hazardous,
}

impl QualityBand {
    /// Classify a numeric AQI value into its quality band
    #[must_use]
    pub fn from_aqi(aqi: u32) -> Self {
        match aqi {
            0..=50 => QualityBand::Good,
            51..=100 => QualityBand::Moderate,
            101..=150 => QualityBand::UnhealthyForSensitive,
            151..=200 => QualityBand::Unhealthy,
            201..=300 => QualityBand::VeryUnhealthy,
            _ => QualityBand::Hazardous,
        }
    }

    /// Display label for the band
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            QualityBand::Good => "Good",
            QualityBand::Moderate => "Moderate",
            QualityBand::UnhealthyForSensitive => "Unhealthy for Sensitive Groups",
            QualityBand::Unhealthy => "Unhealthy",
            QualityBand::VeryUnhealthy => "Very Unhealthy",
            QualityBand::Hazardous => "Hazardous",
        }
    }

    /// Health guidance shown alongside the band
    #[must_use]
    pub fn recommendation(&self) -> &'static str {
        match self {
            QualityBand::Good => "Great day for outdoor activities! Air quality is excellent.",
            QualityBand::Moderate => {
                "Air quality is acceptable. Sensitive individuals should consider limiting \
                 prolonged outdoor exertion."
            }
            QualityBand::UnhealthyForSensitive => {
                "Members of sensitive groups may experience health effects. Consider wearing \
                 N95 masks outdoors."
            }
            QualityBand::Unhealthy => {
                "Everyone may begin to experience health effects. Use air purifiers indoors \
                 and wear masks outdoors."
            }
            QualityBand::VeryUnhealthy => {
                "Health warnings of emergency conditions. Stay indoors and use high-quality \
                 air purifiers."
            }
            QualityBand::Hazardous => {
                "Health alert: everyone may experience serious health effects. Avoid outdoor \
                 activities completely."
            }
        }
    }
}

impl fmt::Display for QualityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, QualityBand::Good)]
    #[case(50, QualityBand::Good)]
    #[case(51, QualityBand::Moderate)]
    #[case(100, QualityBand::Moderate)]
    #[case(101, QualityBand::UnhealthyForSensitive)]
    #[case(150, QualityBand::UnhealthyForSensitive)]
    #[case(151, QualityBand::Unhealthy)]
    #[case(200, QualityBand::Unhealthy)]
    #[case(201, QualityBand::VeryUnhealthy)]
    #[case(300, QualityBand::VeryUnhealthy)]
    #[case(301, QualityBand::Hazardous)]
    #[case(999, QualityBand::Hazardous)]
    fn test_band_thresholds(#[case] aqi: u32, #[case] expected: QualityBand) {
        assert_eq!(QualityBand::from_aqi(aqi), expected);
    }

    #[test]
    fn test_bands_are_ordered() {
        assert!(QualityBand::Good < QualityBand::Moderate);
        assert!(QualityBand::Moderate < QualityBand::UnhealthyForSensitive);
        assert!(QualityBand::UnhealthyForSensitive < QualityBand::Unhealthy);
        assert!(QualityBand::Unhealthy < QualityBand::VeryUnhealthy);
        assert!(QualityBand::VeryUnhealthy < QualityBand::Hazardous);
    }

    #[test]
    fn test_every_band_has_guidance() {
        let bands = [
            QualityBand::Good,
            QualityBand::Moderate,
            QualityBand::UnhealthyForSensitive,
            QualityBand::Unhealthy,
            QualityBand::VeryUnhealthy,
            QualityBand::Hazardous,
        ];
        for band in bands {
            assert!(!band.recommendation().is_empty());
            assert!(!band.label().is_empty());
        }
    }

    #[test]
    fn test_serde_uses_display_labels() {
        let json = serde_json::to_string(&QualityBand::UnhealthyForSensitive).unwrap();
        assert_eq!(json, "\"Unhealthy for Sensitive Groups\"");

        let band: QualityBand = serde_json::from_str("\"Very Unhealthy\"").unwrap();
        assert_eq!(band, QualityBand::VeryUnhealthy);
    }
}
