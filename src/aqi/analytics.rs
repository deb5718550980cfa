//! Trend analytics over a snapshot and the static world pollution ranking

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::aqi::classify::QualityBand;
use crate::models::AqiSnapshot;

/// Direction of the air quality trend for a city
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    Improving,
    Concerning,
}

/// How much caution current conditions require
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrecautionLevel {
    Minimal,
    Moderate,
    Significant,
}

impl PrecautionLevel {
    /// Wording used by the analytics view
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PrecautionLevel::Minimal => "minimal precautions",
            PrecautionLevel::Moderate => "moderate precautions",
            PrecautionLevel::Significant => "significant health measures",
        }
    }
}

/// Summary of trends derived from one snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendSummary {
    /// Trend direction based on the current AQI
    pub direction: TrendDirection,
    /// Required level of caution
    pub precaution: PrecautionLevel,
    /// Forecast days with AQI at or below 50
    pub good_days: usize,
    /// Forecast days with AQI above 100
    pub precaution_days: usize,
    /// Average AQI over the forecast window
    pub forecast_average: f64,
}

impl TrendSummary {
    /// Derive the trend summary for a snapshot
    #[must_use]
    pub fn for_snapshot(snapshot: &AqiSnapshot) -> Self {
        let direction = if snapshot.aqi <= 75 {
            TrendDirection::Improving
        } else {
            TrendDirection::Concerning
        };

        let precaution = if snapshot.aqi <= 50 {
            PrecautionLevel::Minimal
        } else if snapshot.aqi <= 100 {
            PrecautionLevel::Moderate
        } else {
            PrecautionLevel::Significant
        };

        let good_days = snapshot.forecast.iter().filter(|d| d.aqi <= 50).count();
        let precaution_days = snapshot.forecast.iter().filter(|d| d.aqi > 100).count();
        let forecast_average = if snapshot.forecast.is_empty() {
            0.0
        } else {
            let sum: u32 = snapshot.forecast.iter().map(|d| d.aqi).sum();
            f64::from(sum) / snapshot.forecast.len() as f64
        };

        Self {
            direction,
            precaution,
            good_days,
            precaution_days,
            forecast_average,
        }
    }
}

/// Entry in the most-polluted-cities world ranking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCity {
    pub rank: u32,
    pub name: String,
    pub aqi: u32,
    pub quality: QualityBand,
    /// Multiples of the WHO annual guideline, as shown in the ranking table
    pub times_above_standard: u32,
}

impl RankedCity {
    fn new(rank: u32, name: &str, aqi: u32) -> Self {
        Self {
            rank,
            name: name.to_string(),
            aqi,
            quality: QualityBand::from_aqi(aqi),
            // WHO guideline treated as 15 AQI points
            times_above_standard: (f64::from(aqi) / 15.0).round() as u32,
        }
    }
}

static WORLD_RANKING: LazyLock<Vec<RankedCity>> = LazyLock::new(|| {
    vec![
        RankedCity::new(1, "Kashgar, China", 308),
        RankedCity::new(2, "Bulandshahr, India", 188),
        RankedCity::new(3, "Faridabad, India", 172),
        RankedCity::new(4, "Hapur, India", 168),
        RankedCity::new(5, "Hotan, China", 168),
        RankedCity::new(6, "Greater Noida, India", 167),
    ]
});

/// The static most-polluted-cities ranking shown on the analytics tab
#[must_use]
pub fn world_ranking() -> &'static [RankedCity] {
    &WORLD_RANKING
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aqi::snapshot::build_snapshot;
    use crate::config::VayuConfig;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn snapshot_for(city: &str, seed: u64) -> AqiSnapshot {
        let config = VayuConfig::default();
        build_snapshot(city, &config, &mut StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_trend_direction_thresholds() {
        // Chennai baseline 78 is just past the improving cutoff
        let summary = TrendSummary::for_snapshot(&snapshot_for("Chennai", 1));
        assert_eq!(summary.direction, TrendDirection::Concerning);

        // A synthetic snapshot at the cutoff itself
        let mut snapshot = snapshot_for("Chennai", 1);
        snapshot.aqi = 75;
        let summary = TrendSummary::for_snapshot(&snapshot);
        assert_eq!(summary.direction, TrendDirection::Improving);
    }

    #[test]
    fn test_precaution_levels() {
        let mut snapshot = snapshot_for("Delhi", 2);

        snapshot.aqi = 42;
        assert_eq!(
            TrendSummary::for_snapshot(&snapshot).precaution,
            PrecautionLevel::Minimal
        );

        snapshot.aqi = 95;
        assert_eq!(
            TrendSummary::for_snapshot(&snapshot).precaution,
            PrecautionLevel::Moderate
        );

        snapshot.aqi = 168;
        assert_eq!(
            TrendSummary::for_snapshot(&snapshot).precaution,
            PrecautionLevel::Significant
        );
    }

    #[test]
    fn test_day_counts_partition_forecast() {
        let snapshot = snapshot_for("Delhi", 3);
        let summary = TrendSummary::for_snapshot(&snapshot);
        assert!(summary.good_days + summary.precaution_days <= snapshot.forecast.len());
        assert!(summary.forecast_average > 0.0);
    }

    #[test]
    fn test_world_ranking_table() {
        let ranking = world_ranking();
        assert_eq!(ranking.len(), 6);
        assert_eq!(ranking[0].name, "Kashgar, China");
        assert_eq!(ranking[0].times_above_standard, 21);
        assert_eq!(ranking[1].times_above_standard, 13);
        assert_eq!(ranking[2].times_above_standard, 11);

        // Ranks are consecutive and AQI never increases down the table
        for (i, entry) in ranking.iter().enumerate() {
            assert_eq!(entry.rank as usize, i + 1);
        }
        for window in ranking.windows(2) {
            assert!(window[0].aqi >= window[1].aqi);
        }
    }
}
