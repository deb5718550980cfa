//! Snapshot assembly: city resolution, pollutant breakdown and series generation

use chrono::Utc;
use rand::RngExt;

use crate::aqi::generate::{generate_forecast, generate_historical};
use crate::cities;
use crate::config::VayuConfig;
use crate::models::{AqiSnapshot, Pollutants};

/// Build a fresh snapshot for the requested city
///
/// City resolution follows the registry rules: case-insensitive match,
/// unknown names fall back to the first registry entry.
pub fn build_snapshot(city_name: &str, config: &VayuConfig, rng: &mut impl RngExt) -> AqiSnapshot {
    let city = cities::lookup(city_name);

    AqiSnapshot {
        city: city.name.clone(),
        aqi: city.aqi,
        quality: city.quality,
        pollutants: Pollutants::from_aqi(city.aqi),
        recommendation: city.quality.recommendation().to_string(),
        last_updated: Utc::now(),
        forecast: generate_forecast(city.aqi, &config.forecast.params(), rng),
        historical: generate_historical(city.aqi, &config.historical.params(), rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aqi::classify::QualityBand;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_snapshot_for_known_city() {
        let config = VayuConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        let snapshot = build_snapshot("kolkata", &config, &mut rng);

        assert_eq!(snapshot.city, "Kolkata");
        assert_eq!(snapshot.aqi, 142);
        assert_eq!(snapshot.quality, QualityBand::UnhealthyForSensitive);
        assert_eq!(snapshot.pollutants, Pollutants::from_aqi(142));
        assert_eq!(snapshot.recommendation, snapshot.quality.recommendation());
        assert_eq!(snapshot.forecast.len(), 7);
        assert_eq!(snapshot.historical.len(), 31);
    }

    #[test]
    fn test_snapshot_unknown_city_falls_back() {
        let config = VayuConfig::default();
        let mut rng = StdRng::seed_from_u64(2);
        let snapshot = build_snapshot("Nowhere", &config, &mut rng);
        assert_eq!(snapshot.city, "Delhi");
        assert_eq!(snapshot.aqi, 168);
    }

    #[test]
    fn test_snapshot_respects_series_config() {
        let mut config = VayuConfig::default();
        config.forecast.days = 3;
        config.historical.days = 10;

        let mut rng = StdRng::seed_from_u64(3);
        let snapshot = build_snapshot("Pune", &config, &mut rng);
        assert_eq!(snapshot.forecast.len(), 3);
        assert_eq!(snapshot.historical.len(), 10);
    }
}
