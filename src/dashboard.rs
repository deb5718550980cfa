//! Terminal dashboard: loading sequence and tab rendering
//!
//! Replays the product flow in the terminal: a short simulated loading
//! sequence, then one of the five tabs rendered as text. The delays are
//! purely cosmetic and collapse to zero in fast mode.

use std::fmt::Write as _;
use std::time::Duration;

use anyhow::Result;
use clap::ValueEnum;
use rand::RngExt;
use tracing::info;

use crate::aqi::analytics::{TrendDirection, TrendSummary, world_ranking};
use crate::aqi::insight::{forecast_insight, health_measures};
use crate::aqi::snapshot::build_snapshot;
use crate::chart;
use crate::config::VayuConfig;
use crate::models::AqiSnapshot;
use crate::weather::WeatherSnapshot;

/// Dashboard tab selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Tab {
    Overview,
    Assistant,
    Analytics,
    Weather,
    About,
}

/// Pause between loading steps in normal mode
const STEP_DELAY: Duration = Duration::from_millis(400);

/// Replay the loading sequence shown before the dashboard appears
pub async fn loading_sequence(name: &str, city: &str, fast: bool) {
    let steps = [
        format!("Hello, {name}!"),
        format!("Locating {city}..."),
        "Fetching air quality data...".to_string(),
        "Analyzing pollution levels...".to_string(),
        "Preparing your dashboard...".to_string(),
    ];

    for step in &steps {
        info!("{step}");
        println!("  {step}");
        if !fast {
            tokio::time::sleep(STEP_DELAY).await;
        }
    }
}

/// Build the data and render the requested tab
pub async fn run(name: &str, city: &str, tab: Tab, fast: bool, config: &VayuConfig) -> Result<()> {
    loading_sequence(name, city, fast).await;

    let mut rng = rand::rng();
    let snapshot = build_snapshot(city, config, &mut rng);
    let view = render_tab(tab, &snapshot, &mut rng)?;
    println!("\n{view}");
    Ok(())
}

/// Render one tab of the dashboard to a string
pub fn render_tab(tab: Tab, snapshot: &AqiSnapshot, rng: &mut impl RngExt) -> Result<String> {
    let view = match tab {
        Tab::Overview => render_overview(snapshot)?,
        Tab::Assistant => render_assistant(snapshot),
        Tab::Analytics => render_analytics(snapshot),
        Tab::Weather => render_weather(&WeatherSnapshot::generate(&snapshot.city, rng)),
        Tab::About => render_about(),
    };
    Ok(view)
}

/// Overview tab: AQI card, pollutant breakdown, recommendation and charts
pub fn render_overview(snapshot: &AqiSnapshot) -> Result<String> {
    let mut out = String::new();
    let _ = writeln!(out, "=== Air Quality — {} ===", snapshot.city);
    let _ = writeln!(out, "AQI {}  ({})", snapshot.aqi, snapshot.quality);
    let _ = writeln!(
        out,
        "Updated {}",
        snapshot.last_updated.format("%Y-%m-%d %H:%M UTC")
    );
    let _ = writeln!(out);

    let p = &snapshot.pollutants;
    let _ = writeln!(out, "Pollutants (index points)");
    let _ = writeln!(out, "  PM2.5 {:>4}   PM10 {:>4}   O3 {:>4}", p.pm25, p.pm10, p.o3);
    let _ = writeln!(out, "  NO2   {:>4}   SO2  {:>4}   CO {:>4}", p.no2, p.so2, p.co);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", snapshot.recommendation);
    let _ = writeln!(out);

    let forecast_points: Vec<(String, f64)> = snapshot
        .forecast
        .iter()
        .map(|d| (d.date_label(), f64::from(d.aqi)))
        .collect();
    let _ = writeln!(out, "7-day forecast");
    out.push_str(&chart::render(&forecast_points, 8)?);
    let _ = writeln!(out);

    let historical_points: Vec<(String, f64)> = snapshot
        .historical
        .iter()
        .map(|p| (p.date_label(), f64::from(p.aqi)))
        .collect();
    let _ = writeln!(out, "30-day history");
    out.push_str(&chart::render(&historical_points, 8)?);

    Ok(out)
}

/// Assistant tab: advisory insight plus tiered health measures
pub fn render_assistant(snapshot: &AqiSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== AI Health Assistant — {} ===", snapshot.city);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", forecast_insight(&snapshot.forecast));
    let _ = writeln!(out);

    let measures = health_measures(snapshot.aqi);
    if measures.masks.is_empty() {
        let _ = writeln!(out, "No protective equipment needed today.");
    } else {
        let _ = writeln!(out, "Recommended masks");
        for mask in &measures.masks {
            let _ = writeln!(out, "  {} — {} ({})", mask.name, mask.effectiveness, mask.price);
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "Recommended air purifiers");
        for purifier in &measures.purifiers {
            let _ = writeln!(
                out,
                "  {} — {}, {} [{}]",
                purifier.name,
                purifier.room_size,
                purifier.price,
                purifier.features.join(", ")
            );
        }
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "General guidance");
    for item in &measures.general {
        let _ = writeln!(out, "  - {item}");
    }
    out
}

/// Analytics tab: trend summary plus the world pollution ranking
pub fn render_analytics(snapshot: &AqiSnapshot) -> String {
    let summary = TrendSummary::for_snapshot(snapshot);
    let trend = match summary.direction {
        TrendDirection::Improving => "improving",
        TrendDirection::Concerning => "concerning",
    };

    let mut out = String::new();
    let _ = writeln!(out, "=== Analytics — {} ===", snapshot.city);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Based on historical data, {} shows {} air quality trends. Current conditions \
         require {}.",
        snapshot.city,
        trend,
        summary.precaution.label()
    );
    let _ = writeln!(
        out,
        "The next {} days show {} days with good air quality and {} days requiring \
         health precautions (forecast average {:.0}).",
        snapshot.forecast.len(),
        summary.good_days,
        summary.precaution_days,
        summary.forecast_average
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Most polluted cities right now");
    for entry in world_ranking() {
        let _ = writeln!(
            out,
            "  {}. {:<22} AQI {:>3}  {} ({}x above standard)",
            entry.rank,
            entry.name,
            entry.aqi,
            entry.quality,
            entry.times_above_standard
        );
    }
    out
}

/// Weather tab: current conditions and the short outlook
pub fn render_weather(weather: &WeatherSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Weather — {} ===", weather.city);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{}°C, humidity {}%, wind {}",
        weather.temperature,
        weather.humidity,
        weather.format_wind()
    );
    let _ = writeln!(
        out,
        "Visibility {} km with {}% cloud cover. UV index {}.",
        weather.visibility_km, weather.cloud_cover, weather.uv_index
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Outlook");
    for day in &weather.outlook {
        let _ = writeln!(
            out,
            "  {:<10} {:>2}°C  {:>2}%  {}",
            day.day,
            day.temperature,
            day.humidity,
            day.condition.label()
        );
    }
    out
}

/// About tab: static description of the dashboard
#[must_use]
pub fn render_about() -> String {
    "=== About Vayu ===\n\n\
     Vayu is a simulated air-quality dashboard for Indian cities. All readings,\n\
     forecasts and insights are locally generated mock data intended for\n\
     demonstration: there is no live ingestion, no backend and no persistence.\n\
     AQI values are bucketed into the standard six quality bands, and health\n\
     guidance follows the band thresholds.\n"
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn snapshot() -> AqiSnapshot {
        let config = VayuConfig::default();
        build_snapshot("Delhi", &config, &mut StdRng::seed_from_u64(21))
    }

    #[test]
    fn test_overview_contains_core_fields() {
        let view = render_overview(&snapshot()).unwrap();
        assert!(view.contains("Delhi"));
        assert!(view.contains("AQI 168"));
        assert!(view.contains("Unhealthy"));
        assert!(view.contains("PM2.5"));
        assert!(view.contains("7-day forecast"));
        assert!(view.contains("30-day history"));
    }

    #[test]
    fn test_assistant_lists_measures_for_unhealthy_city() {
        let view = render_assistant(&snapshot());
        assert!(view.contains("AI Health Assistant"));
        assert!(view.contains("N99 Mask"));
        assert!(view.contains("General guidance"));
    }

    #[test]
    fn test_analytics_mentions_trend_and_ranking() {
        let view = render_analytics(&snapshot());
        assert!(view.contains("concerning air quality trends"));
        assert!(view.contains("significant health measures"));
        assert!(view.contains("Kashgar, China"));
    }

    #[test]
    fn test_weather_tab_renders_outlook() {
        let mut rng = StdRng::seed_from_u64(13);
        let weather = WeatherSnapshot::generate("Chennai", &mut rng);
        let view = render_weather(&weather);
        assert!(view.contains("Chennai"));
        assert!(view.contains("Today"));
        assert!(view.contains("UV index"));
    }

    #[test]
    fn test_every_tab_renders() {
        let snapshot = snapshot();
        let mut rng = StdRng::seed_from_u64(17);
        for tab in [
            Tab::Overview,
            Tab::Assistant,
            Tab::Analytics,
            Tab::Weather,
            Tab::About,
        ] {
            let view = render_tab(tab, &snapshot, &mut rng).unwrap();
            assert!(!view.is_empty());
        }
    }

    #[tokio::test]
    async fn test_fast_loading_sequence_completes_quickly() {
        let started = std::time::Instant::now();
        loading_sequence("Asha", "Delhi", true).await;
        assert!(started.elapsed() < Duration::from_millis(200));
    }
}
