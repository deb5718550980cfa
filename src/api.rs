//! HTTP API surface mirroring the dashboard views

use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    response::Json,
    routing::get,
};
use serde::{Deserialize, Serialize};

use crate::aqi::analytics::{RankedCity, TrendSummary, world_ranking};
use crate::aqi::insight::{HealthMeasures, forecast_insight, health_measures};
use crate::aqi::snapshot::build_snapshot;
use crate::cities;
use crate::config::VayuConfig;
use crate::models::{AqiSnapshot, City};
use crate::weather::WeatherSnapshot;

/// Shared state handed to every handler
pub type ApiState = Arc<VayuConfig>;

#[derive(Serialize, Deserialize)]
pub struct ApiCity {
    pub name: String,
    pub aqi: u32,
    pub quality: String,
}

impl From<&City> for ApiCity {
    fn from(city: &City) -> Self {
        Self {
            name: city.name.clone(),
            aqi: city.aqi,
            quality: city.quality.label().to_string(),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct ApiInsight {
    pub city: String,
    pub insight: String,
    pub measures: HealthMeasures,
}

#[derive(Serialize, Deserialize)]
pub struct ApiAnalytics {
    pub city: String,
    pub aqi: u32,
    pub trend: TrendSummary,
}

#[derive(Serialize, Deserialize)]
pub struct ApiHealth {
    pub status: String,
}

/// Build the API router
pub fn router(config: VayuConfig) -> Router {
    Router::new()
        .route("/cities", get(get_cities))
        .route("/cities/{name}/aqi", get(get_snapshot))
        .route("/cities/{name}/insight", get(get_insight))
        .route("/cities/{name}/analytics", get(get_analytics))
        .route("/cities/{name}/weather", get(get_weather))
        .route("/rankings", get(get_rankings))
        .route("/health", get(get_health))
        .with_state(Arc::new(config))
}

async fn get_cities() -> Json<Vec<ApiCity>> {
    Json(cities::registry().iter().map(ApiCity::from).collect())
}

/// Unknown cities follow the registry fallback, so this never 404s
async fn get_snapshot(
    State(config): State<ApiState>,
    Path(name): Path<String>,
) -> Json<AqiSnapshot> {
    let snapshot = build_snapshot(&name, &config, &mut rand::rng());
    Json(snapshot)
}

async fn get_insight(State(config): State<ApiState>, Path(name): Path<String>) -> Json<ApiInsight> {
    let snapshot = build_snapshot(&name, &config, &mut rand::rng());
    Json(ApiInsight {
        insight: forecast_insight(&snapshot.forecast).to_string(),
        measures: health_measures(snapshot.aqi),
        city: snapshot.city,
    })
}

async fn get_analytics(
    State(config): State<ApiState>,
    Path(name): Path<String>,
) -> Json<ApiAnalytics> {
    let snapshot = build_snapshot(&name, &config, &mut rand::rng());
    Json(ApiAnalytics {
        trend: TrendSummary::for_snapshot(&snapshot),
        aqi: snapshot.aqi,
        city: snapshot.city,
    })
}

async fn get_weather(Path(name): Path<String>) -> Json<WeatherSnapshot> {
    let city = cities::lookup(&name);
    Json(WeatherSnapshot::generate(&city.name, &mut rand::rng()))
}

async fn get_rankings() -> Json<Vec<RankedCity>> {
    Json(world_ranking().to_vec())
}

async fn get_health() -> Json<ApiHealth> {
    Json(ApiHealth {
        status: "ok".to_string(),
    })
}
