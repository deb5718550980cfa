//! AQI domain core: classification, synthetic series, insights and analytics

pub mod analytics;
pub mod classify;
pub mod generate;
pub mod insight;
pub mod snapshot;

pub use classify::QualityBand;
pub use snapshot::build_snapshot;
