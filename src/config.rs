//! Configuration management for the `Vayu` application
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::VayuError;
use crate::aqi::generate::SeriesParams;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `Vayu` application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VayuConfig {
    /// Forecast series generation settings
    pub forecast: SeriesConfig,
    /// Historical series generation settings
    pub historical: SeriesConfig,
    /// Web server configuration
    pub server: ServerConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Settings for one generated AQI time series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesConfig {
    /// Number of days covered by the series
    pub days: u32,
    /// Maximum day-to-day deviation from the city baseline
    pub variation: u32,
    /// Lower clamp for generated AQI values
    pub min_aqi: u32,
    /// Upper clamp for generated AQI values
    pub max_aqi: u32,
}

/// Web server configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port the API server listens on
    #[serde(default = "default_server_port")]
    pub port: u16,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions

fn default_forecast() -> SeriesConfig {
    SeriesConfig {
        days: 7,
        variation: 15,
        min_aqi: 20,
        max_aqi: 200,
    }
}

fn default_historical() -> SeriesConfig {
    SeriesConfig {
        days: 31,
        variation: 20,
        min_aqi: 15,
        max_aqi: 250,
    }
}

fn default_server_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for VayuConfig {
    fn default() -> Self {
        Self {
            forecast: default_forecast(),
            historical: default_historical(),
            server: ServerConfig {
                port: default_server_port(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
                format: default_log_format(),
            },
        }
    }
}

impl SeriesConfig {
    /// Parameters handed to the series generator
    #[must_use]
    pub fn params(&self) -> SeriesParams {
        SeriesParams {
            days: self.days as usize,
            variation: self.variation as i32,
            min_aqi: self.min_aqi as i32,
            max_aqi: self.max_aqi as i32,
        }
    }
}

impl VayuConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Seed the builder with defaults so a missing file still deserializes
        let defaults = Self::default();
        builder = builder
            .add_source(Config::try_from(&defaults).with_context(|| "Failed to seed defaults")?);

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with VAYU_ prefix
        builder = builder.add_source(
            Environment::with_prefix("VAYU")
                .separator("_")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: VayuConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("vayu").join("config.toml"))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_series("forecast", &self.forecast)?;
        self.validate_series("historical", &self.historical)?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate one series generation section
    fn validate_series(&self, name: &str, series: &SeriesConfig) -> Result<()> {
        if series.days == 0 || series.days > 60 {
            return Err(VayuError::config(format!(
                "{name}.days must be between 1 and 60, got {}",
                series.days
            ))
            .into());
        }

        if series.variation == 0 || series.variation > 100 {
            return Err(VayuError::config(format!(
                "{name}.variation must be between 1 and 100, got {}",
                series.variation
            ))
            .into());
        }

        if series.min_aqi >= series.max_aqi {
            return Err(VayuError::config(format!(
                "{name}.min_aqi ({}) must be below {name}.max_aqi ({})",
                series.min_aqi, series.max_aqi
            ))
            .into());
        }

        if series.max_aqi > 500 {
            return Err(VayuError::config(format!(
                "{name}.max_aqi cannot exceed 500 (the AQI scale ceiling)"
            ))
            .into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(VayuError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(VayuError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = VayuConfig::default();
        assert_eq!(config.forecast.days, 7);
        assert_eq!(config.forecast.variation, 15);
        assert_eq!(config.forecast.min_aqi, 20);
        assert_eq!(config.forecast.max_aqi, 200);
        assert_eq!(config.historical.days, 31);
        assert_eq!(config.historical.min_aqi, 15);
        assert_eq!(config.historical.max_aqi, 250);
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = VayuConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = VayuConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_series_ranges() {
        let mut config = VayuConfig::default();
        config.forecast.days = 0;
        assert!(config.validate().is_err());

        let mut config = VayuConfig::default();
        config.historical.min_aqi = 300;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("min_aqi"));
    }

    #[test]
    fn test_config_validation_max_aqi_ceiling() {
        let mut config = VayuConfig::default();
        config.forecast.max_aqi = 600;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("500"));
    }

    #[test]
    fn test_series_params_conversion() {
        let config = VayuConfig::default();
        let params = config.forecast.params();
        assert_eq!(params.days, 7);
        assert_eq!(params.variation, 15);
        assert_eq!(params.min_aqi, 20);
        assert_eq!(params.max_aqi, 200);
    }

    #[test]
    fn test_config_path_generation() {
        let path = VayuConfig::get_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("vayu"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }
}
