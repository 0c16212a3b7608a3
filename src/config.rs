//! Configuration management for the circulation server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

/// Circulation policy knobs
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CirculationConfig {
    /// Maximum number of concurrent loans per patron
    pub max_loans: usize,
    /// Days between checkout and due date
    pub loan_period_days: u32,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CatalogueConfig {
    /// Load the default dataset at startup
    pub seed: bool,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub circulation: CirculationConfig,
    pub catalogue: CatalogueConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // e.g. CIRCULATION_SERVER__PORT=9000, CIRCULATION_CIRCULATION__MAX_LOANS=5
            .add_source(
                Environment::with_prefix("CIRCULATION")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for CirculationConfig {
    fn default() -> Self {
        Self {
            max_loans: 3,
            loan_period_days: 14,
        }
    }
}

impl Default for CatalogueConfig {
    fn default() -> Self {
        Self { seed: true }
    }
}
