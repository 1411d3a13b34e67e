//! Application configuration module
//!
//! This module provides type-safe configuration loading from an optional file
//! and environment variables using the `config` and `dotenvy` crates.
//! Environment variables use the `AHP_ENGINE` prefix and nested values use
//! double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use ahp_engine::config::AppConfig;
//!
//! let config = AppConfig::load(None).expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! let engine = config.engine.build_engine();
//! ```

mod engine;
mod error;
mod logging;

pub use engine::EngineConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};

use serde::Deserialize;
use std::path::Path;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Consistency threshold and reciprocity tolerance
    #[serde(default)]
    pub engine: EngineConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from an optional file and the environment
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads `file` if given (TOML, YAML or JSON by extension)
    /// 3. Reads environment variables with `AHP_ENGINE` prefix, which
    ///    override the file
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `AHP_ENGINE__ENGINE__CONSISTENCY_THRESHOLD=10` -> `engine.consistency_threshold = 10`
    /// - `AHP_ENGINE__LOGGING__FORMAT=json` -> `logging.format = json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - The file is missing or malformed
    /// - Values cannot be parsed into expected types
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix("AHP_ENGINE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.engine.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
