//! Configuration management for `RunningBuddy`
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::RunningBuddyError;
use crate::clothing::ColdPreference;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunningBuddyConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Clothing advisor settings
    #[serde(default)]
    pub advisor: AdvisorConfig,
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

/// Clothing advisor settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// Cold preference used when none is given on the command line
    #[serde(default = "default_cold_preference")]
    pub default_cold_preference: f64,
    /// Clamp preferences into the validated range before recommending
    #[serde(default)]
    pub clamp_cold_preference: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_cold_preference() -> f64 {
    0.0
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            default_cold_preference: default_cold_preference(),
            clamp_cold_preference: false,
        }
    }
}

impl RunningBuddyConfig {
    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

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

        // RUNNINGBUDDY_ADVISOR__CLAMP_COLD_PREFERENCE=true and friends
        builder = builder.add_source(
            Environment::with_prefix("RUNNINGBUDDY")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: RunningBuddyConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("runningbuddy").join("config.toml"))
    }

    /// Apply default values to empty configuration fields
    pub fn apply_defaults(&mut self) {
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_logging()?;
        self.validate_advisor()?;
        Ok(())
    }

    fn validate_logging(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(RunningBuddyError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(RunningBuddyError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }

    fn validate_advisor(&self) -> Result<()> {
        let preference = ColdPreference::new(self.advisor.default_cold_preference);
        if !preference.is_validated() {
            return Err(RunningBuddyError::config(format!(
                "Default cold preference must be between {} and {}, got {}",
                ColdPreference::MIN,
                ColdPreference::MAX,
                self.advisor.default_cold_preference
            ))
            .into());
        }
        Ok(())
    }

    /// Apply the configured preference policy to a caller-supplied value
    #[must_use]
    pub fn effective_cold_preference(&self, requested: Option<f64>) -> ColdPreference {
        let preference =
            ColdPreference::new(requested.unwrap_or(self.advisor.default_cold_preference));
        if self.advisor.clamp_cold_preference {
            preference.clamped()
        } else {
            preference
        }
    }
}
