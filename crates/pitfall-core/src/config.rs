// SPDX-License-Identifier: Apache-2.0

//! Configuration management for Pitfall.
//!
//! Provides layered configuration from files and environment variables.
//! Uses XDG-compliant paths with environment variable support.
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Environment variables (prefix: `PITFALL_`)
//! 2. Config file: `~/.config/pitfall/config.toml`
//! 3. Built-in defaults
//!
//! # Examples
//!
//! ```bash
//! # Point the SQL demo at a different throwaway database
//! PITFALL_DEMO__DATABASE_PATH=/tmp/demo.db pitfall demo sql-injection
//! ```

use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::PitfallError;
use crate::scan::ScanConfig;

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Demo settings.
    pub demo: DemoConfig,
    /// Scan ignore rules.
    pub scan: ScanConfig,
}

/// Settings for the demo commands.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Path of the throwaway SQLite database used by the SQL injection demo.
    pub database_path: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            // The original teaching script kept its database next to itself.
            database_path: "example.db".to_string(),
        }
    }
}

/// Returns the Pitfall configuration directory.
///
/// Respects `XDG_CONFIG_HOME`; falls back to `~/.config/pitfall`.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config.is_empty()
    {
        return PathBuf::from(xdg_config).join("pitfall");
    }
    dirs::home_dir()
        .expect("Could not determine home directory - is HOME set?")
        .join(".config")
        .join("pitfall")
}

/// Returns the path of the configuration file.
#[must_use]
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Load application configuration.
///
/// Loads from config file (if exists) and environment variables.
/// Environment variables use the prefix `PITFALL_` and double underscore
/// for nested keys (e.g., `PITFALL_DEMO__DATABASE_PATH`).
///
/// # Errors
///
/// Returns `PitfallError::Config` if the config file exists but is invalid.
pub fn load_config() -> Result<AppConfig, PitfallError> {
    let config_path = config_file_path();

    let config = Config::builder()
        // Load from config file (optional - may not exist)
        .add_source(File::with_name(config_path.to_string_lossy().as_ref()).required(false))
        // Override with environment variables
        .add_source(
            Environment::with_prefix("PITFALL")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    Ok(app_config)
}
