use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::privacy::DEFAULT_FUZZ_RADIUS_M;
use crate::models::GeometryTunables;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub geometry: GeometrySettings,
    #[serde(default)]
    pub privacy: PrivacySettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeometrySettings {
    #[serde(default = "default_containment_tolerance")]
    pub containment_tolerance: f64,
    #[serde(default = "default_min_radius_m")]
    pub min_radius_m: f64,
    #[serde(default = "default_expand_epsilon")]
    pub expand_epsilon: f64,
    #[serde(default = "default_radius_multiplier")]
    pub radius_multiplier: f64,
}

impl GeometrySettings {
    pub fn tunables(&self) -> GeometryTunables {
        GeometryTunables {
            containment_tolerance: self.containment_tolerance,
            min_radius_m: self.min_radius_m,
            expand_epsilon: self.expand_epsilon,
            radius_multiplier: self.radius_multiplier,
        }
    }
}

impl Default for GeometrySettings {
    fn default() -> Self {
        Self {
            containment_tolerance: default_containment_tolerance(),
            min_radius_m: default_min_radius_m(),
            expand_epsilon: default_expand_epsilon(),
            radius_multiplier: default_radius_multiplier(),
        }
    }
}

fn default_containment_tolerance() -> f64 { 0.01 }
fn default_min_radius_m() -> f64 { 100.0 }
fn default_expand_epsilon() -> f64 { 0.10 }
fn default_radius_multiplier() -> f64 { 1.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct PrivacySettings {
    #[serde(default = "default_fuzz_radius_m")]
    pub fuzz_radius_m: f64,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            fuzz_radius_m: default_fuzz_radius_m(),
        }
    }
}

fn default_fuzz_radius_m() -> f64 { DEFAULT_FUZZ_RADIUS_M }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml, config/local.toml)
    /// 3. Environment variables (prefixed with MIDWAY_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with MIDWAY_)
            // e.g., MIDWAY_GEOMETRY__MIN_RADIUS_M -> geometry.min_radius_m
            .add_source(
                Environment::with_prefix("MIDWAY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("MIDWAY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
