use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::{PairingConfig, PairingMode};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub pairing: PairingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct PairingSettings {
    #[serde(default)]
    pub mode: PairingMode,
    #[serde(default = "default_max_weight_diff_lb")]
    pub max_weight_diff_lb: f64,
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
    #[serde(default = "default_max_competitors")]
    pub max_competitors: usize,
}

impl Default for PairingSettings {
    fn default() -> Self {
        Self {
            mode: PairingMode::default(),
            max_weight_diff_lb: default_max_weight_diff_lb(),
            epsilon: default_epsilon(),
            max_competitors: default_max_competitors(),
        }
    }
}

impl PairingSettings {
    pub fn to_config(&self) -> PairingConfig {
        PairingConfig {
            mode: self.mode,
            max_weight_diff_lb: self.max_weight_diff_lb,
            epsilon: self.epsilon,
        }
    }
}

fn default_max_weight_diff_lb() -> f64 { PairingConfig::DEFAULT_MAX_WEIGHT_DIFF_LB }
fn default_epsilon() -> f64 { PairingConfig::DEFAULT_EPSILON }
fn default_max_competitors() -> usize { 500 }

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
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with DUEL_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., DUEL__PAIRING__MAX_WEIGHT_DIFF_LB -> pairing.max_weight_diff_lb
            .add_source(
                Environment::with_prefix("DUEL")
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
                Environment::with_prefix("DUEL")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Parse settings from an inline TOML document, without env overrides
    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }
}
