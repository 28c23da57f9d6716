/*!
 * Application configuration module
 *
 * This module handles the application configuration including loading,
 * validating and saving configuration settings.
 */

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Provider settings
    #[serde(default)]
    pub provider: ProviderSettings,

    /// Wanted subtitle languages (ISO 639-1 two-letter codes)
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Settings for the OpenSubDB provider
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderSettings {
    /// Account username
    #[serde(default)]
    pub username: String,

    /// Account password
    #[serde(default)]
    pub password: String,

    /// API key
    #[serde(default)]
    pub api_key: String,

    /// Application name sent as part of outbound client identification
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Service endpoint override; empty selects the public API
    #[serde(default)]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ProviderSettings {
    /// Enforce the all-or-none credential rule
    pub fn validate_credentials(&self) -> Result<(), ConfigError> {
        let provided = [&self.username, &self.password, &self.api_key];
        let any = provided.iter().any(|value| !value.is_empty());
        let all = provided.iter().all(|value| !value.is_empty());

        if any && !all {
            return Err(ConfigError::PartialCredentials);
        }
        Ok(())
    }
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            api_key: String::new(),
            app_name: default_app_name(),
            endpoint: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Log level for the application
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Errors and warnings
    Warn,
    /// Normal output
    #[default]
    Info,
    /// Verbose output
    Debug,
    /// Everything
    Trace,
}

fn default_languages() -> Vec<String> {
    vec!["en".to_string()]
}

fn default_app_name() -> String {
    "subseeker".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: ProviderSettings::default(),
            languages: default_languages(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::Read(e.to_string()))?;

        let config: Config =
            serde_json::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))?;

        std::fs::write(path.as_ref(), content).map_err(|e| ConfigError::Read(e.to_string()))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.provider.validate_credentials()
    }
}
