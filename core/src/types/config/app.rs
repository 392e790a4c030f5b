use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// User-facing application configuration, persisted as config.toml.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default)]
    pub search: SearchSettings,
}

impl AppConfig {
    /// Returns the config file path within the given data directory.
    pub fn path(data_dir: &Path) -> std::path::PathBuf {
        data_dir.join("config.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, AppConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), AppConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.search.result_limit == 0 {
            errors.push("result_limit must be at least 1".to_string());
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = Self::default();
        Self {
            search: SearchSettings {
                result_limit: if self.search.result_limit == 0 {
                    defaults.search.result_limit
                } else {
                    self.search.result_limit
                },
                debounce_interval_ms: self.search.debounce_interval_ms,
            },
        }
    }
}

/// Search ranking and input pacing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Maximum number of ranked records shown for a non-empty query.
    #[serde(default = "default_result_limit")]
    pub result_limit: usize,
    /// Idle time after the last keystroke before a query is submitted.
    /// Zero submits on every keystroke.
    #[serde(default)]
    pub debounce_interval_ms: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            result_limit: default_result_limit(),
            debounce_interval_ms: 0,
        }
    }
}

fn default_result_limit() -> usize {
    10
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
