//! Configuration management for the HSTC note service.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{HstcError, Result};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Note data configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataConfig {
    /// Directory holding chapters.json, en-notes.json and sen-notes.json
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Results returned when the request does not say
    #[serde(default = "default_max_results")]
    pub default_max_results: usize,

    /// Upper bound for a request's maxResults
    #[serde(default = "default_max_results_cap")]
    pub max_results: usize,

    /// Maximum keyword length in characters
    #[serde(default = "default_max_keyword_length")]
    pub max_keyword_length: usize,

    /// Maximum material / function filter length in characters
    #[serde(default = "default_max_filter_length")]
    pub max_filter_length: usize,
}

// Default value functions
fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_max_results() -> usize {
    20
}

fn default_max_results_cap() -> usize {
    100
}

fn default_max_keyword_length() -> usize {
    200
}

fn default_max_filter_length() -> usize {
    500
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_max_results: default_max_results(),
            max_results: default_max_results_cap(),
            max_keyword_length: default_max_keyword_length(),
            max_filter_length: default_max_filter_length(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| HstcError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// This method uses XDG Base Directory specification for file locations.
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. HSTC_CONFIG env var
    /// 2. XDG config file (~/.config/hstc/config.toml)
    /// 3. ./hstc.toml in the working directory
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("HSTC_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("hstc.toml").exists() {
                Self::from_file("hstc.toml")?
            } else {
                Self::default()
            }
        };

        // Use the XDG data directory unless a directory was chosen explicitly
        if env::var("HSTC_DATA_DIR").is_err() && config.data.dir == default_data_dir() {
            config.data.dir = xdg.notes_dir();
        }

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(data_dir) = env::var("HSTC_DATA_DIR") {
            self.data.dir = PathBuf::from(data_dir);
        }

        if let Ok(value) = env::var("HSTC_DEFAULT_MAX_RESULTS") {
            if let Ok(n) = value.parse() {
                self.search.default_max_results = n;
            }
        }
        if let Ok(value) = env::var("HSTC_MAX_RESULTS") {
            if let Ok(n) = value.parse() {
                self.search.max_results = n;
            }
        }
        if let Ok(value) = env::var("HSTC_MAX_KEYWORD_LENGTH") {
            if let Ok(n) = value.parse() {
                self.search.max_keyword_length = n;
            }
        }
        if let Ok(value) = env::var("HSTC_MAX_FILTER_LENGTH") {
            if let Ok(n) = value.parse() {
                self.search.max_filter_length = n;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.search.default_max_results == 0 {
            return Err(HstcError::ConfigError(
                "Default max results must be non-zero".to_string(),
            ));
        }

        if self.search.default_max_results > self.search.max_results {
            return Err(HstcError::ConfigError(
                "Default max results cannot exceed max results".to_string(),
            ));
        }

        if self.search.max_keyword_length == 0 {
            return Err(HstcError::ConfigError(
                "Max keyword length must be non-zero".to_string(),
            ));
        }

        if self.search.max_filter_length == 0 {
            return Err(HstcError::ConfigError(
                "Max filter length must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Data dir: {:?}", self.data.dir);
        tracing::info!(
            "  Default max results: {}",
            self.search.default_max_results
        );
        tracing::info!("  Max results: {}", self.search.max_results);
        tracing::info!(
            "  Max keyword length: {} chars",
            self.search.max_keyword_length
        );
        tracing::info!(
            "  Max filter length: {} chars",
            self.search.max_filter_length
        );
    }
}
