// src/config/file.rs
// File-based configuration from ~/.appium-gestures/config.toml

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Top-level config structure
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct FileConfig {
    #[serde(default)]
    pub server: ServerSection,
}

/// `[server]` section
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct ServerSection {
    /// HTTP transport bind address
    pub bind: Option<String>,
    /// HTTP transport port
    pub port: Option<u16>,
    /// Route the MCP endpoint is mounted on
    pub path: Option<String>,
    /// Log level name (error/warn/info/debug/trace)
    pub log_level: Option<String>,
}

impl FileConfig {
    /// Load config from ~/.appium-gestures/config.toml
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from an explicit path; missing or malformed files yield defaults
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    debug!(path = %path.display(), "Loaded config from file");
                    config
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to parse config file");
                    Self::default()
                }
            },
            Err(_) => {
                debug!(path = %path.display(), "Config file not found, using defaults");
                Self::default()
            }
        }
    }

    /// Get the config file path
    pub fn config_path() -> PathBuf {
        super::config_dir().join("config.toml")
    }
}
