//! Configuration file loading with environment variable overrides.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Default picture service endpoint; the caption is appended to it.
pub const DEFAULT_BASE_URL: &str = "https://cataas.com/cat/says/";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Picture service configuration.
    #[serde(default)]
    pub service: ServiceConfig,
}

/// Picture service configuration.
#[derive(Debug, Default, Deserialize)]
pub struct ServiceConfig {
    /// Base URL the caption is appended to.
    pub base_url: Option<String>,
}

impl Config {
    /// Load configuration from the given path, or return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
        toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
    }

    /// Get the service base URL, preferring the environment variable.
    #[must_use]
    pub fn base_url(&self) -> String {
        std::env::var("CATCARD_BASE_URL")
            .ok()
            .or_else(|| self.service.base_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }
}

/// Discover the config file path using the resolution order:
/// 1. Explicit path (from `--config` flag)
/// 2. `CATCARD_CONFIG` environment variable
/// 3. `~/.config/cat-card/config.toml`
#[must_use]
pub fn discover_config_path(explicit: Option<&str>) -> PathBuf {
    if let Some(p) = explicit {
        return PathBuf::from(p);
    }

    if let Ok(p) = std::env::var("CATCARD_CONFIG") {
        return PathBuf::from(p);
    }

    default_config_path()
}

fn default_config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".config/cat-card/config.toml")
    } else {
        PathBuf::from("cat-card.toml")
    }
}
