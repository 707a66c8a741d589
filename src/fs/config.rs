//! Config file loading and layering.
//!
//! Settings live in `.articlehub/config.json`. Every field is optional; the
//! effective [`Config`] layers command-line values over the file over the
//! built-in defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::AppPaths;
use crate::core::DEFAULT_API_URL;

/// Contents of the config file.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct PersistedConfig {
    /// Backend base URL (e.g. `http://127.0.0.1:5000/`).
    #[serde(default)]
    pub api_url: Option<String>,
    /// Where to write logs.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

/// Effective configuration after layering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Backend base URL.
    pub api_url: String,
    /// Log file path.
    pub log_file: PathBuf,
}

impl Config {
    /// Resolves the effective configuration.
    ///
    /// Precedence, highest first: the explicit overrides (command line or
    /// environment), the persisted file, the defaults.
    #[must_use]
    pub fn resolve(
        api_url: Option<&str>,
        log_file: Option<&Path>,
        persisted: &PersistedConfig,
        paths: &AppPaths,
    ) -> Self {
        let api_url = api_url
            .map(str::to_string)
            .or_else(|| persisted.api_url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let log_file = log_file
            .map(Path::to_path_buf)
            .or_else(|| persisted.log_file.clone())
            .unwrap_or_else(|| paths.log_file());

        Self { api_url, log_file }
    }
}

/// Loads the config file.
///
/// A missing file yields the defaults.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<PersistedConfig> {
    if !path.exists() {
        return Ok(PersistedConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}
