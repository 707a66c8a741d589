//! File system locations and configuration persistence.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub mod config;

pub use config::{Config, PersistedConfig, load_config};

/// Holds all articlehub-related paths derived from a base directory.
///
/// Tests inject a temporary base directory; production uses the current
/// working directory.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use articlehub::fs::AppPaths;
///
/// let paths = AppPaths::new(Path::new("/tmp/test"));
/// assert_eq!(paths.config_file(), Path::new("/tmp/test/.articlehub/config.json"));
/// ```
#[derive(Debug, Clone)]
pub struct AppPaths {
    base: PathBuf,
}

impl AppPaths {
    /// Creates paths rooted at the given base directory.
    #[must_use]
    pub fn new(base: &Path) -> Self {
        Self {
            base: base.to_path_buf(),
        }
    }

    /// Creates paths rooted at the current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn from_cwd() -> Result<Self> {
        let base = std::env::current_dir().context("Failed to get current directory")?;
        Ok(Self { base })
    }

    /// Returns the base directory.
    #[must_use]
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Returns the `.articlehub` directory path.
    #[must_use]
    pub fn app_dir(&self) -> PathBuf {
        self.base.join(".articlehub")
    }

    /// Returns the config file path.
    #[must_use]
    pub fn config_file(&self) -> PathBuf {
        self.app_dir().join("config.json")
    }

    /// Returns the default log file path.
    #[must_use]
    pub fn log_file(&self) -> PathBuf {
        self.app_dir().join("articlehub.log")
    }
}
