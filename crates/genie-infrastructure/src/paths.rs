//! Path management for Travel Genie configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/travel-genie/      # Config directory (platform config dir)
//! └── config.toml              # Timings, initial karma, rule set
//! ```
//!
//! Only configuration lives on disk; conversation state is never persisted.

use std::path::PathBuf;

/// Application directory name under the platform config directory.
pub const APP_DIR_NAME: &str = "travel-genie";

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "GENIE_CONFIG";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Path resolution for Travel Genie.
pub struct GeniePaths;

impl GeniePaths {
    /// Returns the Travel Genie configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/travel-genie/`)
    /// - `Err(PathError::ConfigDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to the configuration file.
    ///
    /// `GENIE_CONFIG` takes precedence over the platform location.
    pub fn config_file() -> Result<PathBuf, PathError> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }
        Ok(Self::config_dir()?.join("config.toml"))
    }
}
