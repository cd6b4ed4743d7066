//! TOML-backed configuration repository.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use genie_core::GenieError;
use genie_core::config::{ConfigRepository, GenieConfig};

use crate::paths::GeniePaths;

/// Stores [`GenieConfig`] in a single TOML file.
#[derive(Debug, Clone)]
pub struct TomlConfigRepository {
    path: PathBuf,
}

impl TomlConfigRepository {
    /// Uses the default config file location.
    pub fn new() -> Result<Self, GenieError> {
        let path = GeniePaths::config_file().map_err(|e| GenieError::config(e.to_string()))?;
        Ok(Self { path })
    }

    /// Uses an explicit file path (tests, `--config`).
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ConfigRepository for TomlConfigRepository {
    async fn load(&self) -> Result<GenieConfig, GenieError> {
        if !tokio::fs::try_exists(&self.path).await? {
            tracing::debug!(path = %self.path.display(), "No config file, using defaults");
            return Ok(GenieConfig::default());
        }

        let content = tokio::fs::read_to_string(&self.path).await?;
        if content.trim().is_empty() {
            return Ok(GenieConfig::default());
        }

        let config = GenieConfig::from_toml(&content)?;
        tracing::debug!(path = %self.path.display(), "Loaded config");
        Ok(config)
    }

    async fn save(&self, config: &GenieConfig) -> Result<(), GenieError> {
        config.validate()?;
        let content = config.to_toml()?;

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        // Write beside the target, then rename over it.
        let tmp_path = self.path.with_extension("toml.tmp");
        tokio::fs::write(&tmp_path, content).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;

        tracing::info!(path = %self.path.display(), "Saved config");
        Ok(())
    }
}
