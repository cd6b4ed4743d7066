//! Configuration service implementation.
//!
//! Loads the root configuration through a [`ConfigRepository`] and caches it
//! so front ends can read it repeatedly without touching the disk.

use std::sync::Arc;

use genie_core::GenieError;
use genie_core::config::{ConfigRepository, GenieConfig};
use tokio::sync::RwLock;

/// Configuration service that loads and caches the root configuration.
#[derive(Clone)]
pub struct ConfigService {
    repository: Arc<dyn ConfigRepository>,
    /// Cached configuration, filled on first access.
    config: Arc<RwLock<Option<GenieConfig>>>,
}

impl ConfigService {
    /// Creates a new ConfigService.
    ///
    /// The configuration is loaded lazily on first access.
    pub fn new(repository: Arc<dyn ConfigRepository>) -> Self {
        Self {
            repository,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the configuration, loading it if not cached.
    ///
    /// A file that cannot be read or parsed is reported and replaced by the
    /// defaults; the session always starts.
    pub async fn get_config(&self) -> GenieConfig {
        if let Some(cached) = self.config.read().await.as_ref() {
            return cached.clone();
        }

        let loaded = match self.repository.load().await {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config, using defaults: {}", e);
                GenieConfig::default()
            }
        };

        *self.config.write().await = Some(loaded.clone());
        loaded
    }

    /// Loads the configuration, surfacing errors instead of falling back.
    pub async fn load_strict(&self) -> Result<GenieConfig, GenieError> {
        let loaded = self.repository.load().await?;
        *self.config.write().await = Some(loaded.clone());
        Ok(loaded)
    }

    /// Saves the configuration and refreshes the cache.
    pub async fn save(&self, config: GenieConfig) -> Result<(), GenieError> {
        self.repository.save(&config).await?;
        *self.config.write().await = Some(config);
        Ok(())
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub async fn invalidate_cache(&self) {
        *self.config.write().await = None;
    }
}
