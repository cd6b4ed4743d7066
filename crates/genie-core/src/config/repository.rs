//! Configuration repository trait.

use async_trait::async_trait;

use super::model::GenieConfig;
use crate::GenieError;

/// Repository trait for configuration persistence.
#[async_trait]
pub trait ConfigRepository: Send + Sync {
    /// Loads the configuration.
    /// Returns the default config if none exists.
    async fn load(&self) -> Result<GenieConfig, GenieError>;

    /// Saves the configuration.
    async fn save(&self, config: &GenieConfig) -> Result<(), GenieError>;
}
