use std::sync::Arc;

use anyhow::{Context, Result};
use genie_core::config::{ConfigRepository, GenieConfig};
use genie_infrastructure::{ConfigService, GeniePaths, TomlConfigRepository};

fn repository() -> Result<TomlConfigRepository> {
    TomlConfigRepository::new().context("Failed to locate config file")
}

pub async fn show() -> Result<()> {
    let service = ConfigService::new(Arc::new(repository()?));
    let config = service
        .load_strict()
        .await
        .context("Failed to load config file")?;
    print!("{}", config.to_toml()?);
    Ok(())
}

pub fn path() -> Result<()> {
    let path = GeniePaths::config_file().context("Failed to locate config file")?;
    println!("{}", path.display());
    Ok(())
}

pub async fn init(force: bool) -> Result<()> {
    let repository = repository()?;
    if repository.path().exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            repository.path().display()
        );
    }

    repository
        .save(&GenieConfig::default())
        .await
        .with_context(|| format!("Failed to write {}", repository.path().display()))?;

    println!("✅ Wrote default config to {}", repository.path().display());
    Ok(())
}
