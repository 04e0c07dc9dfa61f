//! Application settings read from the environment (and `.env` via `dotenvy`).

use crate::errors::{Error, Result};
use std::path::PathBuf;
use tracing::info;

/// Runtime settings. The bot token is not stored here; it is read
/// right before the client starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Catalog override; the bundled catalog is used when absent
    pub catalog_path: Option<PathBuf>,
    /// Register commands in this guild only (instant updates while developing)
    pub dev_guild_id: Option<u64>,
}

impl AppConfig {
    /// Reads `CATALOG_PATH` and `DEV_GUILD_ID`.
    ///
    /// # Errors
    /// Returns `Error::Config` if `DEV_GUILD_ID` is set but is not a number.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the settings from an arbitrary key lookup, so tests need not touch
    /// the process environment.
    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let catalog_path = lookup("CATALOG_PATH")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let dev_guild_id = lookup("DEV_GUILD_ID")
            .filter(|value| !value.trim().is_empty())
            .map(|value| {
                value.trim().parse::<u64>().map_err(|e| Error::Config {
                    message: format!("DEV_GUILD_ID must be a numeric guild id: {e}"),
                })
            })
            .transpose()?;

        Ok(Self {
            catalog_path,
            dev_guild_id,
        })
    }
}

/// Loads the application configuration, logging what was picked up.
///
/// # Errors
/// Propagates `AppConfig::from_env` failures.
pub fn load_app_configuration() -> Result<AppConfig> {
    let config = AppConfig::from_env()?;
    match &config.catalog_path {
        Some(path) => info!("Using catalog file {}", path.display()),
        None => info!("Using bundled catalog"),
    }
    if let Some(guild_id) = config.dev_guild_id {
        info!("Commands will be registered in guild {guild_id} only");
    }
    Ok(config)
}
