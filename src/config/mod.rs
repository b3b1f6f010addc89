mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use std::path::Path;
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads the startup configuration.
///
/// An explicit `CONFIG_PATH` must point at a readable YAML file. Without it,
/// `config.yaml` is used when present and built-in defaults otherwise.
/// Environment overrides are applied last.
pub async fn load() -> Result<Config> {
    let config = match env::var("CONFIG_PATH") {
        Ok(path) => from_file(&path).await?,
        Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => from_file(DEFAULT_CONFIG_PATH).await?,
        Err(_) => {
            debug!("No configuration file found, using defaults");
            Config::default()
        }
    };

    apply_overrides(config, |key| env::var(key).ok())
}

pub async fn from_file(path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", path);

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

/// Applies `ALLOWED_ORIGIN`, `PORT`, `HOST` and `LOG_LEVEL` on top of `config`.
pub fn apply_overrides<F>(mut config: Config, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(origin) = lookup("ALLOWED_ORIGIN") {
        config.cors.allowed_origin = origin;
    }

    if let Some(port) = lookup("PORT") {
        config.server.port = port
            .trim()
            .parse()
            .map_err(|_| Error::config(format!("PORT must be a valid port number, got '{}'", port)))?;
    }

    if let Some(host) = lookup("HOST") {
        config.server.host = host;
    }

    if let Some(level) = lookup("LOG_LEVEL") {
        config.server.logs.level = level;
    }

    Ok(config)
}
