// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tokio::fs;

use recurcal_core::{APP_NAME, Config as CoreConfig};

const RECURCAL_CONFIG_ENV: &str = "RECURCAL_CONFIG";

/// Loads the configuration from `path`, `$RECURCAL_CONFIG`, or the default
/// location, in that order.
///
/// A missing file at the default location yields the default configuration,
/// while a missing file given explicitly is an error.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(RECURCAL_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            tracing::debug!(path = %config.display(), "no config found, using defaults");
            return Ok(Config::default());
        }
        config
    };

    let mut config = fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<Config>()
        .map_err(|e| format!("Failed to parse config file at {}: {}", path.display(), e))?;
    config.core.normalize();
    Ok(config)
}

/// Configuration for the recurcal application.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
pub struct Config {
    /// Settings of the expansion engine and grid renderer.
    #[serde(default)]
    pub core: CoreConfig,
}

impl FromStr for Config {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_local_dir();
    config_dir.ok_or_else(|| "User-specific home directory not found".into())
}
