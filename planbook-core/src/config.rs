//! Global planbook configuration.

use std::path::PathBuf;

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::constants::{CALENDAR_FILE, USERS_FILE};
use crate::error::{Error, Result};

static DEFAULT_DATA_DIR: &str = "~/planbook";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

/// Global configuration at ~/.config/planbook/config.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Where the calendar document and the user directory live.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Username recorded by `planbook login`; new events default to this
    /// owner.
    pub current_user: Option<String>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        GlobalConfig {
            data_dir: default_data_dir(),
            current_user: None,
        }
    }
}

impl GlobalConfig {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("could not determine config directory".into()))?
            .join("planbook");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config; a missing file yields the defaults.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        let config: GlobalConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| Error::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| Error::Config(e.to_string()))?;

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// The data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();
        PathBuf::from(expanded)
    }

    pub fn calendar_path(&self) -> PathBuf {
        self.data_path().join(CALENDAR_FILE)
    }

    pub fn users_path(&self) -> PathBuf {
        self.data_path().join(USERS_FILE)
    }
}
