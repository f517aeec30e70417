//! Server configuration, loaded from an optional TOML file.

use std::path::Path;

use serde::Deserialize;

/// Storage section of the server config.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory for the SQLite database file.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

fn default_data_dir() -> String {
    "data".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Server configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerConfig {
    /// Listen address. Overridden by `--listen`.
    #[serde(default)]
    pub listen: Option<String>,

    #[serde(default)]
    pub storage: StorageConfig,
}

impl ServerConfig {
    /// Load config from disk, or return defaults if no path was given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path)?;
        let config: ServerConfig = toml::from_str(&content)?;
        Ok(config)
    }
}
