// src/config/loader.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::model::ManagerConfig;
use crate::errors::Result;

/// Parse a configuration from TOML text. Missing keys take their defaults.
pub fn from_toml_str(contents: &str) -> Result<ManagerConfig> {
    let config: ManagerConfig = toml::from_str(contents)?;
    Ok(config)
}

/// Read and parse a TOML configuration file.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ManagerConfig> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config = from_toml_str(&contents)?;
    debug!(?path, ?config, "loaded manager config");
    Ok(config)
}
