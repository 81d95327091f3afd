// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;

/// Load a configuration file from a given path and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; severities are still plain
/// strings. Use [`load_and_validate`] for the checked form.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and validate it.
///
/// Unknown severities are reported as `ConfigError`.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(&path)?;
    let config = ConfigFile::try_from(raw_config)?;
    Ok(config)
}

/// Resolve the config used by the binary.
///
/// - An explicit path must exist and be valid.
/// - Without one, [`default_config_path`] is used if present; otherwise
///   built-in defaults apply.
pub fn resolve(explicit: Option<&Path>) -> Result<ConfigFile> {
    if let Some(path) = explicit {
        return load_and_validate(path);
    }

    let default_path = default_config_path();
    if default_path.is_file() {
        load_and_validate(&default_path)
    } else {
        debug!(path = ?default_path, "no config file found; using defaults");
        Ok(ConfigFile::default())
    }
}

/// `OpLogger.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("OpLogger.toml")
}
