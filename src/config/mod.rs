// src/config/mod.rs

//! TOML configuration for the operation logger.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path, resolve};
pub use model::{ConfigFile, LoggerConfig, RawConfigFile, RawLoggerSection};
