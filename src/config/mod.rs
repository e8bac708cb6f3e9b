//! Configuration management
//!
//! Layered load: `scanlink.toml` (optional, path overridable via
//! `SCANLINK_CONFIG`) then `SCANLINK_*` environment variables, e.g.
//! `SCANLINK_SERVER__PORT=9000` or `SCANLINK_DATABASE__URL=postgres://...`.

mod structs;

use std::sync::OnceLock;

use config::{Config, Environment, File};

use crate::errors::{Result, ScanlinkError};

pub use structs::*;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Load configuration from file + environment
pub fn load_config() -> Result<AppConfig> {
    let config_path =
        std::env::var("SCANLINK_CONFIG").unwrap_or_else(|_| "scanlink.toml".to_string());

    let settings = Config::builder()
        .add_source(File::with_name(config_path.trim_end_matches(".toml")).required(false))
        .add_source(
            Environment::with_prefix("SCANLINK")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .map_err(|e| ScanlinkError::config(format!("Failed to load config: {}", e)))?;

    settings
        .try_deserialize::<AppConfig>()
        .map_err(|e| ScanlinkError::config(format!("Invalid config: {}", e)))
}

/// Initialize the process-wide configuration
///
/// Call once during startup, before anything reads `get_config()`.
pub fn init_config() -> Result<&'static AppConfig> {
    let config = load_config()?;
    Ok(APP_CONFIG.get_or_init(|| config))
}

/// Get the process-wide configuration
///
/// Falls back to defaults when `init_config()` was never called, which keeps
/// library consumers and tests free of global setup.
pub fn get_config() -> &'static AppConfig {
    APP_CONFIG.get_or_init(AppConfig::default)
}
