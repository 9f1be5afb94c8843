//! Core TOML config loading: read from path or platform default.

use crate::schema::{ChatConfig, API_KEY_ENV};
use crate::validation;
use sopeng_common::ConfigError;
use std::path::Path;
use tracing::{debug, info, warn};

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// After loading, the config is validated; if validation fails, a warning
/// is logged and the parsed config is returned as-is.
pub fn load_from_path(path: &Path) -> Result<ChatConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: ChatConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e} - using parsed config with potentially invalid values");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/sopeng/config.toml`
/// On Linux: `~/.config/sopeng/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<ChatConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(ChatConfig::default())
        }
        Err(e) => Err(e),
    }
}

/// Apply environment overrides (`OPENROUTER_API_KEY`) on top of a loaded config.
pub fn apply_env_overrides(config: &mut ChatConfig) {
    apply_key_override(config, std::env::var(API_KEY_ENV).ok());
}

pub(crate) fn apply_key_override(config: &mut ChatConfig, key: Option<String>) {
    match key {
        Some(key) if !key.trim().is_empty() => {
            debug!("api key taken from {API_KEY_ENV}");
            config.api.key = key.trim().to_string();
        }
        _ => {}
    }
}
