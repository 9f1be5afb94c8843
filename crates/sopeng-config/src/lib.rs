//! Sopeng configuration system.
//!
//! Provides TOML-based configuration for the chat client with full
//! validation. All config sections use defaults so partial configs work
//! out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sopeng_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config.model.display_name);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    ApiConfig, ChatConfig, LimitsConfig, LogLevel, LoggingConfig, ModelConfig, PromptConfig,
    API_KEY_ENV, CONFIG_SCHEMA_VERSION, PLACEHOLDER_API_KEY,
};
pub use toml_loader::{create_default_config, default_config_path, load_from_path};

use sopeng_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path.
///
/// Creates a default `config.toml` if none exists and applies
/// environment overrides. Validation problems are logged, not fatal.
pub fn load_config() -> Result<ChatConfig, ConfigError> {
    let mut config = toml_loader::load_default()?;
    toml_loader::apply_env_overrides(&mut config);
    Ok(config)
}

/// Load config from an explicit path and apply environment overrides.
pub fn load_config_from(path: &Path) -> Result<ChatConfig, ConfigError> {
    let mut config = toml_loader::load_from_path(path)?;
    toml_loader::apply_env_overrides(&mut config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let mut config = ChatConfig::default();
        config.api.key = "sk-or-v1-super-secret-value-1234".into();
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = ChatConfig::default();
        let text = toml::to_string(&config).unwrap();
        let parsed: ChatConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.model.id, config.model.id);
        assert_eq!(parsed.prompt.system, config.prompt.system);
        assert_eq!(parsed.messages, config.messages);
        assert_eq!(parsed.logging.level, LogLevel::Info);
    }
}
