//! Config loading and session construction for the binary.

use std::path::Path;
use std::sync::Arc;

use sopeng_ai::{ChatSession, GenerationParams, ReqwestTransport, SessionConfig, TransportError};
use sopeng_common::ConfigError;
use sopeng_config::ChatConfig;

/// Load config from `path`, or from the platform default location.
pub fn load(path: Option<&Path>) -> Result<ChatConfig, ConfigError> {
    match path {
        Some(p) => sopeng_config::load_config_from(p),
        None => sopeng_config::load_config(),
    }
}

/// Translate the file config into a session config.
pub fn session_config(config: &ChatConfig, model_override: Option<&str>) -> SessionConfig {
    let model = config.model.clone();
    SessionConfig::new(config.api.key.clone())
        .with_endpoint(config.api.url.clone())
        .with_model(model_override.unwrap_or(&model.id))
        .with_system_prompt(config.prompt.system.clone())
        .with_generation(GenerationParams {
            max_tokens: model.max_tokens,
            temperature: model.temperature,
            top_p: model.top_p,
            frequency_penalty: model.frequency_penalty,
            presence_penalty: model.presence_penalty,
        })
        .with_rate_limit(config.limits.max_messages_per_minute)
        .with_history_len(config.limits.max_history_length)
        .with_app(config.api.app_url.clone(), config.api.app_name.clone())
        .with_messages(config.messages.clone())
}

/// Name to show for the active model: the configured display name for
/// the configured model, the catalog name for a known override, or the id.
pub fn display_name(config: &ChatConfig, model_id: &str) -> String {
    if model_id == config.model.id {
        return config.model.display_name.clone();
    }
    sopeng_ai::models::find_model(model_id)
        .map(|m| m.name.to_string())
        .unwrap_or_else(|| model_id.to_string())
}

pub fn build_session(
    config: &ChatConfig,
    model_override: Option<&str>,
) -> Result<ChatSession, TransportError> {
    let transport = Arc::new(ReqwestTransport::new()?);
    Ok(ChatSession::new(
        session_config(config, model_override),
        transport,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_config_carries_every_field() {
        let mut config = ChatConfig::default();
        config.api.key = "sk-or-v1-0123456789abcdef0123456789".into();
        config.model.temperature = 1.2;
        config.limits.max_history_length = 6;
        config.messages.busy = "wait".into();

        let session = session_config(&config, None);
        assert_eq!(session.token, config.api.key);
        assert_eq!(session.endpoint, config.api.url);
        assert_eq!(session.model, "minimax/minimax-m2:free");
        assert_eq!(session.system_prompt, config.prompt.system);
        assert_eq!(session.generation.temperature, 1.2);
        assert_eq!(session.generation.max_tokens, 2000);
        assert_eq!(session.rate_limit, 10);
        assert_eq!(session.history_len, 6);
        assert_eq!(session.app_name, "Sopeng.ai");
        assert_eq!(session.messages.busy, "wait");
        assert!(session.is_configured());
    }

    #[test]
    fn file_defaults_match_session_defaults() {
        let config = ChatConfig::default();
        let from_file = session_config(&config, None);
        let direct = SessionConfig::new(config.api.key.clone());
        assert_eq!(config.api.key, sopeng_config::PLACEHOLDER_API_KEY);
        assert_eq!(from_file.endpoint, direct.endpoint);
        assert_eq!(from_file.model, direct.model);
        assert_eq!(from_file.generation, direct.generation);
        assert_eq!(from_file.rate_limit, direct.rate_limit);
        assert_eq!(from_file.history_len, direct.history_len);
        assert_eq!(from_file.app_url, direct.app_url);
        assert_eq!(from_file.app_name, direct.app_name);
    }

    #[test]
    fn model_override_wins() {
        let config = ChatConfig::default();
        let session = session_config(&config, Some("anthropic/claude-3-haiku"));
        assert_eq!(session.model, "anthropic/claude-3-haiku");
    }

    #[test]
    fn default_config_is_not_configured() {
        let session = session_config(&ChatConfig::default(), None);
        assert!(!session.is_configured());
    }

    #[test]
    fn display_names() {
        let config = ChatConfig::default();
        assert_eq!(display_name(&config, "minimax/minimax-m2:free"), "Sopeng v2.1");
        assert_eq!(display_name(&config, "anthropic/claude-3-haiku"), "Claude 3 Haiku");
        assert_eq!(display_name(&config, "someone/custom"), "someone/custom");
    }

    #[test]
    fn load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[model]\nid = \"openai/gpt-3.5-turbo\"\n").unwrap();
        let config = load(Some(&path)).unwrap();
        assert_eq!(config.model.id, "openai/gpt-3.5-turbo");
    }
}
