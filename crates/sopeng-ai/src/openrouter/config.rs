//! Session configuration.

use std::fmt;

use sopeng_common::defaults::{self, PLACEHOLDER_API_KEY};
use sopeng_common::ErrorMessages;

/// Tokens this short or shorter are treated as placeholders.
pub const MIN_TOKEN_LEN: usize = 20;

/// Sampling controls sent with every request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub max_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
    pub frequency_penalty: f64,
    pub presence_penalty: f64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_tokens: defaults::MAX_TOKENS,
            temperature: defaults::TEMPERATURE,
            top_p: defaults::TOP_P,
            frequency_penalty: defaults::FREQUENCY_PENALTY,
            presence_penalty: defaults::PRESENCE_PENALTY,
        }
    }
}

/// Everything a session needs; fixed for the session's lifetime.
#[derive(Clone)]
pub struct SessionConfig {
    pub endpoint: String,
    pub token: String,
    pub model: String,
    pub system_prompt: String,
    pub generation: GenerationParams,
    /// Requests admitted per 60-second window.
    pub rate_limit: u32,
    /// Turns retained in history.
    pub history_len: usize,
    /// Sent as `HTTP-Referer`.
    pub app_url: String,
    /// Sent as `X-Title`.
    pub app_name: String,
    pub messages: ErrorMessages,
}

impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfig")
            .field("endpoint", &self.endpoint)
            .field("token", &"[REDACTED]")
            .field("model", &self.model)
            .field("generation", &self.generation)
            .field("rate_limit", &self.rate_limit)
            .field("history_len", &self.history_len)
            .field("app_url", &self.app_url)
            .field("app_name", &self.app_name)
            .finish_non_exhaustive()
    }
}

impl SessionConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            endpoint: defaults::ENDPOINT.to_string(),
            token: token.into(),
            model: defaults::MODEL_ID.to_string(),
            system_prompt: String::new(),
            generation: GenerationParams::default(),
            rate_limit: defaults::MESSAGES_PER_MINUTE,
            history_len: defaults::HISTORY_LENGTH,
            app_url: defaults::APP_URL.to_string(),
            app_name: defaults::APP_NAME.to_string(),
            messages: ErrorMessages::default(),
        }
    }

    /// True when the token looks like a real key: present, not the
    /// placeholder, and longer than [`MIN_TOKEN_LEN`] characters.
    pub fn is_configured(&self) -> bool {
        !self.token.is_empty()
            && self.token != PLACEHOLDER_API_KEY
            && self.token.chars().count() > MIN_TOKEN_LEN
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    pub fn with_generation(mut self, generation: GenerationParams) -> Self {
        self.generation = generation;
        self
    }

    pub fn with_rate_limit(mut self, per_minute: u32) -> Self {
        self.rate_limit = per_minute;
        self
    }

    pub fn with_history_len(mut self, len: usize) -> Self {
        self.history_len = len;
        self
    }

    pub fn with_app(mut self, url: impl Into<String>, name: impl Into<String>) -> Self {
        self.app_url = url.into();
        self.app_name = name.into();
        self
    }

    pub fn with_messages(mut self, messages: ErrorMessages) -> Self {
        self.messages = messages;
        self
    }
}
