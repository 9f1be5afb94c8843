//! Chat session client for Sopeng.
//!
//! Relays user messages to an OpenRouter-compatible chat-completion
//! endpoint and keeps the conversation state around that exchange:
//! - Rolling conversation history with a retention bound
//! - Fixed-window client-side rate limiting
//! - One in-flight request per session, enforced structurally
//! - Failure classification into a stable `ErrorKind` taxonomy
//! - Token usage tracking

pub mod error;
pub mod history;
pub mod models;
pub mod openrouter;
pub mod rate_limit;
pub mod session;
pub mod token_tracker;
pub mod transport;

pub use error::{ChatError, ErrorKind};
pub use history::{History, Turn};
pub use models::{available_models, ModelInfo};
pub use openrouter::{GenerationParams, SessionConfig};
pub use rate_limit::RateLimiter;
pub use session::{ChatReply, ChatSession, Phase, SessionStats};
pub use token_tracker::TokenTracker;
pub use transport::{HttpReply, HttpRequest, ReqwestTransport, Transport, TransportError};

/// Author of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A `{role, content}` pair as sent on the wire.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Token accounting reported by the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TokenUsage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub total_tokens: u64,
}

impl TokenUsage {
    /// Total tokens, falling back to prompt + completion when the server
    /// left `total_tokens` out.
    pub fn total(&self) -> u64 {
        if self.total_tokens > 0 {
            self.total_tokens
        } else {
            self.prompt_tokens.saturating_add(self.completion_tokens)
        }
    }
}

/// Shorten `text` to at most `max` characters for log output.
pub(crate) fn preview(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
