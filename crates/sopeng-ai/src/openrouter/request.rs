//! Outbound request assembly.

use crate::history::Turn;
use crate::transport::HttpRequest;
use crate::{Message, Role};

use super::config::SessionConfig;

/// Build the chat-completion POST for the given history.
///
/// The system prompt is prepended fresh on every call; it is never part
/// of the history itself.
pub fn build_request<'a>(
    config: &SessionConfig,
    history: impl IntoIterator<Item = &'a Turn>,
) -> HttpRequest {
    let mut messages = vec![Message::new(Role::System, config.system_prompt.clone())];
    messages.extend(history.into_iter().map(Turn::to_message));

    let generation = &config.generation;
    let body = serde_json::json!({
        "model": config.model,
        "messages": messages,
        "max_tokens": generation.max_tokens,
        "temperature": generation.temperature,
        "top_p": generation.top_p,
        "frequency_penalty": generation.frequency_penalty,
        "presence_penalty": generation.presence_penalty,
    });

    HttpRequest {
        url: config.endpoint.clone(),
        headers: vec![
            ("Content-Type".into(), "application/json".into()),
            ("Authorization".into(), format!("Bearer {}", config.token)),
            ("HTTP-Referer".into(), config.app_url.clone()),
            ("X-Title".into(), config.app_name.clone()),
        ],
        body,
    }
}
