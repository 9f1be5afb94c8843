//! Async send cycle for ChatSession.

use std::time::Instant;

use chrono::Utc;
use tracing::{debug, warn};

use crate::history::Turn;
use crate::openrouter::{build_request, classify_status, parse_completion};
use crate::transport::TransportError;
use crate::{preview, ChatError, Role};

use super::manager::{push_turn, ChatSession};
use super::types::{lock, ChatReply, SendGuard};

impl ChatSession {
    /// Send a user message and return the assistant's reply.
    ///
    /// The user turn is recorded before the request goes out and stays in
    /// history even if the request fails.
    pub async fn send_message(&self, user_text: impl Into<String>) -> Result<ChatReply, ChatError> {
        let guard = SendGuard::acquire(&self.state, &self.config.messages.busy)?;
        let result = self.exchange(user_text.into()).await;
        if let Err(e) = &result {
            warn!(session = %self.id.short(), kind = ?e.kind(), "chat request failed: {e}");
        }
        guard.finish(&result);
        result
    }

    /// Send a fixed greeting; true if a reply came back.
    pub async fn test_connection(&self) -> bool {
        match self.send_message("Hello").await {
            Ok(_) => true,
            Err(e) => {
                debug!(session = %self.id.short(), "connection test failed: {e}");
                false
            }
        }
    }

    async fn exchange(&self, user_text: String) -> Result<ChatReply, ChatError> {
        let messages = &self.config.messages;

        if !self.is_configured() {
            return Err(ChatError::NotConfigured(messages.not_configured.clone()));
        }

        if !self.check_rate_limit() {
            return Err(ChatError::RateLimited {
                message: messages.rate_limited.clone(),
                remote: false,
            });
        }

        let request = {
            let mut state = lock(&self.state);
            state.last_request_at = Some(Utc::now());
            push_turn(&self.id, &mut state, Turn::new(Role::User, user_text.as_str()));
            build_request(&self.config, state.history.iter())
        };

        debug!(
            session = %self.id.short(),
            model = %self.config.model,
            message_count = request.body["messages"].as_array().map_or(0, Vec::len),
            "sending chat request: {}",
            preview(&user_text, 50)
        );

        let started = Instant::now();
        let reply = self
            .transport
            .post_json(&request)
            .await
            .map_err(|e| match e {
                TransportError::Connect(_) => ChatError::Network {
                    message: messages.network.clone(),
                    source: e,
                },
                other => ChatError::Transport(other),
            })?;
        let response_time = started.elapsed();

        if !reply.is_success() {
            return Err(classify_status(reply.status, &reply.body, messages));
        }

        let completion = parse_completion(&reply.body, messages)?;
        let model = completion
            .model
            .clone()
            .unwrap_or_else(|| self.config.model.clone());

        {
            let mut state = lock(&self.state);
            push_turn(
                &self.id,
                &mut state,
                Turn::new(Role::Assistant, completion.content.as_str()),
            );
            if let Some(usage) = &completion.usage {
                state.tracker.record(&model, usage);
            }
        }

        debug!(
            session = %self.id.short(),
            elapsed_ms = response_time.as_millis() as u64,
            usage = ?completion.usage,
            "chat response received"
        );

        Ok(ChatReply {
            message: completion.content,
            model,
            usage: completion.usage,
            response_time,
        })
    }
}
