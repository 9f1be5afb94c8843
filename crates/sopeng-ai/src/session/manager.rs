//! ChatSession struct, history management, and read-only queries.

use std::sync::{Arc, Mutex};

use sopeng_common::SessionId;
use tracing::debug;

use crate::history::{History, Turn};
use crate::openrouter::SessionConfig;
use crate::rate_limit::RateLimiter;
use crate::token_tracker::TokenTracker;
use crate::transport::Transport;
use crate::{preview, Role};

use super::types::{lock, Phase, SessionState, SessionStats};

/// One conversation with the completion endpoint.
///
/// All methods take `&self`; the session can be shared behind an `Arc`
/// and still only ever has one request in flight.
pub struct ChatSession {
    pub(super) id: SessionId,
    pub(super) config: SessionConfig,
    pub(super) transport: Arc<dyn Transport>,
    pub(super) state: Mutex<SessionState>,
}

impl ChatSession {
    pub fn new(config: SessionConfig, transport: Arc<dyn Transport>) -> Self {
        let state = SessionState {
            phase: Phase::Idle,
            history: History::new(config.history_len),
            limiter: RateLimiter::new(config.rate_limit),
            tracker: TokenTracker::new(),
            last_request_at: None,
        };
        let id = SessionId::new();
        debug!(session = %id.short(), model = %config.model, "chat session created");
        Self {
            id,
            config,
            transport,
            state: Mutex::new(state),
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    /// Admit one request under the fixed-window limit.
    pub fn check_rate_limit(&self) -> bool {
        lock(&self.state).limiter.check()
    }

    pub fn reset_rate_limit(&self) {
        lock(&self.state).limiter.reset();
        debug!(session = %self.id.short(), "rate limit counter reset");
    }

    pub fn add_to_history(&self, role: Role, content: impl Into<String>) {
        let mut state = lock(&self.state);
        push_turn(&self.id, &mut state, Turn::new(role, content));
    }

    pub fn clear_history(&self) {
        lock(&self.state).history.clear();
        debug!(session = %self.id.short(), "conversation history cleared");
    }

    /// Snapshot of the retained turns, oldest first.
    pub fn history(&self) -> Vec<Turn> {
        lock(&self.state).history.to_vec()
    }

    /// History as a pretty-printed JSON array.
    pub fn export_history(&self) -> String {
        lock(&self.state).history.export_json()
    }

    pub fn phase(&self) -> Phase {
        lock(&self.state).phase
    }

    pub fn stats(&self) -> SessionStats {
        let state = lock(&self.state);
        SessionStats {
            message_count: state.history.len(),
            request_count: state.limiter.count(),
            last_request_at: state.last_request_at,
            in_flight: state.phase == Phase::Sending,
            last_error: match state.phase {
                Phase::Failed(kind) => Some(kind),
                _ => None,
            },
            usage: *state.tracker.total(),
            completions: state.tracker.call_count(),
            usage_by_model: state.tracker.per_model(),
        }
    }
}

pub(super) fn push_turn(id: &SessionId, state: &mut SessionState, turn: Turn) {
    let role = turn.role;
    let text = preview(&turn.content, 50);
    let dropped = state.history.push(turn);
    debug!(
        session = %id.short(),
        role = role.as_str(),
        len = state.history.len(),
        max = state.history.max_len(),
        dropped,
        "added to history: {text}"
    );
}
