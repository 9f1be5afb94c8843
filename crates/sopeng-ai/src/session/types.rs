//! Session state, results, and the in-flight guard.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::history::History;
use crate::rate_limit::RateLimiter;
use crate::token_tracker::TokenTracker;
use crate::{ChatError, ErrorKind, TokenUsage};

/// Where the session is in its send cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Sending,
    /// Last send failed; accepts new sends like `Idle`.
    Failed(ErrorKind),
}

/// Result of a successful exchange.
#[derive(Debug, Clone)]
pub struct ChatReply {
    pub message: String,
    /// Model the server reports having used.
    pub model: String,
    pub usage: Option<TokenUsage>,
    pub response_time: Duration,
}

/// Snapshot of session counters.
#[derive(Debug, Clone)]
pub struct SessionStats {
    pub message_count: usize,
    /// Requests admitted in the current rate-limit window.
    pub request_count: u32,
    pub last_request_at: Option<DateTime<Utc>>,
    pub in_flight: bool,
    pub last_error: Option<ErrorKind>,
    pub usage: TokenUsage,
    /// Completions that reported token usage.
    pub completions: u64,
    /// Usage per reported model, sorted by model name.
    pub usage_by_model: Vec<(String, TokenUsage)>,
}

/// Mutable state of one session, always accessed under its mutex.
pub(crate) struct SessionState {
    pub(crate) phase: Phase,
    pub(crate) history: History,
    pub(crate) limiter: RateLimiter,
    pub(crate) tracker: TokenTracker,
    pub(crate) last_request_at: Option<DateTime<Utc>>,
}

pub(crate) fn lock(state: &Mutex<SessionState>) -> MutexGuard<'_, SessionState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Holds the session in `Sending`. Settles to `Idle`/`Failed` via
/// [`SendGuard::finish`], or back to `Idle` on drop if the send future
/// was cancelled.
pub(crate) struct SendGuard<'a> {
    state: &'a Mutex<SessionState>,
    settled: bool,
}

impl<'a> SendGuard<'a> {
    /// Move `Idle`/`Failed` to `Sending`. Fails with `Busy` if a send is
    /// already in flight; the in-flight send is left untouched.
    pub(crate) fn acquire(
        state: &'a Mutex<SessionState>,
        busy_message: &str,
    ) -> Result<Self, ChatError> {
        let mut guarded = lock(state);
        if guarded.phase == Phase::Sending {
            return Err(ChatError::Busy(busy_message.to_string()));
        }
        guarded.phase = Phase::Sending;
        Ok(Self {
            state,
            settled: false,
        })
    }

    pub(crate) fn finish<T>(mut self, outcome: &Result<T, ChatError>) {
        let next = match outcome {
            Ok(_) => Phase::Idle,
            Err(e) => Phase::Failed(e.kind()),
        };
        lock(self.state).phase = next;
        self.settled = true;
    }
}

impl Drop for SendGuard<'_> {
    fn drop(&mut self) {
        if !self.settled {
            lock(self.state).phase = Phase::Idle;
        }
    }
}
