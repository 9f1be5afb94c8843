//! Client-side admission control and history retention.

use serde::{Deserialize, Serialize};
use sopeng_common::defaults;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Requests admitted per fixed 60-second window (minimum 1).
    pub max_messages_per_minute: u32,
    /// Turns kept in the conversation window (1 to 10000).
    pub max_history_length: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_messages_per_minute: defaults::MESSAGES_PER_MINUTE,
            max_history_length: defaults::HISTORY_LENGTH,
        }
    }
}
