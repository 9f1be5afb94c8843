//! Rolling conversation history.
//!
//! Keeps the most recent `max_len` turns; older turns are dropped from
//! the front as new ones arrive.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Message, Role};

/// Retention used when a bound of zero is configured.
pub const DEFAULT_MAX_HISTORY: usize = sopeng_common::defaults::HISTORY_LENGTH;

/// Upper limit on slots reserved up front; larger bounds grow on demand.
const PREALLOCATE: usize = 64;

/// One message in the conversation. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Turn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    /// The wire form, without the timestamp.
    pub fn to_message(&self) -> Message {
        Message::new(self.role, self.content.clone())
    }
}

#[derive(Debug, Clone)]
pub struct History {
    turns: VecDeque<Turn>,
    max_len: usize,
}

impl History {
    pub fn new(max_len: usize) -> Self {
        let max_len = if max_len == 0 {
            DEFAULT_MAX_HISTORY
        } else {
            max_len
        };
        Self {
            turns: VecDeque::with_capacity(max_len.min(PREALLOCATE)),
            max_len,
        }
    }

    /// Append a turn, then drop the oldest turns until the bound holds.
    /// Returns how many turns were dropped.
    pub fn push(&mut self, turn: Turn) -> usize {
        self.turns.push_back(turn);
        let mut dropped = 0;
        while self.turns.len() > self.max_len {
            self.turns.pop_front();
            dropped += 1;
        }
        dropped
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn iter(&self) -> impl Iterator<Item = &Turn> {
        self.turns.iter()
    }

    pub fn to_vec(&self) -> Vec<Turn> {
        self.turns.iter().cloned().collect()
    }

    /// Pretty-printed JSON array of every retained turn, oldest first.
    pub fn export_json(&self) -> String {
        let turns: Vec<&Turn> = self.turns.iter().collect();
        serde_json::to_string_pretty(&turns)
            .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize history: {e}\"}}"))
    }

    /// Parse the output of [`History::export_json`] back into turns.
    pub fn parse_export(json: &str) -> Result<Vec<Turn>, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HISTORY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(history: &History) -> Vec<String> {
        history.iter().map(|t| t.content.clone()).collect()
    }

    #[test]
    fn push_within_bound_keeps_everything() {
        let mut history = History::new(3);
        assert_eq!(history.push(Turn::new(Role::User, "a")), 0);
        assert_eq!(history.push(Turn::new(Role::Assistant, "b")), 0);
        assert_eq!(contents(&history), ["a", "b"]);
    }

    #[test]
    fn overflow_drops_oldest_first() {
        let mut history = History::new(3);
        for (i, text) in ["1", "2", "3", "4", "5"].iter().enumerate() {
            let role = if i % 2 == 0 { Role::User } else { Role::Assistant };
            history.push(Turn::new(role, *text));
            assert!(history.len() <= 3);
        }
        assert_eq!(contents(&history), ["3", "4", "5"]);
        assert_eq!(history.iter().next().map(|t| t.role), Some(Role::User));
    }

    #[test]
    fn bound_holds_for_many_appends() {
        for bound in 1..6 {
            let mut history = History::new(bound);
            let mut appended = Vec::new();
            for i in 0..20 {
                let text = format!("turn {i}");
                history.push(Turn::new(Role::User, text.clone()));
                appended.push(text);
                assert!(history.len() <= bound);
            }
            let expected: Vec<String> = appended[appended.len() - bound..].to_vec();
            assert_eq!(contents(&history), expected, "bound {bound}");
        }
    }

    #[test]
    fn zero_bound_uses_default() {
        let history = History::new(0);
        assert_eq!(history.max_len(), DEFAULT_MAX_HISTORY);
    }

    #[test]
    fn huge_bound_does_not_preallocate() {
        for bound in [1usize << 60, usize::MAX] {
            let mut history = History::new(bound);
            assert_eq!(history.max_len(), bound);
            assert_eq!(history.push(Turn::new(Role::User, "hi")), 0);
            assert_eq!(history.len(), 1);
        }
    }

    #[test]
    fn clear_empties_history() {
        let mut history = History::new(4);
        history.push(Turn::new(Role::User, "hi"));
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.max_len(), 4);
    }

    #[test]
    fn export_then_clear_is_lossless() {
        let mut history = History::new(10);
        history.push(Turn::new(Role::User, "Apa kabar?"));
        history.push(Turn::new(Role::Assistant, "Baik, terima kasih!\n\n```rust\nfn main() {}\n```"));
        history.push(Turn::new(Role::User, "quote \" and emoji 🎉"));
        let before = history.to_vec();

        let exported = history.export_json();
        history.clear();
        assert!(history.is_empty());

        let restored = History::parse_export(&exported).unwrap();
        assert_eq!(restored, before);
    }

    #[test]
    fn export_uses_lowercase_roles_and_rfc3339() {
        let mut history = History::new(2);
        history.push(Turn::new(Role::User, "hello"));
        let json: serde_json::Value = serde_json::from_str(&history.export_json()).unwrap();
        assert_eq!(json[0]["role"], "user");
        assert_eq!(json[0]["content"], "hello");
        let ts = json[0]["timestamp"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(ts).is_ok());
    }

    #[test]
    fn empty_history_exports_empty_array() {
        let history = History::default();
        assert_eq!(History::parse_export(&history.export_json()).unwrap(), Vec::new());
    }
}
