//! Conversation session management.
//!
//! A `ChatSession` owns the conversation history, the rate-limit
//! counter, and the in-flight state for one conversation, and runs the
//! request/response cycle against a [`Transport`](crate::Transport).

mod chat;
mod manager;
mod types;


pub use manager::ChatSession;
pub use types::{ChatReply, Phase, SessionStats};
