//! OpenRouter chat-completions wire format.
//!
//! Builds the outbound `POST /chat/completions` request and turns the
//! reply (success or failure) into either a [`Completion`] or a
//! classified [`ChatError`](crate::ChatError).

mod config;
mod request;
mod response;

pub use config::{GenerationParams, SessionConfig, MIN_TOKEN_LEN};
pub use request::build_request;
pub use response::{classify_status, parse_completion, Completion};
