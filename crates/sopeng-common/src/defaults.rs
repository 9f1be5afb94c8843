//! Default values shared by the config schema and the chat session.

pub const ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Token value shipped in the default config; never a usable key.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_OPENROUTER_API_KEY_HERE";

pub const MODEL_ID: &str = "minimax/minimax-m2:free";
pub const APP_URL: &str = "http://localhost";
pub const APP_NAME: &str = "Sopeng.ai";

pub const MAX_TOKENS: u32 = 2000;
pub const TEMPERATURE: f64 = 0.7;
pub const TOP_P: f64 = 1.0;
pub const FREQUENCY_PENALTY: f64 = 0.0;
pub const PRESENCE_PENALTY: f64 = 0.0;

pub const MESSAGES_PER_MINUTE: u32 = 10;
pub const HISTORY_LENGTH: usize = 10;

/// Largest history bound the config accepts.
pub const MAX_HISTORY_LENGTH: usize = 10_000;
