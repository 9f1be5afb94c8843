//! Model selection and generation parameters.

use serde::{Deserialize, Serialize};
use sopeng_common::defaults;

/// Which model to call and how to sample from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub id: String,
    /// Name shown to the user instead of `id`.
    pub display_name: String,
    /// Valid range: 1-200000.
    pub max_tokens: u32,
    /// Valid range: 0.0-2.0.
    pub temperature: f64,
    /// Valid range: 0.0-1.0.
    pub top_p: f64,
    /// Valid range: -2.0-2.0.
    pub frequency_penalty: f64,
    /// Valid range: -2.0-2.0.
    pub presence_penalty: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            id: defaults::MODEL_ID.into(),
            display_name: "Sopeng v2.1".into(),
            max_tokens: defaults::MAX_TOKENS,
            temperature: defaults::TEMPERATURE,
            top_p: defaults::TOP_P,
            frequency_penalty: defaults::FREQUENCY_PENALTY,
            presence_penalty: defaults::PRESENCE_PENALTY,
        }
    }
}
