//! Endpoint, credentials, and app identification.

use std::fmt;

use serde::{Deserialize, Serialize};
use sopeng_common::defaults;

pub use sopeng_common::defaults::PLACEHOLDER_API_KEY;

/// Environment variable that overrides `api.key`.
pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// Remote completion endpoint configuration.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub url: String,
    pub key: String,
    /// Sent as `HTTP-Referer`.
    pub app_url: String,
    /// Sent as `X-Title`.
    pub app_name: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: defaults::ENDPOINT.into(),
            key: PLACEHOLDER_API_KEY.into(),
            app_url: defaults::APP_URL.into(),
            app_name: defaults::APP_NAME.into(),
        }
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("url", &self.url)
            .field("key", &"[REDACTED]")
            .field("app_url", &self.app_url)
            .field("app_name", &self.app_name)
            .finish()
    }
}
