//! Configuration schema types for Sopeng.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields fall back to the defaults below.

mod api;
mod limits;
mod model;
mod prompt;
mod system;

pub use api::*;
pub use limits::*;
pub use model::*;
pub use prompt::*;
pub use system::*;

use serde::{Deserialize, Serialize};
use sopeng_common::{ErrorMessages, NoticeMessages};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Sopeng.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ChatConfig {
    pub api: ApiConfig,
    pub model: ModelConfig,
    pub prompt: PromptConfig,
    pub limits: LimitsConfig,
    pub messages: ErrorMessages,
    pub notices: NoticeMessages,
    pub logging: LoggingConfig,
}
