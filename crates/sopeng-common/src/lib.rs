pub mod defaults;
pub mod errors;
pub mod id;
pub mod messages;

pub use errors::ConfigError;
pub use id::{new_id, SessionId};
pub use messages::{ErrorMessages, NoticeMessages};
