//! Failure taxonomy for the chat session client.
//!
//! Every variant renders as the user-facing text configured in
//! `ErrorMessages`; callers that need to branch use [`ChatError::kind`].

use crate::transport::TransportError;

/// Stable failure kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotConfigured,
    Busy,
    RateLimited,
    InvalidCredentials,
    QuotaExceeded,
    RemoteService,
    EmptyResponse,
    Network,
    /// Non-success status with no dedicated kind.
    Http,
    /// Transport failure that was not a connectivity problem.
    Transport,
    /// Success status, but the body was not a completion.
    InvalidResponse,
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("{0}")]
    NotConfigured(String),

    #[error("{0}")]
    Busy(String),

    /// `remote` is false when the local limiter rejected the call.
    #[error("{message}")]
    RateLimited { message: String, remote: bool },

    #[error("{0}")]
    InvalidCredentials(String),

    #[error("{0}")]
    QuotaExceeded(String),

    #[error("{message}")]
    RemoteService { status: u16, message: String },

    #[error("{0}")]
    EmptyResponse(String),

    #[error("{message}")]
    Network {
        message: String,
        #[source]
        source: TransportError,
    },

    #[error("{message}")]
    Http {
        status: u16,
        detail: Option<String>,
        message: String,
    },

    #[error(transparent)]
    Transport(TransportError),

    #[error("invalid response body: {0}")]
    InvalidResponse(String),
}

impl ChatError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ChatError::NotConfigured(_) => ErrorKind::NotConfigured,
            ChatError::Busy(_) => ErrorKind::Busy,
            ChatError::RateLimited { .. } => ErrorKind::RateLimited,
            ChatError::InvalidCredentials(_) => ErrorKind::InvalidCredentials,
            ChatError::QuotaExceeded(_) => ErrorKind::QuotaExceeded,
            ChatError::RemoteService { .. } => ErrorKind::RemoteService,
            ChatError::EmptyResponse(_) => ErrorKind::EmptyResponse,
            ChatError::Network { .. } => ErrorKind::Network,
            ChatError::Http { .. } => ErrorKind::Http,
            ChatError::Transport(_) => ErrorKind::Transport,
            ChatError::InvalidResponse(_) => ErrorKind::InvalidResponse,
        }
    }

    /// HTTP status that caused the failure, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ChatError::InvalidCredentials(_) => Some(401),
            ChatError::QuotaExceeded(_) => Some(402),
            ChatError::RateLimited { remote: true, .. } => Some(429),
            ChatError::RemoteService { status, .. } | ChatError::Http { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}
