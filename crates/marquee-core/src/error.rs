//! Shared error type across marquee crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed config.
    BadRequest,
    /// External dependency name was never registered.
    UnknownService,
    /// Search kind outside movie/tv/multi.
    UnknownSearchKind,
    /// Unsupported config schema version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnknownService => "UNKNOWN_SERVICE",
            ClientCode::UnknownSearchKind => "UNKNOWN_SEARCH_KIND",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, MarqueeError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum MarqueeError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unknown service: {0}")]
    UnknownService(String),
    #[error("unknown search kind: {0}")]
    UnknownSearchKind(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl MarqueeError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            MarqueeError::BadRequest(_) => ClientCode::BadRequest,
            MarqueeError::UnknownService(_) => ClientCode::UnknownService,
            MarqueeError::UnknownSearchKind(_) => ClientCode::UnknownSearchKind,
            MarqueeError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            MarqueeError::Internal(_) => ClientCode::Internal,
        }
    }
}
