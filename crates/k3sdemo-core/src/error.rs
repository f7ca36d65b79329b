//! Shared error type across k3sdemo crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed configuration.
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and startup errors.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, StatusError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum StatusError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl StatusError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            StatusError::BadRequest(_) => ClientCode::BadRequest,
            StatusError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            StatusError::Internal(_) => ClientCode::Internal,
        }
    }
}

impl From<std::fmt::Error> for StatusError {
    fn from(e: std::fmt::Error) -> Self {
        StatusError::Internal(format!("format failed: {e}"))
    }
}
