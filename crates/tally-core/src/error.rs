//! Shared error type across tally crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input, or a counter that already exists.
    BadRequest,
    /// Counter does not exist.
    NotFound,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// Value of the `code` field in JSON error bodies.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, TallyError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TallyError {
    #[error("counter exists: {0}")]
    AlreadyExists(String),
    #[error("counter not found: {0}")]
    NotFound(String),
    #[error("counter corrupted: {0}")]
    Corrupted(String),
    #[error("counter overflow: {0}")]
    Overflow(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl TallyError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            TallyError::AlreadyExists(_) | TallyError::BadRequest(_) => ClientCode::BadRequest,
            TallyError::NotFound(_) => ClientCode::NotFound,
            TallyError::Corrupted(_) | TallyError::Overflow(_) | TallyError::Internal(_) => {
                ClientCode::Internal
            }
        }
    }
}
