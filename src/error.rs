//! Error types for the record store.
//!
//! The store reports a small closed set of semantic kinds. Mapping those
//! kinds to transport status codes is left to whoever sits in front of the
//! store (see [`ErrorKind::status_code`]).

use thiserror::Error;

/// Errors returned by store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Caller supplied a missing or malformed argument. Never retried.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The requested record does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Filesystem or serialization failure. Carries the underlying message.
    #[error("internal error: {0}")]
    Internal(String),
}

/// The kind of a [`StoreError`], without its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    Internal,
}

impl ErrorKind {
    /// HTTP-style status code for this kind.
    pub fn status_code(self) -> u16 {
        match self {
            ErrorKind::InvalidArgument => 400,
            ErrorKind::NotFound => 404,
            ErrorKind::Internal => 500,
        }
    }
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            StoreError::NotFound(_) => ErrorKind::NotFound,
            StoreError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// The message without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            StoreError::InvalidArgument(m) | StoreError::NotFound(m) | StoreError::Internal(m) => m,
        }
    }

    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        StoreError::InvalidArgument(msg.into())
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Internal(e.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Internal(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
