use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("{message} {reason_code:?} {retryable}")]
    Database {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    #[error("{message}")]
    DuplicateKey {
        message: String,
    },
    #[error("{message}")]
    NotFound {
        message: String,
    },
    // This is a retry-able error, which indicates that a collaborator (ledger or gateway) could
    // not serve the request right now. The caller can retry with or without a backoff.
    #[error("{message} {reason_code:?} {retryable}")]
    CurrentlyUnavailable {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    #[error("{message}")]
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    #[error("{message}")]
    Serialization {
        message: String,
    },
    #[error("{message} {reason_code:?}")]
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn database(message: &str, reason_code: Option<String>, retryable: bool) -> LibraryError {
        LibraryError::Database { message: message.to_string(), reason_code, retryable }
    }

    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn unavailable(message: &str, reason_code: Option<String>, retryable: bool) -> LibraryError {
        LibraryError::CurrentlyUnavailable { message: message.to_string(), reason_code, retryable }
    }

    // version mismatch on an optimistic update
    pub fn conflict(message: &str) -> LibraryError {
        LibraryError::database(message, Some("ConditionalCheckFailed".to_string()), false)
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    /// The human readable part of the error, without reason codes.
    pub fn message(&self) -> &str {
        match self {
            LibraryError::Database { message, .. } => message,
            LibraryError::DuplicateKey { message } => message,
            LibraryError::NotFound { message } => message,
            LibraryError::CurrentlyUnavailable { message, .. } => message,
            LibraryError::Validation { message, .. } => message,
            LibraryError::Serialization { message } => message,
            LibraryError::Runtime { message, .. } => message,
        }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("io {:?}", err).as_str(), None)
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

/// A specialized Result type for library services and repositories.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum CheckoutStatus {
    CheckedOut,
    Returned,
}

impl Display for CheckoutStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            CheckoutStatus::CheckedOut => write!(f, "CheckedOut"),
            CheckoutStatus::Returned => write!(f, "Returned"),
        }
    }
}
