//! Error types for the purchases SDK core
//!
//! A single error value type carrying a classification code is shared
//! between the backend client and the SDK surface. The identity manager
//! never inspects backend errors; it propagates them unchanged.

// ----------------------------------------------------------------------------
// Error Codes
// ----------------------------------------------------------------------------

/// Classification of a purchases error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The API key or user credentials were rejected by the backend.
    InvalidCredentials,
    /// A network-level failure reaching the backend.
    Network,
    /// The app user ID was rejected by the backend.
    InvalidAppUserId,
    /// The backend returned an error the SDK does not recognize.
    UnknownBackend,
}

impl core::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ErrorCode::InvalidCredentials => write!(f, "invalid credentials"),
            ErrorCode::Network => write!(f, "network error"),
            ErrorCode::InvalidAppUserId => write!(f, "invalid app user id"),
            ErrorCode::UnknownBackend => write!(f, "unknown backend error"),
        }
    }
}

// ----------------------------------------------------------------------------
// Error Value
// ----------------------------------------------------------------------------

/// Error produced by the backend client or the SDK surface.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{code}: {message}")]
pub struct PurchasesError {
    /// Classification code.
    pub code: ErrorCode,
    /// Human-readable description.
    pub message: String,
}

impl PurchasesError {
    /// Create an error with an explicit code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Invalid-credentials error.
    pub fn invalid_credentials(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidCredentials, message)
    }

    /// Network failure error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Network, message)
    }

    /// Invalid app user ID error.
    pub fn invalid_app_user_id(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidAppUserId, message)
    }
}

pub type Result<T> = core::result::Result<T, PurchasesError>;

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
