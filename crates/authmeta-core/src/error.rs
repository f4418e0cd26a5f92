//! Shared error type across authmeta crates.

use thiserror::Error;

/// Stable error codes (API surface).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Invalid input / malformed declaration.
    BadRequest,
    /// A scope already carries a metadata record.
    AlreadyAnnotated,
    /// Unsupported config version.
    UnsupportedVersion,
    /// A declared strategy has no registered implementation.
    StrategyNotFound,
    /// Auth failed.
    AuthFailed,
    /// Internal error.
    Internal,
}

impl ErrorCode {
    /// String representation used in JSON responses and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::AlreadyAnnotated => "ALREADY_ANNOTATED",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::StrategyNotFound => "STRATEGY_NOT_FOUND",
            ErrorCode::AuthFailed => "AUTH_FAILED",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, AuthMetaError>;

/// Unified error type used by core and registry.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AuthMetaError {
    #[error("{target} already has authentication metadata at {scope}")]
    AlreadyAnnotated { target: String, scope: String },
    #[error("empty authentication annotation on {target} at {scope}")]
    EmptyAnnotation { target: String, scope: String },
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("the strategy '{0}' is not available")]
    StrategyNotFound(String),
    #[error("auth failed: {0}")]
    AuthFailed(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl AuthMetaError {
    /// Map internal error to a stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            AuthMetaError::AlreadyAnnotated { .. } => ErrorCode::AlreadyAnnotated,
            AuthMetaError::EmptyAnnotation { .. } => ErrorCode::BadRequest,
            AuthMetaError::InvalidConfig(_) => ErrorCode::BadRequest,
            AuthMetaError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            AuthMetaError::StrategyNotFound(_) => ErrorCode::StrategyNotFound,
            AuthMetaError::AuthFailed(_) => ErrorCode::AuthFailed,
            AuthMetaError::Internal(_) => ErrorCode::Internal,
        }
    }
}
