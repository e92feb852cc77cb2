//! Shared error type across metrica crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Malformed kind or value, invalid config.
    BadRequest,
    /// Metric name missing from the request.
    NotFound,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Storage or server failure.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and tests.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, MetricaError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum MetricaError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("storage: {0}")]
    Storage(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl MetricaError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            MetricaError::BadRequest(_) => ClientCode::BadRequest,
            MetricaError::NotFound(_) => ClientCode::NotFound,
            MetricaError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            MetricaError::Storage(_) | MetricaError::Internal(_) => ClientCode::Internal,
        }
    }
}
