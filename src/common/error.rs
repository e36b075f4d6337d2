//! Error handling primitives shared across the crate.
//!
//! Every error maps onto a stable numeric [`RiskCode`] so log lines and HTTP
//! error bodies can be matched by machines without parsing messages.

use thiserror::Error;

/// Stable error codes surfaced in logs and API responses.
#[repr(u32)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RiskCode {
    /// Success code used as a sentinel.
    Ok = 0,
    /// Model artefact was not found at the configured path.
    ModelMissing = 1,
    /// Model artefact exists but could not be parsed or failed validation.
    ModelCorrupt = 2,
    /// Input failed validation.
    InvalidInput = 3,
    /// Catch-all for bugs and IO failures.
    Internal = 4,
}

/// Canonical error type for the crate.
#[derive(Debug, Error)]
pub enum RiskError {
    #[error("model artefact missing: {0}")]
    ModelMissing(String),
    #[error("model artefact corrupt: {0}")]
    ModelCorrupt(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result alias used throughout the crate.
pub type RiskResult<T> = Result<T, RiskError>;

impl RiskError {
    /// Validation helper.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Corrupt artefact helper.
    pub fn corrupt(msg: impl Into<String>) -> Self {
        Self::ModelCorrupt(msg.into())
    }

    /// Internal error helper.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Machine parsable code for this error.
    pub fn code(&self) -> RiskCode {
        match self {
            RiskError::ModelMissing(_) => RiskCode::ModelMissing,
            RiskError::ModelCorrupt(_) => RiskCode::ModelCorrupt,
            RiskError::InvalidInput(_) => RiskCode::InvalidInput,
            RiskError::Io(_) | RiskError::Internal(_) => RiskCode::Internal,
        }
    }
}
