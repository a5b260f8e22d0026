//! Shared error type across cassini crates.

use thiserror::Error;

/// Stable error codes used in logs and by sink consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Stored entry is not the representation the operation expects.
    TypeMismatch,
    /// Key has no registered descriptor.
    MissingDescriptor,
    /// Label value count differs from the descriptor's label names.
    LabelArity,
    /// Attempted to overwrite a counter outside of an explicit reset.
    CounterOverwrite,
    /// Negative or non-finite delta counted into a counter.
    NegativeCounterDelta,
    /// Invalid configuration.
    BadConfig,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal error.
    Internal,
}

impl ErrorCode {
    /// String representation used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::TypeMismatch => "TYPE_MISMATCH",
            ErrorCode::MissingDescriptor => "MISSING_DESCRIPTOR",
            ErrorCode::LabelArity => "LABEL_ARITY",
            ErrorCode::CounterOverwrite => "COUNTER_OVERWRITE",
            ErrorCode::NegativeCounterDelta => "NEGATIVE_COUNTER_DELTA",
            ErrorCode::BadConfig => "BAD_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, CassiniError>;

/// Unified error type used by core and exporter.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CassiniError {
    #[error("type mismatch: entry `{key}` is not {expected}")]
    TypeMismatch { key: String, expected: &'static str },
    #[error("missing descriptor for `{key}`")]
    MissingDescriptor { key: String },
    #[error("label arity: `{key}` expects {expected} label values, got {got}")]
    LabelArity { key: String, expected: usize, got: usize },
    #[error("refusing to overwrite counter `{key}`")]
    CounterOverwrite { key: String },
    #[error("counter `{key}` only accepts finite non-negative deltas")]
    NegativeCounterDelta { key: String },
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl CassiniError {
    /// Map to a stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            CassiniError::TypeMismatch { .. } => ErrorCode::TypeMismatch,
            CassiniError::MissingDescriptor { .. } => ErrorCode::MissingDescriptor,
            CassiniError::LabelArity { .. } => ErrorCode::LabelArity,
            CassiniError::CounterOverwrite { .. } => ErrorCode::CounterOverwrite,
            CassiniError::NegativeCounterDelta { .. } => ErrorCode::NegativeCounterDelta,
            CassiniError::BadConfig(_) => ErrorCode::BadConfig,
            CassiniError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            CassiniError::Internal(_) => ErrorCode::Internal,
        }
    }

    /// Registry key the fault refers to, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            CassiniError::TypeMismatch { key, .. }
            | CassiniError::MissingDescriptor { key }
            | CassiniError::LabelArity { key, .. }
            | CassiniError::CounterOverwrite { key }
            | CassiniError::NegativeCounterDelta { key } => Some(key),
            _ => None,
        }
    }
}
