use thiserror::Error;

/// Validation and contract errors exposed by `shoplens-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("base url must start with http:// or https://: '{value}'")]
    InvalidBaseUrl { value: String },
    #[error("request timeout must be greater than zero")]
    InvalidTimeout,

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("field '{field}' must be non-negative")]
    NegativeValue { field: &'static str },

    #[error("request_id must be at least 8 characters")]
    InvalidRequestId,
    #[error("error code cannot be empty")]
    EmptyErrorCode,
    #[error("error message cannot be empty")]
    EmptyErrorMessage,
}

/// Shape violation found while validating a source payload.
///
/// Record-level variants carry the zero-based position of the offending
/// element so the caller can point at the bad upstream row.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedEventError {
    #[error("payload is not valid JSON: {reason}")]
    InvalidJson { reason: String },
    #[error("payload is not valid: {reason}")]
    InvalidPayload { reason: String },
    #[error("element {index} is not a JSON object")]
    NotAnObject { index: usize },
    #[error("element {index} is missing field '{field}'")]
    MissingField { index: usize, field: &'static str },
    #[error("element {index} has invalid field '{field}': {reason}")]
    InvalidField {
        index: usize,
        field: &'static str,
        reason: String,
    },
}

impl MalformedEventError {
    /// Position of the offending element, when the failure is record-level.
    pub const fn index(&self) -> Option<usize> {
        match self {
            Self::InvalidJson { .. } | Self::InvalidPayload { .. } => None,
            Self::NotAnObject { index }
            | Self::MissingField { index, .. }
            | Self::InvalidField { index, .. } => Some(*index),
        }
    }

    pub const fn code(&self) -> &'static str {
        "payload.malformed"
    }
}
