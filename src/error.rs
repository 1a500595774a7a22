//! Unified error types.
//!
//! Missing data is not an error here: an absent series, rate or supply is
//! surfaced as an explicit "not yet available" value by the domain types.
//! Only malformed payloads and invalid configuration end up in these enums.

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Conversion error: {0}")]
    Convert(#[from] ConvertError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Errors raised while turning wire payloads into domain types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("Invalid wei amount '{value}': {reason}")]
    InvalidWei { value: String, reason: String },

    #[error("Invalid timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },

    #[error("{field} must be non-negative, got {value}")]
    Negative { field: &'static str, value: String },
}
