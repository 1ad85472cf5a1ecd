//! Error types for timecode operations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for timecode operations.
pub type Result<T> = std::result::Result<T, TimecodeError>;

/// Errors that can occur during timecode operations.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimecodeError {
    /// The string does not split into the four expected fields.
    #[error("Invalid timecode format: {message}")]
    InvalidFormat {
        /// Description of the format error.
        message: String,
    },

    /// A timecode field is not parseable as an integer.
    #[error("Invalid timecode field: {field} = {value:?}")]
    InvalidField {
        /// Name of the field (hours, minutes, seconds, frames).
        field: String,
        /// The raw text that failed to parse.
        value: String,
    },

    /// An operation requiring a configured start timecode was invoked
    /// without one.
    #[error("No start timecode configured")]
    MissingStartTimecode,

    /// A conversion requiring a frame rate was invoked on a timecode
    /// whose rate was never specified.
    #[error("No frame rate specified for {operation}")]
    UnspecifiedFrameRate {
        /// The operation that needed a frame rate.
        operation: String,
    },

    /// An operation requiring a concrete timecode value was invoked on
    /// the null timecode.
    #[error("Null timecode has no {operation}")]
    NullTimecode {
        /// The operation that needed a concrete value.
        operation: String,
    },

    /// Frame arithmetic went below zero.
    #[error("Timecode underflow")]
    Underflow,
}

impl TimecodeError {
    /// Create an invalid format error.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }

    /// Create an invalid field error.
    pub fn invalid_field(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create an unspecified frame rate error.
    pub fn unspecified_frame_rate(operation: impl Into<String>) -> Self {
        Self::UnspecifiedFrameRate {
            operation: operation.into(),
        }
    }

    /// Create a null timecode error.
    pub fn null_timecode(operation: impl Into<String>) -> Self {
        Self::NullTimecode {
            operation: operation.into(),
        }
    }
}
