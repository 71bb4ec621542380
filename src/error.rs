//! Error types for the income calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during income calculation.

use thiserror::Error;

/// The main error type for the income calculation engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// A malformed time string is deliberately unrecoverable: every calculation
/// that depends on [`minutes_since_midnight`](crate::calculation::minutes_since_midnight)
/// propagates [`EngineError::InvalidTimeFormat`] instead of defaulting the
/// value, since a shift that silently contributed zero income would
/// misrepresent the user's proximity to the tax threshold.
///
/// # Example
///
/// ```
/// use workmate_engine::error::EngineError;
///
/// let error = EngineError::InvalidTimeFormat {
///     value: "25:70".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid time format '25:70': expected HH:mm");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A time string was not parseable as `HH:mm`.
    #[error("Invalid time format '{value}': expected HH:mm")]
    InvalidTimeFormat {
        /// The string that failed to parse.
        value: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
