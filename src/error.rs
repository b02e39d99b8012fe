//! Error types for the Pay Cycle Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during window computation and
//! day-status resolution.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Pay Cycle Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use paycycle_engine::error::EngineError;
///
/// let error = EngineError::InvalidCycleStartDay { day: 31 };
/// assert_eq!(
///     error.to_string(),
///     "Cycle start day must be between 1 and 28, got 31"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
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

    /// Cycle start day was outside the supported 1..=28 range.
    #[error("Cycle start day must be between 1 and 28, got {day}")]
    InvalidCycleStartDay {
        /// The rejected day-of-month value.
        day: u32,
    },

    /// A window was requested with its start date after its end date.
    #[error("Invalid window: from {from} is after to {to}")]
    InvalidWindow {
        /// The start date of the rejected window.
        from: NaiveDate,
        /// The end date of the rejected window.
        to: NaiveDate,
    },

    /// Calendar arithmetic produced a date outside the representable range.
    #[error("Date out of range: {message}")]
    DateOutOfRange {
        /// A description of the out-of-range computation.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
