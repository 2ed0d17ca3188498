//! Error types for the Attendance Reconciliation Engine.
//!
//! Not-found conditions (unknown employee, schedule or calendar entry) are never
//! errors; the engine degrades to conservative defaults for those. The variants
//! here cover loader failures, storage infrastructure failures, write-time
//! invariant conflicts and malformed range queries.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Attendance Reconciliation Engine.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/schedules.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/schedules.yaml"
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

    /// The backing store failed to answer a query.
    ///
    /// Propagated unchanged to the caller; the engine never retries.
    #[error("Storage failure: {message}")]
    Storage {
        /// A description of the infrastructure failure.
        message: String,
    },

    /// A write would break a store invariant.
    #[error("Conflicting {entity}: {message}")]
    Conflict {
        /// The kind of record that conflicted (e.g. "schedule").
        entity: String,
        /// A description of the conflict.
        message: String,
    },

    /// A date range whose start is after its end.
    #[error("Invalid date range: {start} is after {end}")]
    InvalidDateRange {
        /// The requested first day.
        start: NaiveDate,
        /// The requested last day.
        end: NaiveDate,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
