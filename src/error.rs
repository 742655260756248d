//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the engine can report, from a single bad shift token up
//! to an unreadable input file.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// Token-level variants ([`PayrollError::OutOfBounds`],
/// [`PayrollError::IncoherentInterval`], [`PayrollError::MalformedShift`])
/// are recoverable: the aggregator skips the offending shift and keeps going.
/// The remaining variants are fatal for a run.
///
/// # Example
///
/// ```
/// use weekly_payroll::error::PayrollError;
///
/// let error = PayrollError::FileNotFound {
///     path: "missing.txt".to_string(),
/// };
/// assert_eq!(error.to_string(), "Input file not found: missing.txt");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayrollError {
    /// An hour or minute field lies outside the clock range.
    #[error("Time '{time}' is out of bounds: hour {hour}, minute {minute}")]
    OutOfBounds {
        /// The time text as supplied.
        time: String,
        /// The parsed hour.
        hour: u32,
        /// The parsed minute.
        minute: u32,
    },

    /// A shift starts after it ends.
    #[error("Start time {start} is ahead of end time {end}")]
    IncoherentInterval {
        /// Linear start time in minutes.
        start: u32,
        /// Linear end time in minutes.
        end: u32,
    },

    /// A shift token does not follow the `DDHH:MM-HH:MM` layout.
    #[error("Malformed shift '{token}': {reason}")]
    MalformedShift {
        /// The offending token.
        token: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A linear time is not covered by any band of the wage table.
    #[error("No wage band covers minute {minute}")]
    UncoveredTime {
        /// The linear time that fell outside the table.
        minute: u32,
    },

    /// None of the input lines passed validation.
    #[error("No valid records found in input")]
    EmptyInput,

    /// The input file does not exist.
    #[error("Input file not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// The input file exists but could not be read.
    #[error("Failed to read input file '{path}': {message}")]
    FileUnreadable {
        /// The path that failed to read.
        path: String,
        /// The underlying I/O error.
        message: String,
    },

    /// A wage table file was not found.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A wage table file exists but could not be read.
    #[error("Failed to read configuration file '{path}': {message}")]
    ConfigUnreadable {
        /// The path that failed to read.
        path: String,
        /// The underlying I/O error.
        message: String,
    },

    /// A wage table file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A wage table was parsed but its bands are inconsistent.
    #[error("Invalid wage table: {message}")]
    InvalidWageTable {
        /// A description of the inconsistency.
        message: String,
    },
}

impl PayrollError {
    /// Returns true if this error only invalidates a single shift token.
    pub fn is_token_level(&self) -> bool {
        matches!(
            self,
            PayrollError::OutOfBounds { .. }
                | PayrollError::IncoherentInterval { .. }
                | PayrollError::MalformedShift { .. }
                | PayrollError::UncoveredTime { .. }
        )
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_displays_time() {
        let error = PayrollError::OutOfBounds {
            time: "27:30".to_string(),
            hour: 27,
            minute: 30,
        };
        assert_eq!(
            error.to_string(),
            "Time '27:30' is out of bounds: hour 27, minute 30"
        );
    }

    #[test]
    fn test_incoherent_interval_displays_both_ends() {
        let error = PayrollError::IncoherentInterval {
            start: 1400,
            end: 1300,
        };
        assert_eq!(
            error.to_string(),
            "Start time 1400 is ahead of end time 1300"
        );
    }

    #[test]
    fn test_empty_input_message() {
        assert_eq!(
            PayrollError::EmptyInput.to_string(),
            "No valid records found in input"
        );
    }

    #[test]
    fn test_file_unreadable_displays_path_and_message() {
        let error = PayrollError::FileUnreadable {
            path: "/tmp/dir".to_string(),
            message: "Is a directory".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to read input file '/tmp/dir': Is a directory"
        );
    }

    #[test]
    fn test_token_level_classification() {
        assert!(PayrollError::IncoherentInterval { start: 2, end: 1 }.is_token_level());
        assert!(
            PayrollError::MalformedShift {
                token: "XX".to_string(),
                reason: "too short".to_string(),
            }
            .is_token_level()
        );
        assert!(!PayrollError::EmptyInput.is_token_level());
        assert!(
            !PayrollError::FileNotFound {
                path: "x".to_string()
            }
            .is_token_level()
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PayrollError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_empty() -> PayrollResult<()> {
            Err(PayrollError::EmptyInput)
        }

        fn propagates_error() -> PayrollResult<()> {
            returns_empty()?;
            Ok(())
        }

        assert_eq!(propagates_error(), Err(PayrollError::EmptyInput));
    }
}
