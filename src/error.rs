//! Error types for the stackgen CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for stackgen operations.
///
/// Each variant maps to a distinct exit code. The conversion is fail-fast:
/// nothing is recovered or retried, the message is printed and the process
/// exits with the variant's code.
#[derive(Error, Debug)]
pub enum StackgenError {
    /// The stack description is absent from its fixed path.
    #[error("{0}")]
    MissingInput(String),

    /// The stack description exists but could not be read or parsed.
    #[error("{0}")]
    ParseError(String),

    /// The generated data file could not be rendered or written.
    #[error("{0}")]
    WriteFailure(String),
}

impl StackgenError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            StackgenError::MissingInput(_) => exit_codes::MISSING_INPUT,
            StackgenError::ParseError(_) => exit_codes::PARSE_FAILURE,
            StackgenError::WriteFailure(_) => exit_codes::WRITE_FAILURE,
        }
    }
}

/// Result type alias for stackgen operations.
pub type Result<T> = std::result::Result<T, StackgenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_has_correct_exit_code() {
        let err = StackgenError::MissingInput("no such file".to_string());
        assert_eq!(err.exit_code(), exit_codes::MISSING_INPUT);
    }

    #[test]
    fn parse_error_has_correct_exit_code() {
        let err = StackgenError::ParseError("bad yaml".to_string());
        assert_eq!(err.exit_code(), exit_codes::PARSE_FAILURE);
    }

    #[test]
    fn write_failure_has_correct_exit_code() {
        let err = StackgenError::WriteFailure("disk full".to_string());
        assert_eq!(err.exit_code(), exit_codes::WRITE_FAILURE);
    }

    #[test]
    fn error_messages_pass_through() {
        let err = StackgenError::MissingInput(
            "stack description not found: lib/tech_stack.yaml".to_string(),
        );
        assert_eq!(
            err.to_string(),
            "stack description not found: lib/tech_stack.yaml"
        );

        let err = StackgenError::ParseError("invalid stack description: oops".to_string());
        assert_eq!(err.to_string(), "invalid stack description: oops");
    }
}
