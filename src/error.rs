//! Error types for the mutdiff CLI.
//!
//! Uses thiserror for derive macros. Diff parsing and hunk classification
//! errors carry enough context (line number, offending text) to locate the
//! problem in the input.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for mutdiff operations.
///
/// Every variant is fatal to the call that produced it; nothing is retried
/// or skipped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MutdiffError {
    /// A `diff --git` block is missing a required marker line, or the
    /// header line itself does not have the expected shape.
    #[error("malformed file header at line {line_no}: expected {expected}, found '{found}'")]
    MalformedFileHeader {
        line_no: usize,
        expected: &'static str,
        found: String,
    },

    /// A `@@` line without a closing `@@`.
    #[error("malformed hunk header at line {line_no}: '{line}'")]
    MalformedHunkHeader { line_no: usize, line: String },

    /// A hunk header or body line that does not belong to any file or hunk.
    #[error("line {line_no} appears outside of a {context}: '{line}'")]
    OrphanLine {
        line_no: usize,
        context: &'static str,
        line: String,
    },

    /// A non-blank top-level line that matches no known marker.
    #[error("unrecognized line {line_no}: '{line}'")]
    UnrecognizedLine { line_no: usize, line: String },

    /// A hunk without a single added or removed line.
    #[error("empty hunk {header}: no lines added or removed")]
    EmptyHunk { header: String },

    /// A hunk body line not prefixed with ' ', '+' or '-'.
    #[error("unrecognized hunk line: '{line}'")]
    UnrecognizedHunkLine { line: String },

    /// User provided invalid arguments or unreadable input.
    #[error("{0}")]
    UserError(String),

    /// Experiment result files are missing or malformed.
    #[error("Malformed results: {0}")]
    ResultsError(String),
}

impl MutdiffError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            MutdiffError::MalformedFileHeader { .. }
            | MutdiffError::MalformedHunkHeader { .. }
            | MutdiffError::OrphanLine { .. }
            | MutdiffError::UnrecognizedLine { .. }
            | MutdiffError::EmptyHunk { .. }
            | MutdiffError::UnrecognizedHunkLine { .. } => exit_codes::DIFF_FAILURE,
            MutdiffError::UserError(_) => exit_codes::USER_ERROR,
            MutdiffError::ResultsError(_) => exit_codes::RESULTS_FAILURE,
        }
    }
}

/// Result type alias for mutdiff operations.
pub type Result<T> = std::result::Result<T, MutdiffError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diff_errors_have_diff_exit_code() {
        let err = MutdiffError::UnrecognizedLine {
            line_no: 3,
            line: "garbage".to_string(),
        };
        assert_eq!(err.exit_code(), exit_codes::DIFF_FAILURE);

        let err = MutdiffError::EmptyHunk {
            header: "@@ -1 +1 @@".to_string(),
        };
        assert_eq!(err.exit_code(), exit_codes::DIFF_FAILURE);
    }

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = MutdiffError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn results_error_has_correct_exit_code() {
        let err = MutdiffError::ResultsError("status.csv row 2".to_string());
        assert_eq!(err.exit_code(), exit_codes::RESULTS_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = MutdiffError::MalformedFileHeader {
            line_no: 4,
            expected: "'+++' line",
            found: "@@ -1 +1 @@".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed file header at line 4: expected '+++' line, found '@@ -1 +1 @@'"
        );

        let err = MutdiffError::ResultsError("missing kill.csv".to_string());
        assert_eq!(err.to_string(), "Malformed results: missing kill.csv");
    }
}
