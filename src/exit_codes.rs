//! Exit code constants for the mutdiff CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable input, invalid config)
//! - 2: Malformed diff input
//! - 3: Malformed experiment results data

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable input, or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// The diff could not be parsed or one of its hunks could not be classified.
pub const DIFF_FAILURE: i32 = 2;

/// An experiment result file (started.csv, status.csv, kill.csv) is malformed.
pub const RESULTS_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, DIFF_FAILURE, RESULTS_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
