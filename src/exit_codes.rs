//! Exit code constants for the stackgen CLI.
//!
//! One code per fatal condition:
//! - 0: Success
//! - 1: Missing input (stack description absent)
//! - 2: Parse failure (stack description unreadable or malformed)
//! - 3: Write failure (generated data file could not be produced)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Missing input: the stack description does not exist at its fixed path.
pub const MISSING_INPUT: i32 = 1;

/// Parse failure: the stack description could not be read or parsed.
pub const PARSE_FAILURE: i32 = 2;

/// Write failure: the generated data file could not be rendered or written.
pub const WRITE_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, MISSING_INPUT, PARSE_FAILURE, WRITE_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn exit_codes_are_stable() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(MISSING_INPUT, 1);
        assert_eq!(PARSE_FAILURE, 2);
        assert_eq!(WRITE_FAILURE, 3);
    }
}
