//! Error types for the simulator.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a simulator.
///
/// Running a simulation never fails. The only thing that can go wrong is
/// asking for a memory with no frames at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested frame capacity is zero.
    #[error("frame capacity must be at least 1, got {0}")]
    InvalidCapacity(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidCapacity(0);
        assert_eq!(format!("{}", err), "frame capacity must be at least 1, got 0");
    }

    #[test]
    fn test_result_type_alias() {
        fn might_fail(capacity: usize) -> Result<usize> {
            if capacity == 0 {
                return Err(Error::InvalidCapacity(capacity));
            }
            Ok(capacity)
        }

        assert_eq!(might_fail(4).unwrap(), 4);
        assert_eq!(might_fail(0), Err(Error::InvalidCapacity(0)));
    }
}
