pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Checks a caller precondition of `$operation`.
///
/// Expands to a `Result<()>` holding a `PreconditionViolation` with the
/// stringified condition when `$cond` is false, so the call site can log the
/// failure before propagating it.
#[macro_export]
macro_rules! verify_precondition {
    ($operation:expr, $cond:expr) => {
        $crate::result::verify_precondition($cond, $operation, stringify!($cond))
    };
}

#[inline]
pub fn verify_precondition(holds: bool, operation: &str, condition: &str) -> Result<()> {
    if holds {
        Ok(())
    } else {
        Err(precondition_violation(operation, condition))
    }
}

#[cold]
fn precondition_violation(operation: &str, condition: &str) -> crate::error::Error {
    crate::error::Error::precondition(operation, condition)
}

#[cfg(test)]
mod tests {
    use crate::{ErrorKind, Result};

    fn checked_window(from: usize, until: usize) -> Result<usize> {
        verify_precondition!("window", from <= until)?;
        Ok(until - from)
    }

    #[test]
    fn test_verify_precondition() {
        assert_eq!(checked_window(1, 3).unwrap(), 2);
        assert_eq!(checked_window(2, 2).unwrap(), 0);

        let err = checked_window(4, 2).unwrap_err();
        match err.kind() {
            ErrorKind::PreconditionViolation { operation, message } => {
                assert_eq!(operation, "window");
                assert_eq!(message, "from <= until");
            }
        }
    }

    #[test]
    fn test_failure_is_observable_before_propagation() {
        let mut seen = None;
        let outcome = verify_precondition!("window", 5 < 3)
            .inspect_err(|err| seen = Some(err.to_string()));
        assert!(outcome.is_err());
        assert_eq!(seen.as_deref(), Some("precondition violated in window: 5 < 3"));
    }
}
