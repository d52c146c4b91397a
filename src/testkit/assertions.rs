//! Assertion macros for outcomes, unwrap failures and validations.
//!
//! - [`crate::assert_outcome_ok!`] - Assert an outcome is Ok and extract the value
//! - [`crate::assert_outcome_err!`] - Assert an outcome is Err and extract the reason
//! - [`crate::assert_unwrap_kind!`] - Assert an unwrap failed with a given kind
//! - [`crate::assert_reason_count!`] - Assert a validation collected N reasons
//!
//! # Example
//!
//! ```rust
//! use liftfil::{assert_outcome_err, assert_outcome_ok, lift_plain, Reason, Tagged};
//!
//! let value = assert_outcome_ok!(lift_plain(Tagged::<i32, ()>::Raw(2), |v| v + 1));
//! assert_eq!(value, 3);
//!
//! let reason = assert_outcome_err!(lift_plain(Tagged::<i32, &str>::err("no"), |v| v + 1));
//! assert_eq!(reason, Reason::Plain("no"));
//! ```

/// Assert that an outcome is Ok and extract the value.
#[macro_export]
macro_rules! assert_outcome_ok {
    ($outcome:expr) => {
        match $outcome {
            Ok(value) => value,
            Err(reason) => panic!(
                "Expected Ok, got Err({:?})\n  at {}:{}:{}",
                reason,
                file!(),
                line!(),
                column!()
            ),
        }
    };
    ($outcome:expr, $($msg:tt)+) => {
        match $outcome {
            Ok(value) => value,
            Err(reason) => panic!(
                "{}: Expected Ok, got Err({:?})\n  at {}:{}:{}",
                format!($($msg)+),
                reason,
                file!(),
                line!(),
                column!()
            ),
        }
    };
}

/// Assert that an outcome is Err and extract the reason.
#[macro_export]
macro_rules! assert_outcome_err {
    ($outcome:expr) => {
        match $outcome {
            Ok(value) => panic!(
                "Expected Err, got Ok({:?})\n  at {}:{}:{}",
                value,
                file!(),
                line!(),
                column!()
            ),
            Err(reason) => reason,
        }
    };
}

/// Assert that an unwrap result failed with the given [`UnwrapError`] variant
/// and return the error.
///
/// ```rust
/// use liftfil::{assert_unwrap_kind, unwrap, Tagged};
///
/// let err = assert_unwrap_kind!(unwrap(Tagged::<i32, ()>::Raw(1)), InvalidArgument);
/// assert!(err.to_string().contains("Raw(1)"));
/// ```
///
/// [`UnwrapError`]: crate::UnwrapError
#[macro_export]
macro_rules! assert_unwrap_kind {
    ($result:expr, $kind:ident) => {
        match $result {
            Err(err @ $crate::UnwrapError::$kind { .. }) => err,
            other => panic!(
                "Expected Err({}), got {:?}\n  at {}:{}:{}",
                stringify!($kind),
                other,
                file!(),
                line!(),
                column!()
            ),
        }
    };
}

/// Assert that a validation failed with exactly `count` reasons and return
/// them.
#[macro_export]
macro_rules! assert_reason_count {
    ($validation:expr, $count:expr) => {
        match $validation {
            $crate::validation::Validation::Success(value) => panic!(
                "Expected {} reasons, got success with: {:?}\n  at {}:{}:{}",
                $count,
                value,
                file!(),
                line!(),
                column!()
            ),
            $crate::validation::Validation::Failure(reasons) => {
                assert_eq!(
                    reasons.len(),
                    $count,
                    "Expected {} reasons, got {}: {:?}\n  at {}:{}:{}",
                    $count,
                    reasons.len(),
                    reasons,
                    file!(),
                    line!(),
                    column!()
                );
                reasons
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::tagged::{Outcome, Reason, Tagged};
    use crate::unwrap::unwrap;
    use crate::validation::validate_all;

    #[test]
    fn test_assert_outcome_ok_extracts_value() {
        let outcome: Outcome<i32, ()> = Ok(5);
        assert_eq!(assert_outcome_ok!(outcome, "case {}", 1), 5);
    }

    #[test]
    #[should_panic(expected = "Expected Ok")]
    fn test_assert_outcome_ok_panics_on_err() {
        let outcome: Outcome<i32, &str> = Err(Reason::Plain("bad"));
        assert_outcome_ok!(outcome);
    }

    #[test]
    fn test_assert_unwrap_kind_runtime() {
        let err = assert_unwrap_kind!(unwrap(Tagged::<i32, &str>::err("x")), Runtime);
        assert_eq!(err.category(), "runtime error");
    }

    #[test]
    #[should_panic(expected = "Expected Err(Raised)")]
    fn test_assert_unwrap_kind_wrong_kind_panics() {
        assert_unwrap_kind!(unwrap(Tagged::<i32, &str>::err("x")), Raised);
    }

    #[test]
    fn test_assert_reason_count() {
        let inputs = vec![Tagged::<i32, &str>::err("a"), Tagged::Raw(1), Tagged::err("b")];
        let reasons = assert_reason_count!(validate_all(inputs), 2);
        assert_eq!(reasons.head(), &Reason::Plain("a"));
    }
}
