//! Error accumulation over tagged values using stillwater's `Validation`.
//!
//! `lift` and `tfil` stop at the first error. When every error matters, for
//! instance when checking a batch of inputs, collect the normalized values
//! into a [`TaggedValidation`] instead:
//!
//! ```rust
//! use liftfil::{validate_all, Reason, Tagged};
//! use liftfil::validation::Validation;
//!
//! let inputs = vec![
//!     Tagged::<i32, &str>::Raw(1),
//!     Tagged::err("bad"),
//!     Tagged::Ok(3),
//!     Tagged::ErrMarker,
//! ];
//!
//! match validate_all(inputs) {
//!     Validation::Failure(reasons) => {
//!         assert_eq!(reasons.into_vec(), vec![Reason::Plain("bad"), Reason::Marker]);
//!     }
//!     Validation::Success(_) => unreachable!(),
//! }
//! ```

pub use stillwater::{NonEmptyVec, Validation};

use crate::tagged::{IntoTagged, Outcome, Reason};

/// Reasons collected from every failed value.
pub type Reasons<E> = NonEmptyVec<Reason<E>>;

/// Validation over normalized tagged values.
pub type TaggedValidation<T, E> = Validation<T, Reasons<E>>;

/// Normalize a single value into a validation.
///
/// `Raw` and `Ok` are successes; `Err` and `ErrMarker` fail with one reason.
pub fn to_validation<I: IntoTagged>(input: I) -> TaggedValidation<I::Value, I::Reason> {
    match input.into_tagged().normalize() {
        Ok(value) => Validation::Success(value),
        Err(reason) => Validation::Failure(NonEmptyVec::new(reason, Vec::new())),
    }
}

/// Normalize every value, keeping all successes in order or, if anything
/// failed, all reasons in order.
pub fn validate_all<I, It>(inputs: It) -> TaggedValidation<Vec<I::Value>, I::Reason>
where
    I: IntoTagged,
    It: IntoIterator<Item = I>,
{
    let mut values = Vec::new();
    let mut reasons = Vec::new();

    for input in inputs {
        match input.into_tagged().normalize() {
            Ok(value) => values.push(value),
            Err(reason) => reasons.push(reason),
        }
    }

    match NonEmptyVec::from_vec(reasons) {
        Some(reasons) => {
            log::debug!("validate_all: {} value(s) failed", reasons.len());
            Validation::Failure(reasons)
        }
        None => Validation::Success(values),
    }
}

/// Turn a validation back into an outcome, keeping the first reason.
pub fn from_validation<T, E>(validation: TaggedValidation<T, E>) -> Outcome<T, E> {
    match validation {
        Validation::Success(value) => Ok(value),
        Validation::Failure(reasons) => Err(reasons.into_vec().remove(0)),
    }
}
