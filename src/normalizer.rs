//! The forward and error transforms.
//!
//! [`lift`] works on the success side of a value and [`tfil`] on the error
//! side. Both accept any [`IntoTagged`] input and always return an
//! [`Outcome`]. Each has a `_plain` twin for callbacks that return an
//! untagged value:
//!
//! | callback returns | `lift` family  | `tfil` family  |
//! |------------------|----------------|----------------|
//! | `Ok(x)`          | `Ok(x)`        | `Ok(x)`        |
//! | `Err(r)`         | `Err(r)`       | `Err(r)`       |
//! | `ErrMarker`      | `Err(Marker)`  | `Err(Marker)`  |
//! | bare `v`         | `Ok(v)`        | `Err(Plain(v))`|
//!
//! `lift` callbacks return a [`Tagged`] (whose `Raw` case is the bare value)
//! or an [`Outcome`]. `tfil` handlers return a [`Handled`] or an
//! [`Outcome`], neither of which has a raw case, so the only way to hand back
//! a bare value on the error side is `tfil_plain`, where it stays an error.
//!
//! Neither transform catches anything: a panicking callback unwinds straight
//! through to the caller.

use crate::tagged::{Handled, IntoHandled, IntoTagged, Outcome, Reason, Tagged};

/// Apply `fun` to the success side of `input`.
///
/// `Err` and `ErrMarker` pass through without calling `fun`. For `Ok` and
/// `Raw`, `fun` runs exactly once and its return is normalized; a `Raw`
/// return becomes `Ok`.
///
/// # Example
///
/// ```rust
/// use liftfil::{lift, Reason, Tagged};
///
/// let half = |n: i32| -> Tagged<i32, &'static str> {
///     if n % 2 == 0 { Tagged::Raw(n / 2) } else { Tagged::err("odd") }
/// };
///
/// assert_eq!(lift(Tagged::Raw(8), half), Ok(4));
/// assert_eq!(lift(Tagged::Ok(3), half), Err(Reason::Plain("odd")));
/// assert_eq!(lift(Tagged::ErrMarker, half), Err(Reason::Marker));
/// ```
pub fn lift<I, R, F>(input: I, fun: F) -> Outcome<R::Value, I::Reason>
where
    I: IntoTagged,
    R: IntoTagged<Reason = I::Reason>,
    F: FnOnce(I::Value) -> R,
{
    let tagged = input.into_tagged();
    let shape = tagged.shape();
    match tagged {
        Tagged::Ok(value) | Tagged::Raw(value) => fun(value).into_tagged().normalize(),
        Tagged::Err(reason) => {
            log::trace!("lift: skipping callback on {} input", shape);
            Err(reason)
        }
        Tagged::ErrMarker => {
            log::trace!("lift: skipping callback on {} input", shape);
            Err(Reason::Marker)
        }
    }
}

/// [`lift`] for callbacks returning an untagged value, which becomes `Ok`.
pub fn lift_plain<I, U, F>(input: I, fun: F) -> Outcome<U, I::Reason>
where
    I: IntoTagged,
    F: FnOnce(I::Value) -> U,
{
    lift(input, |value| Tagged::<U, I::Reason>::Raw(fun(value)))
}

/// Apply `fun` to the error side of `input`.
///
/// `Ok` and `Raw` pass through as `Ok` without calling `fun`. For `Err`,
/// `fun` receives the reason; for `ErrMarker` it receives
/// [`Reason::Marker`]. The handler returns `Ok`, `Err` or `ErrMarker` through
/// [`Handled`] or an [`Outcome`]; a bare reason goes through [`tfil_plain`].
///
/// # Example
///
/// ```rust
/// use liftfil::{tfil, Handled, Reason, Tagged};
///
/// let recover = |reason: Reason<&'static str>| -> Handled<i32, String> {
///     match reason {
///         Reason::Plain("empty") => Handled::Ok(0),
///         other => Handled::err(format!("unrecoverable: {}", other)),
///     }
/// };
///
/// assert_eq!(tfil(Tagged::err("empty"), recover), Ok(0));
/// assert_eq!(tfil(Tagged::Raw(5), recover), Ok(5));
/// ```
///
/// A handler cannot return a raw value:
///
/// ```compile_fail
/// use liftfil::{tfil, Tagged};
///
/// let _ = tfil(Tagged::<i32, i32>::err(1), |_| Tagged::<i32, i32>::Raw(7));
/// ```
pub fn tfil<I, R, F>(input: I, fun: F) -> Outcome<I::Value, R::Reason>
where
    I: IntoTagged,
    R: IntoHandled<Value = I::Value>,
    F: FnOnce(Reason<I::Reason>) -> R,
{
    let tagged = input.into_tagged();
    let shape = tagged.shape();
    match tagged {
        Tagged::Ok(value) | Tagged::Raw(value) => {
            log::trace!("tfil: skipping callback on {} input", shape);
            Ok(value)
        }
        Tagged::Err(reason) => fun(reason).into_handled().normalize(),
        Tagged::ErrMarker => fun(Reason::Marker).into_handled().normalize(),
    }
}

/// [`tfil`] for callbacks returning a bare reason, which becomes
/// `Err(Reason::Plain(v))`.
pub fn tfil_plain<I, G, F>(input: I, fun: F) -> Outcome<I::Value, G>
where
    I: IntoTagged,
    F: FnOnce(Reason<I::Reason>) -> G,
{
    tfil(input, |reason| Handled::<I::Value, G>::err(fun(reason)))
}
