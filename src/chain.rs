//! Left-to-right chaining over tagged values.
//!
//! Two ways to write a pipeline:
//!
//! - The [`Chain`] extension trait, available on every [`IntoTagged`] value:
//!
//!   ```rust
//!   use liftfil::{Chain, Reason, Tagged};
//!
//!   let out = Tagged::<i32, String>::Raw(3)
//!       .lift_plain(|v| v * 10)
//!       .lift(|v| if v > 100 { Tagged::Raw(v) } else { Tagged::err(format!("{v} too small")) })
//!       .tfil_plain(|reason| format!("rejected: {}", reason));
//!
//!   assert_eq!(out, Err(Reason::Plain("rejected: \"30 too small\"".to_string())));
//!   ```
//!
//! - The [`pipe!`](crate::pipe) macro, which accepts the `~>>` and `<~>`
//!   operators and inserts the running value as the first argument of each
//!   call:
//!
//!   ```rust
//!   use liftfil::{pipe, Outcome, Reason, Tagged};
//!
//!   fn scale(v: i32, by: i32) -> Outcome<i32, &'static str> { Ok(v * by) }
//!   fn cap(v: i32, max: i32) -> Outcome<i32, &'static str> {
//!       if v <= max { Ok(v) } else { Err(Reason::Plain("over cap")) }
//!   }
//!   fn fallback(_: Reason<&'static str>, value: i32) -> Outcome<i32, &'static str> { Ok(value) }
//!
//!   assert_eq!(pipe!(Tagged::Raw(2), ~>> scale(3), ~>> cap(10)), Ok(6));
//!   assert_eq!(pipe!(Tagged::Raw(5), ~>> scale(3), ~>> cap(10), <~> fallback(-1)), Ok(-1));
//!   ```
//!
//! A pipeline is always on one of two tracks. `~>>` stages only run while
//! the value is a success and `<~>` stages only run while it is an error;
//! any stage may switch tracks through what it returns.

use std::fmt;

use crate::errors::UnwrapError;
use crate::normalizer;
use crate::tagged::{IntoHandled, IntoTagged, Outcome, Reason};

/// Method-call form of the normalizer operations.
///
/// `x.lift(|v| f(v, a, b))` is exactly `lift(x, |v| f(v, a, b))`.
pub trait Chain: IntoTagged + Sized {
    fn lift<R, F>(self, fun: F) -> Outcome<R::Value, Self::Reason>
    where
        R: IntoTagged<Reason = Self::Reason>,
        F: FnOnce(Self::Value) -> R,
    {
        normalizer::lift(self, fun)
    }

    fn lift_plain<U, F>(self, fun: F) -> Outcome<U, Self::Reason>
    where
        F: FnOnce(Self::Value) -> U,
    {
        normalizer::lift_plain(self, fun)
    }

    fn tfil<R, F>(self, fun: F) -> Outcome<Self::Value, R::Reason>
    where
        R: IntoHandled<Value = Self::Value>,
        F: FnOnce(Reason<Self::Reason>) -> R,
    {
        normalizer::tfil(self, fun)
    }

    fn tfil_plain<G, F>(self, fun: F) -> Outcome<Self::Value, G>
    where
        F: FnOnce(Reason<Self::Reason>) -> G,
    {
        normalizer::tfil_plain(self, fun)
    }

    /// Terminal step; see [`unwrap`](crate::unwrap). Payloads without
    /// `Debug` go through [`unwrap_opaque`](crate::unwrap_opaque) instead.
    fn unwrap_value(self) -> Result<Self::Value, UnwrapError>
    where
        Self::Value: fmt::Debug,
        Self::Reason: fmt::Debug,
    {
        crate::unwrap::unwrap(self)
    }
}

impl<T: IntoTagged> Chain for T {}

/// Chain calls with `~>>` (success track) and `<~>` (error track).
///
/// Each stage is written as a function call whose first argument is left
/// out; the running value is inserted there.
///
/// | stage             | expands to                                   |
/// |-------------------|----------------------------------------------|
/// | `~>> f(a, b)`     | `lift(value, \|v\| f(v, a, b))`              |
/// | `~>> \| f(a, b)`  | `lift_plain(value, \|v\| f(v, a, b))`        |
/// | `<~> h(a)`        | `tfil(value, \|v\| h(v, a))`                 |
/// | `<~> \| h(a)`     | `tfil_plain(value, \|v\| h(v, a))`           |
///
/// Extra arguments are evaluated only when their stage runs.
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };
    ($value:expr, ~>> | $($fun:ident)::+ ( $($arg:expr),* $(,)? ) $(, $($rest:tt)*)?) => {
        $crate::pipe!(
            $crate::lift_plain($value, |v| $($fun)::+(v $(, $arg)*))
            $(, $($rest)*)?
        )
    };
    ($value:expr, ~>> $($fun:ident)::+ ( $($arg:expr),* $(,)? ) $(, $($rest:tt)*)?) => {
        $crate::pipe!(
            $crate::lift($value, |v| $($fun)::+(v $(, $arg)*))
            $(, $($rest)*)?
        )
    };
    ($value:expr, <~> | $($fun:ident)::+ ( $($arg:expr),* $(,)? ) $(, $($rest:tt)*)?) => {
        $crate::pipe!(
            $crate::tfil_plain($value, |v| $($fun)::+(v $(, $arg)*))
            $(, $($rest)*)?
        )
    };
    ($value:expr, <~> $($fun:ident)::+ ( $($arg:expr),* $(,)? ) $(, $($rest:tt)*)?) => {
        $crate::pipe!(
            $crate::tfil($value, |v| $($fun)::+(v $(, $arg)*))
            $(, $($rest)*)?
        )
    };
}
