//! Tagged values and the reasons errors carry.
//!
//! A [`Tagged`] value is one of four shapes:
//!
//! - `Raw(v)`: a value with no success or error tag
//! - `Ok(v)`: a success-tagged value
//! - `Err(reason)`: an error-tagged value
//! - `ErrMarker`: an error with no specific reason
//!
//! The normalizing operations accept any of these and always answer with an
//! [`Outcome`], which is a plain `Result`. Because the output is a `Result`,
//! a normalized value can never be raw or the bare sentinel.
//!
//! # Example
//!
//! ```rust
//! use liftfil::{lift, Reason, Tagged};
//!
//! let doubled = lift(Tagged::<i32, &str>::Raw(21), |v| Tagged::Raw(v * 2));
//! assert_eq!(doubled, Ok(42));
//!
//! let failed = lift(Tagged::<i32, &str>::err("boom"), |v| Tagged::Raw(v * 2));
//! assert_eq!(failed, Err(Reason::Plain("boom")));
//! ```

use std::fmt;

use crate::failure::Failure;

/// Normalized result of [`lift`](crate::lift) and [`tfil`](crate::tfil).
pub type Outcome<T, E> = Result<T, Reason<E>>;

/// What an error-tagged value carries.
#[derive(Debug, Clone, PartialEq)]
pub enum Reason<E> {
    /// The bare error sentinel used as a reason.
    Marker,
    /// An ordinary reason value.
    Plain(E),
    /// A raisable error object; `unwrap` hands it back as-is.
    Raised(Failure),
}

impl<E> Reason<E> {
    pub fn raised<X>(error: X) -> Self
    where
        X: std::error::Error + Send + Sync + 'static,
    {
        Self::Raised(Failure::new(error))
    }

    pub fn is_marker(&self) -> bool {
        matches!(self, Self::Marker)
    }

    pub fn is_raised(&self) -> bool {
        matches!(self, Self::Raised(_))
    }

    /// Borrow the plain reason, if this is one.
    pub fn as_plain(&self) -> Option<&E> {
        match self {
            Self::Plain(reason) => Some(reason),
            _ => None,
        }
    }

    /// Map the plain reason, leaving markers and raised failures alone.
    pub fn map<F>(self, f: impl FnOnce(E) -> F) -> Reason<F> {
        match self {
            Self::Marker => Reason::Marker,
            Self::Plain(reason) => Reason::Plain(f(reason)),
            Self::Raised(failure) => Reason::Raised(failure),
        }
    }
}

impl<E: fmt::Debug> Reason<E> {
    /// Human-readable rendering used in messages.
    ///
    /// Plain reasons render through `Debug`, raised failures through
    /// `Display`, and the marker as `ErrMarker`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl<E: fmt::Debug> fmt::Display for Reason<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Marker => write!(f, "ErrMarker"),
            Self::Plain(reason) => write!(f, "{:?}", reason),
            Self::Raised(failure) => write!(f, "{}", failure),
        }
    }
}

impl<E> From<E> for Reason<E> {
    fn from(reason: E) -> Self {
        Self::Plain(reason)
    }
}

/// A value in one of the four shapes the normalizer understands.
///
/// Shapes carrying more than one payload (an error with two fields, say)
/// have no variant here; hold them as `Raw((a, b))`.
#[derive(Debug, Clone, PartialEq)]
pub enum Tagged<T, E> {
    Raw(T),
    Ok(T),
    Err(Reason<E>),
    ErrMarker,
}

impl<T, E> Tagged<T, E> {
    pub fn ok(value: T) -> Self {
        Self::Ok(value)
    }

    /// Error-tag a plain reason.
    pub fn err(reason: E) -> Self {
        Self::Err(Reason::Plain(reason))
    }

    /// Error-tag a raisable error object.
    pub fn raised<X>(error: X) -> Self
    where
        X: std::error::Error + Send + Sync + 'static,
    {
        Self::Err(Reason::raised(error))
    }

    /// True for `Err` and `ErrMarker`.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Err(_) | Self::ErrMarker)
    }

    /// True for `Ok` and `Raw`.
    pub fn is_success(&self) -> bool {
        !self.is_error()
    }

    /// Short name of the shape, used in log lines.
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Raw(_) => "raw",
            Self::Ok(_) => "ok",
            Self::Err(_) => "err",
            Self::ErrMarker => "err_marker",
        }
    }

    /// Collapse into an [`Outcome`] with the success-side reading:
    /// `Raw` becomes `Ok`, `ErrMarker` becomes `Err(Marker)`.
    pub fn normalize(self) -> Outcome<T, E> {
        match self {
            Self::Raw(value) | Self::Ok(value) => Ok(value),
            Self::Err(reason) => Err(reason),
            Self::ErrMarker => Err(Reason::Marker),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Tagged<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Ok(value) => Self::Ok(value),
            Err(reason) => Self::Err(reason),
        }
    }
}

impl<T, E> From<Reason<E>> for Tagged<T, E> {
    fn from(reason: Reason<E>) -> Self {
        Self::Err(reason)
    }
}

/// Anything the normalizer accepts as input, or as a callback's return.
///
/// Implemented for [`Tagged`] and for [`Outcome`], so the output of one
/// stage feeds straight into the next.
pub trait IntoTagged {
    type Value;
    type Reason;

    fn into_tagged(self) -> Tagged<Self::Value, Self::Reason>;
}

impl<T, E> IntoTagged for Tagged<T, E> {
    type Value = T;
    type Reason = E;

    fn into_tagged(self) -> Tagged<T, E> {
        self
    }
}

impl<T, E> IntoTagged for Result<T, Reason<E>> {
    type Value = T;
    type Reason = E;

    fn into_tagged(self) -> Tagged<T, E> {
        Tagged::from(self)
    }
}

/// What an error handler passed to [`tfil`](crate::tfil) may return.
///
/// There is no raw case: an untagged handler return is always an error
/// reason and goes through [`tfil_plain`](crate::tfil_plain).
#[derive(Debug, Clone, PartialEq)]
pub enum Handled<T, E> {
    Ok(T),
    Err(Reason<E>),
    ErrMarker,
}

impl<T, E> Handled<T, E> {
    /// Error-tag a plain reason.
    pub fn err(reason: E) -> Self {
        Self::Err(Reason::Plain(reason))
    }

    pub fn normalize(self) -> Outcome<T, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(reason) => Err(reason),
            Self::ErrMarker => Err(Reason::Marker),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Handled<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Ok(value) => Self::Ok(value),
            Err(reason) => Self::Err(reason),
        }
    }
}

/// Return types accepted from [`tfil`](crate::tfil) handlers.
///
/// Implemented for [`Handled`] and [`Outcome`] only; [`Tagged`] is left out
/// so a handler cannot hand back a raw value.
pub trait IntoHandled {
    type Value;
    type Reason;

    fn into_handled(self) -> Handled<Self::Value, Self::Reason>;
}

impl<T, E> IntoHandled for Handled<T, E> {
    type Value = T;
    type Reason = E;

    fn into_handled(self) -> Handled<T, E> {
        self
    }
}

impl<T, E> IntoHandled for Result<T, Reason<E>> {
    type Value = T;
    type Reason = E;

    fn into_handled(self) -> Handled<T, E> {
        Handled::from(self)
    }
}
