//! The terminal accessor.
//!
//! [`unwrap`] is the only operation in the crate that fails by design:
//!
//! - `Ok(v)` gives back `v`
//! - `Err(Raised(obj))` gives back `obj` itself as [`UnwrapError::Raised`]
//! - any other `Err(reason)` becomes [`UnwrapError::Runtime`]
//! - `Raw` and `ErrMarker` become [`UnwrapError::InvalidArgument`]

use std::fmt;

use crate::config::RenderConfig;
use crate::errors::UnwrapError;
use crate::tagged::{IntoTagged, Reason, Tagged};

/// Extract the success payload of `input`, using the default render config
/// for failure messages.
///
/// The payload must be `Debug` so a `Raw` input can be shown in the
/// invalid-argument message. Use [`unwrap_opaque`] for payloads without it.
///
/// # Example
///
/// ```rust
/// use liftfil::{unwrap, Tagged, UnwrapError};
///
/// assert_eq!(unwrap(Tagged::<i32, ()>::Ok(42)), Ok(42));
/// assert!(matches!(
///     unwrap(Tagged::<i32, ()>::Raw(123)),
///     Err(UnwrapError::InvalidArgument { .. })
/// ));
/// ```
pub fn unwrap<I>(input: I) -> Result<I::Value, UnwrapError>
where
    I: IntoTagged,
    I::Value: fmt::Debug,
    I::Reason: fmt::Debug,
{
    unwrap_with(input, &RenderConfig::default())
}

/// [`unwrap`] with an explicit render config.
pub fn unwrap_with<I>(input: I, config: &RenderConfig) -> Result<I::Value, UnwrapError>
where
    I: IntoTagged,
    I::Value: fmt::Debug,
    I::Reason: fmt::Debug,
{
    extract(input, config, |raw| config.render(raw))
}

/// [`unwrap`] for payloads that are not `Debug`.
///
/// A `Raw` input is reported as `Raw(..)`; every other case matches
/// [`unwrap_with`].
///
/// ```rust
/// use liftfil::{unwrap_opaque, RenderConfig, Tagged, UnwrapError};
///
/// struct Handle(u32);
///
/// let config = RenderConfig::default();
/// let handle = unwrap_opaque(Tagged::<Handle, ()>::Ok(Handle(3)), &config);
/// assert!(matches!(handle, Ok(Handle(3))));
///
/// let err = unwrap_opaque(Tagged::<Handle, ()>::Raw(Handle(3)), &config);
/// assert!(matches!(err, Err(UnwrapError::InvalidArgument { .. })));
/// ```
pub fn unwrap_opaque<I>(input: I, config: &RenderConfig) -> Result<I::Value, UnwrapError>
where
    I: IntoTagged,
    I::Reason: fmt::Debug,
{
    extract(input, config, |_| config.truncate("Raw(..)".to_string()))
}

fn extract<I, F>(input: I, config: &RenderConfig, render_raw: F) -> Result<I::Value, UnwrapError>
where
    I: IntoTagged,
    I::Reason: fmt::Debug,
    F: FnOnce(&Tagged<I::Value, I::Reason>) -> String,
{
    let err = match input.into_tagged() {
        Tagged::Ok(value) => return Ok(value),
        Tagged::Err(Reason::Raised(failure)) => UnwrapError::Raised(failure),
        Tagged::Err(Reason::Plain(reason)) => {
            let rendered = config.render(&reason);
            UnwrapError::runtime(config.message("runtime error", &rendered))
        }
        Tagged::Err(Reason::Marker) => {
            let rendered = config.truncate(Reason::<I::Reason>::Marker.render());
            UnwrapError::runtime(config.message("runtime error", &rendered))
        }
        raw @ Tagged::Raw(_) => {
            let rendered = render_raw(&raw);
            UnwrapError::invalid_argument(config.message("invalid argument", &rendered))
        }
        Tagged::ErrMarker => {
            let rendered = config.truncate("ErrMarker".to_string());
            UnwrapError::invalid_argument(config.message("invalid argument", &rendered))
        }
    };

    log::debug!("unwrap failed ({}): {}", err.category(), err);
    Err(err)
}
