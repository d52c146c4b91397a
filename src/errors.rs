//! Error types for liftfil operations.
//!
//! `lift` and `tfil` never fail on their own: errors flowing through them are
//! data ([`Reason`](crate::Reason)). The only failures this crate introduces
//! are the terminal ones from [`unwrap`](crate::unwrap), plus configuration
//! loading errors.
//!
//! # Example
//!
//! ```rust
//! use liftfil::{unwrap, Tagged, UnwrapError};
//!
//! let err = unwrap(Tagged::<i32, &str>::err("fail")).unwrap_err();
//! assert!(matches!(err, UnwrapError::Runtime { .. }));
//! assert!(err.to_string().contains("fail"));
//! ```

use std::path::PathBuf;

use thiserror::Error;

use crate::failure::Failure;

/// Why [`unwrap`](crate::unwrap) refused to hand back a value.
///
/// # Categories
///
/// - `Raised`: the error reason was a raisable object; it is returned as-is
/// - `Runtime`: the error reason was a plain value
/// - `InvalidArgument`: the input was not a success or error shape
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnwrapError {
    /// The wrapped reason itself, unchanged.
    #[error(transparent)]
    Raised(Failure),

    /// Generic runtime error carrying a rendering of a plain reason.
    #[error("{message}")]
    Runtime { message: String },

    /// The input was neither success- nor error-tagged.
    #[error("{message}")]
    InvalidArgument { message: String },
}

impl UnwrapError {
    pub fn runtime(message: impl Into<String>) -> Self {
        Self::Runtime {
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Get the error category name.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Raised(_) => "raised",
            Self::Runtime { .. } => "runtime error",
            Self::InvalidArgument { .. } => "invalid argument",
        }
    }

    /// The re-raised object, if this is one.
    pub fn as_failure(&self) -> Option<&Failure> {
        match self {
            Self::Raised(failure) => Some(failure),
            _ => None,
        }
    }

    /// Convert into a [`Failure`], handing back the original object for
    /// `Raised` and wrapping the error itself otherwise.
    pub fn into_failure(self) -> Failure {
        match self {
            Self::Raised(failure) => failure,
            other => Failure::new(other),
        }
    }
}

/// Errors loading a render configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("upstream gone")]
    struct UpstreamGone;

    #[test]
    fn test_categories() {
        assert_eq!(UnwrapError::runtime("x").category(), "runtime error");
        assert_eq!(
            UnwrapError::invalid_argument("x").category(),
            "invalid argument"
        );
        assert_eq!(
            UnwrapError::Raised(Failure::new(UpstreamGone)).category(),
            "raised"
        );
    }

    #[test]
    fn test_raised_is_transparent() {
        let err = UnwrapError::Raised(Failure::new(UpstreamGone));
        assert_eq!(err.to_string(), "upstream gone");
    }

    #[test]
    fn test_into_failure_returns_original_object() {
        let original = Failure::new(UpstreamGone);
        let err = UnwrapError::Raised(original.clone());
        assert!(err.into_failure().ptr_eq(&original));
    }

    #[test]
    fn test_into_failure_wraps_other_kinds() {
        let failure = UnwrapError::runtime("boom").into_failure();
        assert_eq!(
            failure.downcast_ref::<UnwrapError>(),
            Some(&UnwrapError::runtime("boom"))
        );
    }

    #[test]
    fn test_config_error_from_toml() {
        let parse_err = toml::from_str::<toml::Table>("= nope").unwrap_err();
        let err = ConfigError::from(parse_err);
        assert!(err.to_string().starts_with("failed to parse config"));
    }
}
