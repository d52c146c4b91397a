//! Type-erased raisable error objects.
//!
//! A [`Failure`] lets an error reason carry a real error value whose concrete
//! type survives the trip through a pipeline. When [`unwrap`](crate::unwrap)
//! meets one, it returns that same object instead of wrapping it in a
//! generic runtime error, so upstream handlers can still downcast to the
//! specific kind.

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// A shared, type-erased error object.
///
/// Cloning is cheap and clones share identity: `a.ptr_eq(&b)` holds for a
/// failure and all of its clones, and equality is defined as identity.
#[derive(Clone)]
pub struct Failure(Arc<dyn StdError + Send + Sync + 'static>);

impl Failure {
    pub fn new<X>(error: X) -> Self
    where
        X: StdError + Send + Sync + 'static,
    {
        Self(Arc::new(error))
    }

    /// Check whether the wrapped object is of type `X`.
    pub fn is<X: StdError + 'static>(&self) -> bool {
        self.0.is::<X>()
    }

    /// Borrow the wrapped object as its concrete type.
    pub fn downcast_ref<X: StdError + 'static>(&self) -> Option<&X> {
        self.0.downcast_ref::<X>()
    }

    /// True when both handles point at the same object.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl From<Box<dyn StdError + Send + Sync + 'static>> for Failure {
    fn from(error: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        Self(Arc::from(error))
    }
}

impl PartialEq for Failure {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Failure").field(&self.0).finish()
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl StdError for Failure {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, thiserror::Error)]
    #[error("quota exceeded for {0}")]
    struct QuotaExceeded(String);

    #[derive(Debug, thiserror::Error)]
    #[error("other")]
    struct Other;

    #[test]
    fn test_downcast_recovers_concrete_kind() {
        let failure = Failure::new(QuotaExceeded("alice".into()));

        assert!(failure.is::<QuotaExceeded>());
        assert!(!failure.is::<Other>());
        assert_eq!(
            failure.downcast_ref::<QuotaExceeded>(),
            Some(&QuotaExceeded("alice".into()))
        );
    }

    #[test]
    fn test_equality_is_identity() {
        let a = Failure::new(Other);
        let b = a.clone();
        let c = Failure::new(Other);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_display_forwards_to_inner() {
        let failure = Failure::new(QuotaExceeded("bob".into()));
        assert_eq!(failure.to_string(), "quota exceeded for bob");
    }

    #[test]
    fn test_from_boxed_error() {
        let boxed: Box<dyn StdError + Send + Sync> = Box::new(Other);
        let failure = Failure::from(boxed);
        assert!(failure.is::<Other>());
    }
}
