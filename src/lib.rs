// Export modules for library usage
pub mod chain;
pub mod config;
pub mod errors;
pub mod failure;
pub mod normalizer;
pub mod tagged;
pub mod testkit;
pub mod unwrap;
pub mod validation;

// Re-export commonly used types
pub use crate::tagged::{Handled, IntoHandled, IntoTagged, Outcome, Reason, Tagged};

pub use crate::normalizer::{lift, lift_plain, tfil, tfil_plain};

pub use crate::unwrap::{unwrap, unwrap_opaque, unwrap_with};

pub use crate::chain::Chain;

pub use crate::errors::{ConfigError, UnwrapError};

pub use crate::failure::Failure;

pub use crate::config::{RenderConfig, RenderStyle};

pub use crate::validation::{from_validation, to_validation, validate_all, TaggedValidation};
