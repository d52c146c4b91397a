//! Testing helpers for code built on liftfil.
//!
//! - **Assertion macros** for outcomes, unwrap failures and validations
//!
//! # Quick Start
//!
//! ```rust
//! use liftfil::{assert_unwrap_kind, unwrap, Tagged};
//!
//! let err = assert_unwrap_kind!(unwrap(Tagged::<i32, &str>::err("fail")), Runtime);
//! assert!(err.to_string().contains("fail"));
//! ```

pub mod assertions;
