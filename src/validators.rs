//! Field rules and the rule chain.
//!
//! # Examples
//!
//! ```rust
//! use fieldwarden::validators::{EmailRule, Rule, ValueMap};
//!
//! let err = EmailRule::new().check("ada@", &ValueMap::new()).unwrap_err();
//! assert_eq!(err.message(), "Please enter a valid email address");
//! ```

#[cfg(feature = "validators")]
pub use fieldwarden_validators::*;
