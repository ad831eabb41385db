//! Form state controller.
//!
//! # Examples
//!
//! ```rust,no_run
//! use fieldwarden::forms::{FormController, registration_fields};
//! ```

#[cfg(feature = "forms")]
pub use fieldwarden_forms::*;
