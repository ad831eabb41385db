//! Field rules for fieldwarden
//!
//! A [`Rule`] inspects one field's raw value, with read access to a snapshot
//! of every field's value, and either accepts it or returns a
//! [`ValidationError`] carrying a human-readable message. Rules are grouped
//! into a [`RuleChain`] that runs them in declaration order and stops at the
//! first failure.
//!
//! ## Built-in rules
//!
//! | Rule | Constructor | Fails when |
//! |------|-------------|------------|
//! | [`RequiredRule`] | [`required`] | value is empty or whitespace |
//! | [`MinLengthRule`] | [`min_length`] | fewer than `n` characters |
//! | [`EmailRule`] | [`EmailRule::new`] | not `local@domain.tld` shaped |
//! | [`PhoneRule`] | [`PhoneRule::new`] | stray characters or < 10 digits |
//! | [`PasswordStrengthRule`] | [`PasswordStrengthRule::new`] | too short or missing a character class |
//! | [`MatchesFieldRule`] | [`matches_field`] | empty or differs from another field |
//! | [`PatternRule`] | [`PatternRule::new`] | regex does not match |
//! | [`FnRule`] | [`rule_fn`] | the closure says so |
//!
//! ## Example
//!
//! ```
//! use fieldwarden_validators::{RuleChain, ValueMap, min_length, required};
//!
//! let chain = RuleChain::new()
//!     .with(required("Name is required"))
//!     .with(min_length(3, "Name must be at least 3 characters"));
//!
//! let values = ValueMap::new();
//! let err = chain.evaluate("  ", &values).unwrap_err();
//! assert_eq!(err.message(), "Name is required");
//! assert!(chain.evaluate("Ada", &values).is_ok());
//! ```

use std::collections::HashMap;

pub mod chain;
pub mod errors;
pub(crate) mod patterns;
pub mod rules;

pub use chain::RuleChain;
pub use errors::{RuleConfigError, RuleResult, ValidationError};
pub use rules::{
	EmailRule, FnRule, MatchesFieldRule, MinLengthRule, PasswordStrengthRule, PatternRule,
	PhoneRule, RequiredRule, matches_field, min_length, required, rule_fn,
};

/// Field name to raw input value.
pub type ValueMap = HashMap<String, String>;

/// A single validation step for one field.
///
/// `values` is a read-only snapshot of the whole form taken when the pass
/// started, which lets a rule compare against other fields. Rules must not
/// depend on another rule having run.
pub trait Rule: Send + Sync {
	fn check(&self, value: &str, values: &ValueMap) -> RuleResult;
}

/// Re-export commonly used types
pub mod prelude {
	pub use super::chain::RuleChain;
	pub use super::errors::{RuleConfigError, RuleResult, ValidationError};
	pub use super::rules::*;
	pub use super::{Rule, ValueMap};
}
