use crate::{Rule, RuleResult, ValueMap};
use std::fmt;

/// A rule backed by a closure.
pub struct FnRule<F> {
	check: F,
}

impl<F> Rule for FnRule<F>
where
	F: Fn(&str, &ValueMap) -> RuleResult + Send + Sync,
{
	fn check(&self, value: &str, values: &ValueMap) -> RuleResult {
		(self.check)(value, values)
	}
}

impl<F> fmt::Debug for FnRule<F> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FnRule").finish_non_exhaustive()
	}
}

/// Turn a closure into a [`Rule`].
///
/// # Examples
///
/// ```
/// use fieldwarden_validators::{Rule, ValidationError, ValueMap, rule_fn};
///
/// let no_admin = rule_fn(|value: &str, _values: &ValueMap| {
///     if value.eq_ignore_ascii_case("admin") {
///         Err(ValidationError::new("That name is reserved"))
///     } else {
///         Ok(())
///     }
/// });
/// assert!(no_admin.check("ADMIN", &ValueMap::new()).is_err());
/// ```
pub fn rule_fn<F>(check: F) -> FnRule<F>
where
	F: Fn(&str, &ValueMap) -> RuleResult + Send + Sync,
{
	FnRule { check }
}
