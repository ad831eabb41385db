use crate::{Rule, RuleResult, ValidationError, ValueMap};

/// Rejects empty and whitespace-only values.
///
/// # Examples
///
/// ```
/// use fieldwarden_validators::{Rule, ValueMap, required};
///
/// let rule = required("City is required");
/// let values = ValueMap::new();
/// assert!(rule.check("Osaka", &values).is_ok());
/// assert_eq!(rule.check(" \t", &values).unwrap_err().message(), "City is required");
/// ```
#[derive(Debug, Clone)]
pub struct RequiredRule {
	message: String,
}

impl RequiredRule {
	pub const DEFAULT_MESSAGE: &'static str = "This field is required";

	pub fn new() -> Self {
		Self {
			message: Self::DEFAULT_MESSAGE.to_string(),
		}
	}

	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = message.into();
		self
	}
}

impl Default for RequiredRule {
	fn default() -> Self {
		Self::new()
	}
}

impl Rule for RequiredRule {
	fn check(&self, value: &str, _values: &ValueMap) -> RuleResult {
		if value.trim().is_empty() {
			return Err(ValidationError::new(&*self.message));
		}
		Ok(())
	}
}

/// [`RequiredRule`] with a custom message.
pub fn required(message: impl Into<String>) -> RequiredRule {
	RequiredRule::new().with_message(message)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case::empty("")]
	#[case::spaces("   ")]
	#[case::tabs_and_newlines("\t\n")]
	#[case::unicode_space("\u{3000}")]
	fn test_blank_values_fail(#[case] value: &str) {
		let rule = RequiredRule::new();
		let err = rule.check(value, &ValueMap::new()).unwrap_err();
		assert_eq!(err.message(), RequiredRule::DEFAULT_MESSAGE);
	}

	#[rstest]
	#[case::word("a")]
	#[case::padded("  a  ")]
	fn test_non_blank_values_pass(#[case] value: &str) {
		assert!(RequiredRule::new().check(value, &ValueMap::new()).is_ok());
	}

	#[rstest]
	fn test_custom_message() {
		let rule = required("Zip code is required");
		let err = rule.check("", &ValueMap::new()).unwrap_err();
		assert_eq!(err.message(), "Zip code is required");
	}
}
