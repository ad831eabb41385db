use crate::patterns::PHONE_CHARS_REGEX;
use crate::{Rule, RuleResult, ValidationError, ValueMap};

/// Loose phone number check.
///
/// Accepts digits, whitespace, `-`, `+` and parentheses, and requires at
/// least [`PhoneRule::MIN_DIGITS`] digits once everything else is stripped.
#[derive(Debug, Clone)]
pub struct PhoneRule {
	missing_message: String,
	message: String,
}

impl PhoneRule {
	pub const MIN_DIGITS: usize = 10;
	pub const MISSING_MESSAGE: &'static str = "Phone required";
	pub const DEFAULT_MESSAGE: &'static str = "Please enter a valid phone number";

	pub fn new() -> Self {
		Self {
			missing_message: Self::MISSING_MESSAGE.to_string(),
			message: Self::DEFAULT_MESSAGE.to_string(),
		}
	}

	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = message.into();
		self
	}

	pub fn with_missing_message(mut self, message: impl Into<String>) -> Self {
		self.missing_message = message.into();
		self
	}
}

impl Default for PhoneRule {
	fn default() -> Self {
		Self::new()
	}
}

impl Rule for PhoneRule {
	fn check(&self, value: &str, _values: &ValueMap) -> RuleResult {
		if value.is_empty() {
			return Err(ValidationError::new(&*self.missing_message));
		}
		let digits = value.chars().filter(char::is_ascii_digit).count();
		if !PHONE_CHARS_REGEX.is_match(value) || digits < Self::MIN_DIGITS {
			return Err(ValidationError::new(&*self.message));
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case::bare_digits("0312345678")]
	#[case::formatted("(555) 123-4567")]
	#[case::international("+81 3 1234 5678")]
	fn test_valid_numbers(#[case] value: &str) {
		assert!(PhoneRule::new().check(value, &ValueMap::new()).is_ok());
	}

	#[rstest]
	#[case::too_few_digits("555-1234")]
	#[case::letters("555-123-ABCD")]
	#[case::extension_marker("5551234567 x12")]
	#[case::punctuation_only("()-+ ")]
	fn test_invalid_numbers(#[case] value: &str) {
		let err = PhoneRule::new().check(value, &ValueMap::new()).unwrap_err();
		assert_eq!(err.message(), PhoneRule::DEFAULT_MESSAGE);
	}

	#[rstest]
	fn test_empty_value_has_its_own_message() {
		let err = PhoneRule::new().check("", &ValueMap::new()).unwrap_err();
		assert_eq!(err.message(), PhoneRule::MISSING_MESSAGE);
	}
}
