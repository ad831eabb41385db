use crate::{Rule, RuleResult, ValidationError, ValueMap};

/// Password strength policy.
///
/// Checks run in a fixed order and the first failing one is reported:
///
/// 1. not empty
/// 2. at least `min_length` characters (8 by default)
/// 3. an ASCII uppercase letter
/// 4. an ASCII lowercase letter
/// 5. an ASCII digit
///
/// # Examples
///
/// ```
/// use fieldwarden_validators::{PasswordStrengthRule, Rule, ValueMap};
///
/// let rule = PasswordStrengthRule::new();
/// let values = ValueMap::new();
/// assert!(rule.check("Abcdefg1", &values).is_ok());
/// assert_eq!(
///     rule.check("Ab1", &values).unwrap_err().message(),
///     "Password must be at least 8 characters"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct PasswordStrengthRule {
	min_length: usize,
}

impl PasswordStrengthRule {
	pub const DEFAULT_MIN_LENGTH: usize = 8;
	pub const MISSING_MESSAGE: &'static str = "Password required";
	pub const UPPERCASE_MESSAGE: &'static str =
		"Password must contain at least one uppercase letter";
	pub const LOWERCASE_MESSAGE: &'static str =
		"Password must contain at least one lowercase letter";
	pub const DIGIT_MESSAGE: &'static str = "Password must contain at least one number";

	pub fn new() -> Self {
		Self {
			min_length: Self::DEFAULT_MIN_LENGTH,
		}
	}

	pub fn with_min_length(mut self, min_length: usize) -> Self {
		self.min_length = min_length;
		self
	}

	pub fn min_length(&self) -> usize {
		self.min_length
	}
}

impl Default for PasswordStrengthRule {
	fn default() -> Self {
		Self::new()
	}
}

impl Rule for PasswordStrengthRule {
	fn check(&self, value: &str, _values: &ValueMap) -> RuleResult {
		if value.is_empty() {
			return Err(ValidationError::new(Self::MISSING_MESSAGE));
		}
		if value.chars().count() < self.min_length {
			return Err(ValidationError::new(format!(
				"Password must be at least {} characters",
				self.min_length
			)));
		}
		if !value.chars().any(|c| c.is_ascii_uppercase()) {
			return Err(ValidationError::new(Self::UPPERCASE_MESSAGE));
		}
		if !value.chars().any(|c| c.is_ascii_lowercase()) {
			return Err(ValidationError::new(Self::LOWERCASE_MESSAGE));
		}
		if !value.chars().any(|c| c.is_ascii_digit()) {
			return Err(ValidationError::new(Self::DIGIT_MESSAGE));
		}
		Ok(())
	}
}
