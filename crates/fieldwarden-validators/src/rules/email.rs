use crate::patterns::EMAIL_REGEX;
use crate::{Rule, RuleResult, ValidationError, ValueMap};

/// Checks the `local@domain.tld` shape of an email address.
///
/// An empty value gets its own message so the rule can stand alone without a
/// preceding [`RequiredRule`](crate::RequiredRule).
///
/// # Examples
///
/// ```
/// use fieldwarden_validators::{EmailRule, Rule, ValueMap};
///
/// let rule = EmailRule::new();
/// let values = ValueMap::new();
/// assert!(rule.check("ada@example.com", &values).is_ok());
/// assert_eq!(
///     rule.check("ada@example", &values).unwrap_err().message(),
///     "Please enter a valid email address"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct EmailRule {
	missing_message: String,
	message: String,
}

impl EmailRule {
	pub const MISSING_MESSAGE: &'static str = "Email required";
	pub const DEFAULT_MESSAGE: &'static str = "Please enter a valid email address";

	pub fn new() -> Self {
		Self {
			missing_message: Self::MISSING_MESSAGE.to_string(),
			message: Self::DEFAULT_MESSAGE.to_string(),
		}
	}

	/// Message for a value that is present but malformed.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = message.into();
		self
	}

	/// Message for an empty value.
	pub fn with_missing_message(mut self, message: impl Into<String>) -> Self {
		self.missing_message = message.into();
		self
	}
}

impl Default for EmailRule {
	fn default() -> Self {
		Self::new()
	}
}

impl Rule for EmailRule {
	fn check(&self, value: &str, _values: &ValueMap) -> RuleResult {
		if value.is_empty() {
			return Err(ValidationError::new(&*self.missing_message));
		}
		if !EMAIL_REGEX.is_match(value) {
			return Err(ValidationError::new(&*self.message));
		}
		Ok(())
	}
}
