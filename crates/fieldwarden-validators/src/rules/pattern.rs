use crate::{Rule, RuleConfigError, RuleResult, ValidationError, ValueMap};
use regex::Regex;

/// Requires the value to match a regular expression.
///
/// # Examples
///
/// ```
/// use fieldwarden_validators::{PatternRule, Rule, ValueMap};
///
/// let zip = PatternRule::new(r"^\d{3}-?\d{4}$")
///     .unwrap()
///     .with_message("Enter a 7 digit postal code");
/// assert!(zip.check("150-0002", &ValueMap::new()).is_ok());
/// assert!(zip.check("15000", &ValueMap::new()).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PatternRule {
	regex: Regex,
	message: String,
}

impl PatternRule {
	pub const DEFAULT_MESSAGE: &'static str = "Enter a valid value";

	/// Compile `pattern`.
	///
	/// # Errors
	///
	/// Returns [`RuleConfigError::InvalidPattern`] if the pattern does not compile.
	pub fn new(pattern: &str) -> Result<Self, RuleConfigError> {
		Ok(Self {
			regex: Regex::new(pattern)?,
			message: Self::DEFAULT_MESSAGE.to_string(),
		})
	}

	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = message.into();
		self
	}

	pub fn pattern(&self) -> &str {
		self.regex.as_str()
	}
}

impl Rule for PatternRule {
	fn check(&self, value: &str, _values: &ValueMap) -> RuleResult {
		if self.regex.is_match(value) {
			Ok(())
		} else {
			Err(ValidationError::new(&*self.message))
		}
	}
}
