use crate::{Rule, RuleResult, ValidationError, ValueMap};

/// Requires the value to equal another field's current value.
///
/// The companion value is read from the snapshot passed to
/// [`Rule::check`]; a companion that is missing from the snapshot compares as
/// the empty string.
///
/// # Examples
///
/// ```
/// use fieldwarden_validators::{Rule, ValueMap, matches_field};
///
/// let rule = matches_field("password");
/// let mut values = ValueMap::new();
/// values.insert("password".to_string(), "Abcdefg1".to_string());
///
/// assert!(rule.check("Abcdefg1", &values).is_ok());
/// assert_eq!(rule.check("Abcdefg2", &values).unwrap_err().message(), "Passwords do not match");
/// ```
#[derive(Debug, Clone)]
pub struct MatchesFieldRule {
	other: String,
	missing_message: String,
	message: String,
}

impl MatchesFieldRule {
	pub const MISSING_MESSAGE: &'static str = "Please confirm your password";
	pub const DEFAULT_MESSAGE: &'static str = "Passwords do not match";

	pub fn new(other: impl Into<String>) -> Self {
		Self {
			other: other.into(),
			missing_message: Self::MISSING_MESSAGE.to_string(),
			message: Self::DEFAULT_MESSAGE.to_string(),
		}
	}

	/// Message for a value that differs from the companion field.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = message.into();
		self
	}

	/// Message for an empty value.
	pub fn with_missing_message(mut self, message: impl Into<String>) -> Self {
		self.missing_message = message.into();
		self
	}

	/// Name of the field this one must match.
	pub fn other(&self) -> &str {
		&self.other
	}
}

impl Rule for MatchesFieldRule {
	fn check(&self, value: &str, values: &ValueMap) -> RuleResult {
		if value.is_empty() {
			return Err(ValidationError::new(&*self.missing_message));
		}
		let other = values.get(&self.other).map(String::as_str).unwrap_or("");
		if value != other {
			return Err(ValidationError::new(&*self.message));
		}
		Ok(())
	}
}

/// [`MatchesFieldRule`] against `other` with the default messages.
pub fn matches_field(other: impl Into<String>) -> MatchesFieldRule {
	MatchesFieldRule::new(other)
}
