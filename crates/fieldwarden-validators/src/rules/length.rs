use crate::{Rule, RuleResult, ValidationError, ValueMap};

/// Rejects values shorter than `min` characters.
///
/// Length is counted in Unicode scalar values, not bytes.
#[derive(Debug, Clone)]
pub struct MinLengthRule {
	min: usize,
	message: Option<String>,
}

impl MinLengthRule {
	pub fn new(min: usize) -> Self {
		Self { min, message: None }
	}

	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	pub fn min(&self) -> usize {
		self.min
	}
}

impl Rule for MinLengthRule {
	fn check(&self, value: &str, _values: &ValueMap) -> RuleResult {
		if value.chars().count() >= self.min {
			return Ok(());
		}
		let message = self
			.message
			.clone()
			.unwrap_or_else(|| format!("Ensure this value has at least {} characters", self.min));
		Err(ValidationError::new(message))
	}
}

/// [`MinLengthRule`] with a custom message.
pub fn min_length(min: usize, message: impl Into<String>) -> MinLengthRule {
	MinLengthRule::new(min).with_message(message)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case::empty("", false)]
	#[case::one_short("ab", false)]
	#[case::exact("abc", true)]
	#[case::longer("abcd", true)]
	#[case::multibyte("日本語", true)]
	fn test_min_length_three(#[case] value: &str, #[case] ok: bool) {
		let rule = MinLengthRule::new(3);
		assert_eq!(rule.check(value, &ValueMap::new()).is_ok(), ok);
	}

	#[rstest]
	fn test_default_message_mentions_minimum() {
		let err = MinLengthRule::new(10)
			.check("short", &ValueMap::new())
			.unwrap_err();
		assert_eq!(err.message(), "Ensure this value has at least 10 characters");
	}

	#[rstest]
	fn test_custom_message() {
		let rule = min_length(10, "Address must be at least 10 characters");
		let err = rule.check("1 Main St", &ValueMap::new()).unwrap_err();
		assert_eq!(err.message(), "Address must be at least 10 characters");
	}

	#[rstest]
	fn test_constructor_keeps_minimum() {
		assert_eq!(min_length(3, "Name must be at least 3 characters").min(), 3);
		assert_eq!(MinLengthRule::new(0).min(), 0);
	}
}
