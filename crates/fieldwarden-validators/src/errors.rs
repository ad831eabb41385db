/// A failed rule: one human-readable message, no structured code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
	message: String,
}

impl ValidationError {
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
		}
	}

	pub fn message(&self) -> &str {
		&self.message
	}

	pub fn into_message(self) -> String {
		self.message
	}
}

impl From<&str> for ValidationError {
	fn from(message: &str) -> Self {
		Self::new(message)
	}
}

impl From<String> for ValidationError {
	fn from(message: String) -> Self {
		Self::new(message)
	}
}

pub type RuleResult = Result<(), ValidationError>;

/// Errors raised while constructing a rule
#[derive(Debug, thiserror::Error)]
pub enum RuleConfigError {
	#[error("Invalid pattern: {0}")]
	InvalidPattern(#[from] regex::Error),
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_validation_error_displays_its_message() {
		let err = ValidationError::new("Name is required");
		assert_eq!(err.to_string(), "Name is required");
		assert_eq!(err.message(), "Name is required");
	}

	#[rstest]
	fn test_validation_error_from_string() {
		let err: ValidationError = format!("at least {} characters", 3).into();
		assert_eq!(err.into_message(), "at least 3 characters");
	}
}
