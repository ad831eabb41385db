//! Field descriptors.

use fieldwarden_validators::{Rule, RuleChain, RuleResult, ValueMap};

/// Static description of one form field.
///
/// `name` is the field's identity: values, errors and scheduled validation
/// passes are all keyed by it. `label` is for display only.
///
/// # Examples
///
/// ```
/// use fieldwarden_forms::Field;
/// use fieldwarden_validators::{ValueMap, matches_field, required};
///
/// let confirm = Field::new("confirmPassword", "Confirm Password")
///     .rule(required("Please confirm your password"))
///     .rule(matches_field("password"))
///     .depends_on("password");
///
/// assert_eq!(confirm.dependency(), Some("password"));
/// assert!(confirm.evaluate("", &ValueMap::new()).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Field {
	name: String,
	label: String,
	rules: RuleChain,
	depends_on: Option<String>,
}

impl Field {
	pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: label.into(),
			rules: RuleChain::new(),
			depends_on: None,
		}
	}

	/// Append a rule to this field's chain.
	pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
		self.rules.push(rule);
		self
	}

	/// Replace this field's chain.
	pub fn with_rules(mut self, rules: RuleChain) -> Self {
		self.rules = rules;
		self
	}

	/// Re-validate this field whenever `primary` changes.
	///
	/// Used for confirmation fields whose rules read `primary` from the
	/// value snapshot.
	pub fn depends_on(mut self, primary: impl Into<String>) -> Self {
		self.depends_on = Some(primary.into());
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn label(&self) -> &str {
		&self.label
	}

	pub fn rule_chain(&self) -> &RuleChain {
		&self.rules
	}

	/// Name of the primary field this one depends on.
	pub fn dependency(&self) -> Option<&str> {
		self.depends_on.as_deref()
	}

	/// Run this field's rules on `value` with `values` as the cross-field snapshot.
	pub fn evaluate(&self, value: &str, values: &ValueMap) -> RuleResult {
		self.rules.evaluate(value, values)
	}

	/// Run this field's rules on its own entry in `values`.
	///
	/// A field with no entry is evaluated as the empty string.
	pub fn evaluate_in(&self, values: &ValueMap) -> RuleResult {
		let value = values.get(&self.name).map(String::as_str).unwrap_or("");
		self.evaluate(value, values)
	}
}
