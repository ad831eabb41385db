//! Ordered, short-circuiting rule evaluation.

use crate::{Rule, RuleResult, ValueMap};
use std::fmt;
use std::sync::Arc;

/// The ordered rules of one field.
///
/// Rules run in the order they were added. The first rule that fails decides
/// the outcome: its message is returned and the remaining rules are not run.
/// An empty chain accepts every value.
///
/// Cloning a chain is cheap; the rules themselves are shared.
#[derive(Clone, Default)]
pub struct RuleChain {
	rules: Vec<Arc<dyn Rule>>,
}

impl RuleChain {
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a rule, builder style.
	pub fn with<R: Rule + 'static>(mut self, rule: R) -> Self {
		self.push(rule);
		self
	}

	/// Append a rule.
	pub fn push<R: Rule + 'static>(&mut self, rule: R) {
		self.rules.push(Arc::new(rule));
	}

	/// Append a rule that is already shared with other chains.
	pub fn push_shared(&mut self, rule: Arc<dyn Rule>) {
		self.rules.push(rule);
	}

	pub fn len(&self) -> usize {
		self.rules.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rules.is_empty()
	}

	/// Run the chain against `value`, with `values` as the cross-field snapshot.
	pub fn evaluate(&self, value: &str, values: &ValueMap) -> RuleResult {
		for (position, rule) in self.rules.iter().enumerate() {
			if let Err(err) = rule.check(value, values) {
				tracing::trace!(position, message = err.message(), "rule chain stopped");
				return Err(err);
			}
		}
		Ok(())
	}
}

impl FromIterator<Arc<dyn Rule>> for RuleChain {
	fn from_iter<I: IntoIterator<Item = Arc<dyn Rule>>>(iter: I) -> Self {
		Self {
			rules: iter.into_iter().collect(),
		}
	}
}

impl fmt::Debug for RuleChain {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RuleChain")
			.field("rules", &self.rules.len())
			.finish()
	}
}
