//! Styling record handed through to the rendering layer.
//!
//! The controller never applies a theme itself. It keeps the record so a
//! renderer can ask for it, and [`Theme::css_variables`] lists the custom
//! properties a renderer would scope to its own form element.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub accent: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub border: Option<String>,
}

impl Theme {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_accent(mut self, color: impl Into<String>) -> Self {
		self.accent = Some(color.into());
		self
	}

	pub fn with_error(mut self, color: impl Into<String>) -> Self {
		self.error = Some(color.into());
		self
	}

	pub fn with_border(mut self, color: impl Into<String>) -> Self {
		self.border = Some(color.into());
		self
	}

	/// `(custom property, value)` pairs for every color that is set.
	pub fn css_variables(&self) -> Vec<(&'static str, &str)> {
		[
			("--accent", &self.accent),
			("--error", &self.error),
			("--border", &self.border),
		]
		.into_iter()
		.filter_map(|(property, value)| value.as_deref().map(|v| (property, v)))
		.collect()
	}
}
