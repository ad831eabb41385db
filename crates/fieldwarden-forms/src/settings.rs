//! Form timing configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Errors raised while loading [`FormSettings`]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("Failed to parse form settings: {0}")]
	Parse(#[from] toml::de::Error),
}

/// Timing knobs of a [`FormController`](crate::FormController).
///
/// Every key is optional when deserializing; missing keys take the defaults
/// below.
///
/// | Key | Default |
/// |-----|---------|
/// | `validation_delay_ms` | 250 |
/// | `diagnostics_interval_ms` | 500 |
/// | `diagnostics_enabled` | `true` |
///
/// # Examples
///
/// ```
/// use fieldwarden_forms::FormSettings;
/// use std::time::Duration;
///
/// let settings = FormSettings::from_toml_str("validation_delay_ms = 400").unwrap();
/// assert_eq!(settings.validation_delay(), Duration::from_millis(400));
/// assert_eq!(settings.diagnostics_interval(), Duration::from_millis(500));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
	/// Quiet period before a field's validation pass runs
	pub validation_delay_ms: u64,
	/// Minimum spacing of diagnostics notifications
	pub diagnostics_interval_ms: u64,
	/// Whether change events feed the diagnostics channel at all
	pub diagnostics_enabled: bool,
}

impl FormSettings {
	pub const DEFAULT_VALIDATION_DELAY_MS: u64 = 250;
	pub const DEFAULT_DIAGNOSTICS_INTERVAL_MS: u64 = 500;

	pub fn new() -> Self {
		Self {
			validation_delay_ms: Self::DEFAULT_VALIDATION_DELAY_MS,
			diagnostics_interval_ms: Self::DEFAULT_DIAGNOSTICS_INTERVAL_MS,
			diagnostics_enabled: true,
		}
	}

	/// Parse settings from a TOML document.
	///
	/// # Errors
	///
	/// Returns [`SettingsError::Parse`] for malformed TOML or mistyped keys.
	pub fn from_toml_str(source: &str) -> Result<Self, SettingsError> {
		Ok(toml::from_str(source)?)
	}

	pub fn with_validation_delay(mut self, delay: Duration) -> Self {
		self.validation_delay_ms = saturating_millis(delay);
		self
	}

	pub fn with_diagnostics_interval(mut self, interval: Duration) -> Self {
		self.diagnostics_interval_ms = saturating_millis(interval);
		self
	}

	pub fn with_diagnostics_enabled(mut self, enabled: bool) -> Self {
		self.diagnostics_enabled = enabled;
		self
	}

	pub fn validation_delay(&self) -> Duration {
		Duration::from_millis(self.validation_delay_ms)
	}

	pub fn diagnostics_interval(&self) -> Duration {
		Duration::from_millis(self.diagnostics_interval_ms)
	}
}

fn saturating_millis(duration: Duration) -> u64 {
	u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

impl Default for FormSettings {
	fn default() -> Self {
		Self::new()
	}
}
