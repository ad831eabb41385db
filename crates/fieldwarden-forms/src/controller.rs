//! Form state controller
//!
//! [`FormController`] owns a form's values and errors. Change events update
//! the value map and schedule a debounced validation pass for the changed
//! field (plus any field that declared a dependency on it). Submission
//! re-validates every field synchronously and only hands the values to the
//! success callback when all of them pass.
//!
//! ## Lifecycle
//!
//! ```text
//!   on_field_change()            quiet period elapses
//! Idle ──────────────▶ ValidatingField ──────────────▶ Idle
//!                          │  ▲                  (error map updated)
//!                          └──┘ further changes re-arm the field's timer
//! ```
//!
//! Dropping the controller cancels every pending pass. Pending timer tasks
//! only hold a weak reference to the form state, so a pass can never write
//! into a form that has been discarded.

use crate::errors::{FormError, FormResult};
use crate::field::Field;
use crate::settings::FormSettings;
use crate::theme::Theme;
use fieldwarden_scheduling::{Debounce, Throttle};
use fieldwarden_validators::{ValidationError, ValueMap};
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::{Arc, Weak};

/// Field name to validation outcome.
///
/// `Some(message)` is a failing field, `None` a field that passed its last
/// pass. A field that has never been validated has no entry.
pub type ErrorMap = HashMap<String, Option<String>>;

type SubmitCallback = Arc<dyn Fn(&ValueMap) + Send + Sync>;
type DiagnosticsCallback = Arc<dyn Fn(&ValueMap) + Send + Sync>;

/// Whether any debounced validation pass is waiting to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
	Idle,
	ValidatingField,
}

/// Result of [`FormController::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
	/// Every field passed; the success callback received these values.
	Accepted(ValueMap),
	/// Names of the failing fields, in declaration order.
	Rejected(Vec<String>),
}

impl SubmitOutcome {
	pub fn is_accepted(&self) -> bool {
		matches!(self, Self::Accepted(_))
	}
}

/// Default diagnostics sink: logs which fields hold a value at debug level.
///
/// Values are never logged, since they include passwords. Install a sink
/// with [`FormBuilder::on_diagnostics`] to see the full snapshot.
pub fn log_snapshot(values: &ValueMap) {
	let mut names: Vec<&str> = values.keys().map(String::as_str).collect();
	names.sort_unstable();
	tracing::debug!(
		target: "fieldwarden::diagnostics",
		fields = values.len(),
		?names,
		"form input"
	);
}

/// State shared with the scheduled validation passes.
struct FormState {
	fields: Vec<Field>,
	values: RwLock<ValueMap>,
	errors: RwLock<ErrorMap>,
}

impl FormState {
	fn field(&self, name: &str) -> Option<&Field> {
		self.fields.iter().find(|field| field.name() == name)
	}

	fn validate_field(&self, name: &str, snapshot: &ValueMap) {
		let Some(field) = self.field(name) else {
			return;
		};
		let outcome = field
			.evaluate_in(snapshot)
			.err()
			.map(ValidationError::into_message);
		tracing::debug!(field = name, valid = outcome.is_none(), "validation pass");
		self.errors.write().insert(name.to_string(), outcome);
	}
}

/// Owner of one form's values, errors and schedulers.
///
/// # Examples
///
/// ```
/// use fieldwarden_forms::{Field, FormController, SubmitOutcome};
/// use fieldwarden_validators::required;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> fieldwarden_forms::FormResult<()> {
/// let form = FormController::builder()
///     .field(Field::new("city", "City").rule(required("City is required")))
///     .build()?;
///
/// assert!(!form.submit().is_accepted());
/// assert_eq!(form.error("city"), Some("City is required".to_string()));
///
/// form.on_field_change("city", "Kyoto")?;
/// assert!(matches!(form.submit(), SubmitOutcome::Accepted(_)));
/// assert_eq!(form.error("city"), None);
/// # Ok(())
/// # }
/// ```
pub struct FormController {
	state: Arc<FormState>,
	/// One debounced validation pass per field, keyed by field name
	passes: HashMap<String, Debounce<ValueMap>>,
	diagnostics: Option<Throttle<ValueMap>>,
	on_submit: Option<SubmitCallback>,
	theme: Theme,
	settings: FormSettings,
}

impl FormController {
	pub fn builder() -> FormBuilder {
		FormBuilder::default()
	}

	/// Build a controller from fields, a theme and a success callback with
	/// default settings.
	pub fn new<F>(fields: Vec<Field>, theme: Theme, on_submit: F) -> FormResult<Self>
	where
		F: Fn(&ValueMap) + Send + Sync + 'static,
	{
		Self::builder()
			.fields(fields)
			.theme(theme)
			.on_submit(on_submit)
			.build()
	}

	/// Record a new raw value for `name` and schedule its validation.
	///
	/// Fields that declared [`Field::depends_on`] `name` and already hold a
	/// non-empty value are re-validated against the same snapshot.
	///
	/// # Errors
	///
	/// - [`FormError::UnknownField`] if `name` is not one of the form's
	///   fields. Nothing is recorded.
	/// - [`FormError::Scheduling`] if no tokio runtime is available. The value
	///   is recorded but no pass is scheduled.
	pub fn on_field_change(&self, name: &str, value: impl Into<String>) -> FormResult<()> {
		let Some(pass) = self.passes.get(name) else {
			return Err(FormError::UnknownField(name.to_string()));
		};

		let snapshot = {
			let mut values = self.state.values.write();
			values.insert(name.to_string(), value.into());
			values.clone()
		};
		tracing::debug!(field = name, "field changed");

		pass.call(snapshot.clone())?;

		for dependent in self
			.state
			.fields
			.iter()
			.filter(|field| field.dependency() == Some(name))
		{
			let tracked = snapshot
				.get(dependent.name())
				.is_some_and(|value| !value.is_empty());
			if !tracked {
				continue;
			}
			if let Some(dependent_pass) = self.passes.get(dependent.name()) {
				tracing::debug!(
					field = dependent.name(),
					primary = name,
					"re-validating dependent field"
				);
				dependent_pass.call(snapshot.clone())?;
			}
		}

		if let Some(diagnostics) = &self.diagnostics {
			diagnostics.call(snapshot);
		}

		Ok(())
	}

	/// Validate every field now and submit if all of them pass.
	///
	/// The error map is replaced so that every field has an explicit entry.
	/// Pending debounced passes are left running.
	pub fn submit(&self) -> SubmitOutcome {
		let values = self.state.values.read().clone();

		let mut errors = ErrorMap::with_capacity(self.state.fields.len());
		let mut failed = Vec::new();
		for field in &self.state.fields {
			let outcome = field
				.evaluate_in(&values)
				.err()
				.map(ValidationError::into_message);
			if outcome.is_some() {
				failed.push(field.name().to_string());
			}
			errors.insert(field.name().to_string(), outcome);
		}
		*self.state.errors.write() = errors;

		if !failed.is_empty() {
			tracing::debug!(failed = failed.len(), "submission rejected");
			return SubmitOutcome::Rejected(failed);
		}

		tracing::info!(fields = values.len(), "submission accepted");
		if let Some(on_submit) = &self.on_submit {
			on_submit(&values);
		}
		SubmitOutcome::Accepted(values)
	}

	/// Cancel every pending validation pass. Returns how many were pending.
	pub fn cancel_pending(&self) -> usize {
		self.passes.values().filter(|pass| pass.cancel()).count()
	}

	pub fn phase(&self) -> FormPhase {
		if self.passes.values().any(Debounce::is_pending) {
			FormPhase::ValidatingField
		} else {
			FormPhase::Idle
		}
	}

	pub fn value(&self, name: &str) -> Option<String> {
		self.state.values.read().get(name).cloned()
	}

	/// Snapshot of every recorded value.
	pub fn values(&self) -> ValueMap {
		self.state.values.read().clone()
	}

	/// Snapshot of every recorded validation outcome.
	pub fn errors(&self) -> ErrorMap {
		self.state.errors.read().clone()
	}

	/// Current error message of `name`, if it is failing.
	pub fn error(&self, name: &str) -> Option<String> {
		self.state.errors.read().get(name).cloned().flatten()
	}

	/// Whether `name` has been through at least one validation pass.
	pub fn is_validated(&self, name: &str) -> bool {
		self.state.errors.read().contains_key(name)
	}

	pub fn fields(&self) -> &[Field] {
		&self.state.fields
	}

	pub fn field(&self, name: &str) -> Option<&Field> {
		self.state.field(name)
	}

	pub fn theme(&self) -> &Theme {
		&self.theme
	}

	pub fn settings(&self) -> &FormSettings {
		&self.settings
	}
}

impl fmt::Debug for FormController {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FormController")
			.field("fields", &self.state.fields.len())
			.field("phase", &self.phase())
			.field("settings", &self.settings)
			.finish_non_exhaustive()
	}
}

/// Builder for [`FormController`]
#[derive(Default)]
pub struct FormBuilder {
	fields: Vec<Field>,
	theme: Theme,
	settings: FormSettings,
	on_submit: Option<SubmitCallback>,
	on_diagnostics: Option<DiagnosticsCallback>,
}

impl FormBuilder {
	pub fn field(mut self, field: Field) -> Self {
		self.fields.push(field);
		self
	}

	pub fn fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
		self.fields.extend(fields);
		self
	}

	pub fn theme(mut self, theme: Theme) -> Self {
		self.theme = theme;
		self
	}

	pub fn settings(mut self, settings: FormSettings) -> Self {
		self.settings = settings;
		self
	}

	/// Callback receiving the values of an accepted submission.
	pub fn on_submit<F>(mut self, callback: F) -> Self
	where
		F: Fn(&ValueMap) + Send + Sync + 'static,
	{
		self.on_submit = Some(Arc::new(callback));
		self
	}

	/// Replace the default diagnostics sink ([`log_snapshot`]).
	pub fn on_diagnostics<F>(mut self, callback: F) -> Self
	where
		F: Fn(&ValueMap) + Send + Sync + 'static,
	{
		self.on_diagnostics = Some(Arc::new(callback));
		self
	}

	/// # Errors
	///
	/// - [`FormError::DuplicateField`] if two fields share a name.
	/// - [`FormError::UnknownDependency`] if a field depends on a name that is
	///   not part of the form.
	pub fn build(self) -> FormResult<FormController> {
		let mut names = HashSet::with_capacity(self.fields.len());
		for field in &self.fields {
			if !names.insert(field.name()) {
				return Err(FormError::DuplicateField(field.name().to_string()));
			}
		}
		for field in &self.fields {
			if let Some(primary) = field.dependency()
				&& !names.contains(primary)
			{
				return Err(FormError::UnknownDependency {
					field: field.name().to_string(),
					depends_on: primary.to_string(),
				});
			}
		}

		let state = Arc::new(FormState {
			fields: self.fields,
			values: RwLock::new(ValueMap::new()),
			errors: RwLock::new(ErrorMap::new()),
		});

		let delay = self.settings.validation_delay();
		let passes = state
			.fields
			.iter()
			.map(|field| {
				let name = field.name().to_string();
				let pass = validation_pass(Arc::downgrade(&state), name.clone(), delay);
				(name, pass)
			})
			.collect();

		let diagnostics = self.settings.diagnostics_enabled.then(|| {
			let sink: DiagnosticsCallback = match self.on_diagnostics {
				Some(sink) => sink,
				None => Arc::new(log_snapshot),
			};
			Throttle::new(
				move |snapshot: ValueMap| sink(&snapshot),
				self.settings.diagnostics_interval(),
			)
		});

		Ok(FormController {
			state,
			passes,
			diagnostics,
			on_submit: self.on_submit,
			theme: self.theme,
			settings: self.settings,
		})
	}
}

fn validation_pass(
	state: Weak<FormState>,
	field: String,
	delay: std::time::Duration,
) -> Debounce<ValueMap> {
	Debounce::new(
		move |snapshot: ValueMap| match state.upgrade() {
			Some(state) => state.validate_field(&field, &snapshot),
			None => tracing::warn!(field = %field, "validation pass fired after form was discarded"),
		},
		delay,
	)
}
