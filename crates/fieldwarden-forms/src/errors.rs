use crate::settings::SettingsError;
use fieldwarden_scheduling::SchedulingError;

/// Errors raised while building or driving a form.
///
/// Rule failures are not errors at this level; they are written into the
/// form's error map.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
	#[error("Duplicate field name: {0}")]
	DuplicateField(String),
	#[error("Unknown field: {0}")]
	UnknownField(String),
	#[error("Field {field} depends on unknown field {depends_on}")]
	UnknownDependency { field: String, depends_on: String },
	#[error(transparent)]
	Scheduling(#[from] SchedulingError),
	#[error(transparent)]
	Settings(#[from] SettingsError),
}

pub type FormResult<T> = Result<T, FormError>;
