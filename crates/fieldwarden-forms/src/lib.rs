//! Form state controller for fieldwarden
//!
//! A [`FormController`] tracks the raw values and validation outcomes of a
//! set of [`Field`]s.
//!
//! - **Change events** record a value and schedule a debounced validation
//!   pass for that field, plus any field declared with
//!   [`Field::depends_on`] the changed one.
//! - **Submission** validates every field at once and calls the success
//!   callback only when all of them pass.
//! - **Diagnostics** receive throttled snapshots of the values, logged at
//!   debug level unless a custom sink is installed.
//!
//! Timers run on the ambient tokio runtime.
//!
//! ## Example
//!
//! ```
//! use fieldwarden_forms::{FormController, registration_fields, registration_theme};
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> fieldwarden_forms::FormResult<()> {
//! let form = FormController::builder()
//!     .fields(registration_fields())
//!     .theme(registration_theme())
//!     .on_submit(|values| println!("registered {}", values["email"]))
//!     .build()?;
//!
//! form.on_field_change("email", "ada@example")?;
//! tokio::time::sleep(Duration::from_millis(300)).await;
//! assert_eq!(
//!     form.error("email").as_deref(),
//!     Some("Please enter a valid email address")
//! );
//! # Ok(())
//! # }
//! ```

pub mod controller;
pub mod errors;
pub mod field;
pub mod registration;
pub mod settings;
pub mod theme;

pub use controller::{
	ErrorMap, FormBuilder, FormController, FormPhase, SubmitOutcome, log_snapshot,
};
pub use errors::{FormError, FormResult};
pub use field::Field;
pub use registration::{registration_fields, registration_theme};
pub use settings::{FormSettings, SettingsError};
pub use theme::Theme;

/// Re-export commonly used types
pub mod prelude {
	pub use super::controller::{ErrorMap, FormBuilder, FormController, FormPhase, SubmitOutcome};
	pub use super::errors::{FormError, FormResult};
	pub use super::field::Field;
	pub use super::settings::FormSettings;
	pub use super::theme::Theme;
}
