//! # fieldwarden
//!
//! Field validation for interactive forms, with the rate-shaping primitives
//! that keep it quiet while the user is still typing.
//!
//! ## Feature Flags
//!
//! - `scheduling` - [`Debounce`](scheduling::Debounce) and
//!   [`Throttle`](scheduling::Throttle)
//! - `validators` - the [`Rule`](validators::Rule) trait, rule chains and
//!   the built-in rule catalogue
//! - `forms` - the form state controller (enables both of the above)
//! - `full` (default) - everything
//!
//! ## Quick Example
//!
//! ```rust
//! use fieldwarden::prelude::*;
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> FormResult<()> {
//! let form = FormController::builder()
//!     .field(Field::new("name", "Full Name").rule(required("Name is required")))
//!     .field(
//!         Field::new("email", "Email Address")
//!             .rule(required("Email is required"))
//!             .rule(EmailRule::new()),
//!     )
//!     .on_submit(|values| println!("welcome, {}", values["name"]))
//!     .build()?;
//!
//! form.on_field_change("email", "ada@")?;
//! tokio::time::sleep(Duration::from_millis(300)).await;
//! assert_eq!(
//!     form.error("email").as_deref(),
//!     Some("Please enter a valid email address")
//! );
//!
//! form.on_field_change("name", "Ada")?;
//! form.on_field_change("email", "ada@example.com")?;
//! assert!(form.submit().is_accepted());
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "forms")]
pub mod forms;
#[cfg(feature = "scheduling")]
pub mod scheduling;
#[cfg(feature = "validators")]
pub mod validators;

/// Re-export commonly used types
pub mod prelude {
	#[cfg(feature = "forms")]
	pub use fieldwarden_forms::prelude::*;
	#[cfg(feature = "scheduling")]
	pub use fieldwarden_scheduling::{Debounce, Throttle, debounce, throttle};
	#[cfg(feature = "validators")]
	pub use fieldwarden_validators::prelude::*;
}
