//! Registration form preset
//!
//! Eight fields: name, email, phone, password with its confirmation, and a
//! postal address. The confirmation depends on `password`, so editing the
//! password re-checks a confirmation that has already been typed.

use crate::field::Field;
use crate::theme::Theme;
use fieldwarden_validators::{
	EmailRule, PasswordStrengthRule, PhoneRule, matches_field, min_length, required,
};

/// Field descriptors of the registration form, in display order.
pub fn registration_fields() -> Vec<Field> {
	vec![
		Field::new("name", "Full Name")
			.rule(required("Name is required"))
			.rule(min_length(3, "Name must be at least 3 characters")),
		Field::new("email", "Email Address")
			.rule(required("Email is required"))
			.rule(EmailRule::new()),
		Field::new("phone", "Phone Number")
			.rule(required("Phone is required"))
			.rule(PhoneRule::new()),
		Field::new("password", "Password")
			.rule(required("Password is required"))
			.rule(PasswordStrengthRule::new()),
		Field::new("confirmPassword", "Confirm Password")
			.rule(required("Please confirm your password"))
			.rule(matches_field("password"))
			.depends_on("password"),
		Field::new("address", "Address")
			.rule(required("Address is required"))
			.rule(min_length(10, "Address must be at least 10 characters")),
		Field::new("city", "City").rule(required("City is required")),
		Field::new("zipCode", "Zip Code").rule(required("Zip code is required")),
	]
}

/// Colors the registration form is rendered with.
pub fn registration_theme() -> Theme {
	Theme::new()
		.with_accent("#3b82f6")
		.with_error("#e63946")
		.with_border("#e5e7eb")
}

#[cfg(test)]
mod tests {
	use super::*;
	use fieldwarden_validators::ValueMap;
	use rstest::{fixture, rstest};

	#[fixture]
	fn fields() -> Vec<Field> {
		registration_fields()
	}

	fn evaluate(fields: &[Field], name: &str, values: &ValueMap) -> Option<String> {
		fields
			.iter()
			.find(|field| field.name() == name)
			.and_then(|field| field.evaluate_in(values).err())
			.map(|err| err.into_message())
	}

	#[rstest]
	fn test_field_order(fields: Vec<Field>) {
		let names: Vec<&str> = fields.iter().map(Field::name).collect();
		assert_eq!(
			names,
			[
				"name",
				"email",
				"phone",
				"password",
				"confirmPassword",
				"address",
				"city",
				"zipCode"
			]
		);
	}

	#[rstest]
	fn test_only_confirmation_has_a_dependency(fields: Vec<Field>) {
		let dependent: Vec<(&str, &str)> = fields
			.iter()
			.filter_map(|field| field.dependency().map(|primary| (field.name(), primary)))
			.collect();
		assert_eq!(dependent, [("confirmPassword", "password")]);
	}

	#[rstest]
	#[case::name_blank("name", "", Some("Name is required"))]
	#[case::name_short("name", "Al", Some("Name must be at least 3 characters"))]
	#[case::name_ok("name", "Ada", None)]
	#[case::email_blank("email", " ", Some("Email is required"))]
	#[case::email_shape("email", "ada@example", Some("Please enter a valid email address"))]
	#[case::email_ok("email", "ada@example.com", None)]
	#[case::phone_letters("phone", "555-CALL-NOW", Some("Please enter a valid phone number"))]
	#[case::phone_short("phone", "(555) 123", Some("Please enter a valid phone number"))]
	#[case::phone_ok("phone", "+1 (555) 123-4567", None)]
	#[case::password_blank("password", "", Some("Password is required"))]
	#[case::password_short("password", "Ab1", Some("Password must be at least 8 characters"))]
	#[case::password_ok("password", "Secret123", None)]
	#[case::address_short("address", "1 Main", Some("Address must be at least 10 characters"))]
	#[case::city_blank("city", "", Some("City is required"))]
	#[case::zip_blank("zipCode", "", Some("Zip code is required"))]
	#[case::zip_ok("zipCode", "94103", None)]
	fn test_single_field_messages(
		fields: Vec<Field>,
		#[case] name: &str,
		#[case] value: &str,
		#[case] expected: Option<&str>,
	) {
		// Arrange
		let values = ValueMap::from([(name.to_string(), value.to_string())]);

		// Act
		let message = evaluate(&fields, name, &values);

		// Assert
		assert_eq!(message.as_deref(), expected);
	}

	#[rstest]
	#[case::blank("", Some("Please confirm your password"))]
	#[case::mismatch("Secret124", Some("Passwords do not match"))]
	#[case::matching("Secret123", None)]
	fn test_confirmation_reads_password(
		fields: Vec<Field>,
		#[case] confirmation: &str,
		#[case] expected: Option<&str>,
	) {
		let values = ValueMap::from([
			("password".to_string(), "Secret123".to_string()),
			("confirmPassword".to_string(), confirmation.to_string()),
		]);
		assert_eq!(
			evaluate(&fields, "confirmPassword", &values).as_deref(),
			expected
		);
	}

	#[rstest]
	fn test_theme_colors() {
		let theme = registration_theme();
		assert_eq!(
			theme.css_variables(),
			vec![
				("--accent", "#3b82f6"),
				("--error", "#e63946"),
				("--border", "#e5e7eb"),
			]
		);
	}
}
