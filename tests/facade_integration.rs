//! The facade crate exposes every layer through one dependency.

use fieldwarden::prelude::*;
use rstest::rstest;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_registration_round_trip_through_facade() {
	// Arrange
	let accepted = Arc::new(AtomicUsize::new(0));
	let counter = accepted.clone();
	let form = FormController::builder()
		.fields(fieldwarden::forms::registration_fields())
		.theme(fieldwarden::forms::registration_theme())
		.on_submit(move |_| {
			counter.fetch_add(1, Ordering::SeqCst);
		})
		.build()
		.unwrap();

	// Act
	for (name, value) in [
		("name", "Grace Hopper"),
		("email", "grace@example.com"),
		("phone", "(555) 010-0199"),
		("password", "Cobol1959"),
		("confirmPassword", "Cobol1959"),
		("address", "1 Navy Yard Drive"),
		("city", "Arlington"),
		("zipCode", "22202"),
	] {
		form.on_field_change(name, value).unwrap();
	}
	tokio::time::sleep(Duration::from_millis(300)).await;
	let outcome = form.submit();

	// Assert
	assert!(outcome.is_accepted());
	assert_eq!(accepted.load(Ordering::SeqCst), 1);
	assert_eq!(form.phase(), FormPhase::Idle);
	assert!(form.errors().values().all(Option::is_none));
}

#[rstest]
fn test_rule_chain_through_facade() {
	let chain = RuleChain::new()
		.with(required("Zip code is required"))
		.with(PatternRule::new(r"^\d{5}$").unwrap().with_message("Enter five digits"));

	let err = chain.evaluate("2220", &ValueMap::new()).unwrap_err();

	assert_eq!(err.message(), "Enter five digits");
}
