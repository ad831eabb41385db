//! Debounce and throttle driven by the same keystroke stream
//!
//! Both schedulers run against the paused tokio clock, so the throttle uses
//! the default `SystemTimeProvider` here.

use fieldwarden_scheduling::{Debounce, Throttle, debounce, throttle};
use parking_lot::Mutex;
use rstest::rstest;
use std::sync::Arc;
use std::time::Duration;

struct Keystrokes {
	throttled: Arc<Mutex<Vec<String>>>,
	debounced: Arc<Mutex<Vec<String>>>,
	throttle: Throttle<String>,
	debounce: Debounce<String>,
}

impl Keystrokes {
	fn new(throttle_ms: u64, debounce_ms: u64) -> Self {
		let throttled = Arc::new(Mutex::new(Vec::new()));
		let debounced = Arc::new(Mutex::new(Vec::new()));
		let throttled_sink = throttled.clone();
		let debounced_sink = debounced.clone();
		Self {
			throttle: throttle(
				move |text: String| throttled_sink.lock().push(text),
				Duration::from_millis(throttle_ms),
			),
			debounce: debounce(
				move |text: String| debounced_sink.lock().push(text),
				Duration::from_millis(debounce_ms),
			),
			throttled,
			debounced,
		}
	}

	fn type_text(&self, text: &str) {
		self.throttle.call(text.to_string());
		self.debounce.call(text.to_string()).unwrap();
	}
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_typing_burst_feeds_both_schedulers_independently() {
	// Arrange
	let keys = Keystrokes::new(1000, 4000);

	// Act: one keystroke every 300ms for 3 seconds
	let mut text = String::new();
	for c in "abcdefghij".chars() {
		text.push(c);
		keys.type_text(&text);
		tokio::time::sleep(Duration::from_millis(300)).await;
	}
	let debounced_while_typing = keys.debounced.lock().len();
	tokio::time::sleep(Duration::from_millis(4500)).await;

	// Assert
	// Keystrokes land at 0, 300, ..., 2700ms; throttle accepts 0, 1200, 2400.
	assert_eq!(*keys.throttled.lock(), vec!["a", "abcde", "abcdefghi"]);
	assert_eq!(debounced_while_typing, 0);
	assert_eq!(*keys.debounced.lock(), vec!["abcdefghij"]);
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_separate_instances_keep_separate_windows() {
	// Arrange
	let first = Keystrokes::new(500, 250);
	let second = Keystrokes::new(500, 250);

	// Act
	first.type_text("x");
	tokio::time::sleep(Duration::from_millis(100)).await;
	second.type_text("y");
	tokio::time::sleep(Duration::from_millis(400)).await;

	// Assert
	assert_eq!(*first.throttled.lock(), vec!["x"]);
	assert_eq!(*second.throttled.lock(), vec!["y"]);
	assert_eq!(*first.debounced.lock(), vec!["x"]);
	assert_eq!(*second.debounced.lock(), vec!["y"]);
}
