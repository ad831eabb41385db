//! Clock abstraction for the schedulers.
//!
//! Throttling decisions are made against a [`TimeProvider`] so tests can
//! drive time by hand instead of sleeping.

use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// Source of the current instant used by [`Throttle`](crate::Throttle).
///
/// Implementations return `tokio::time::Instant`, so a paused tokio clock
/// (`#[tokio::test(start_paused = true)]`) is honored by [`SystemTimeProvider`].
pub trait TimeProvider: Send + Sync {
	fn now(&self) -> Instant;
}

/// Time provider backed by the runtime clock.
#[derive(Debug, Clone, Default)]
pub struct SystemTimeProvider;

impl SystemTimeProvider {
	pub fn new() -> Self {
		Self
	}
}

impl TimeProvider for SystemTimeProvider {
	fn now(&self) -> Instant {
		Instant::now()
	}
}

/// Manually driven clock for tests.
///
/// Clones share the same underlying instant, so a test can keep one handle
/// and hand another to the scheduler under test.
///
/// # Examples
///
/// ```
/// use fieldwarden_scheduling::{MockTimeProvider, TimeProvider};
/// use std::time::Duration;
///
/// let clock = MockTimeProvider::default();
/// let start = clock.now();
/// clock.advance(Duration::from_millis(250));
/// assert_eq!(clock.now() - start, Duration::from_millis(250));
/// ```
#[derive(Debug, Clone)]
pub struct MockTimeProvider {
	current_time: Arc<RwLock<Instant>>,
}

impl MockTimeProvider {
	pub fn new(start_time: Instant) -> Self {
		Self {
			current_time: Arc::new(RwLock::new(start_time)),
		}
	}

	pub fn advance(&self, duration: Duration) {
		let mut time = self.current_time.write();
		*time += duration;
	}

	pub fn set_time(&self, time: Instant) {
		let mut current = self.current_time.write();
		*current = time;
	}
}

impl Default for MockTimeProvider {
	fn default() -> Self {
		Self::new(Instant::now())
	}
}

impl TimeProvider for MockTimeProvider {
	fn now(&self) -> Instant {
		*self.current_time.read()
	}
}
