//! Leading-edge throttle.
//!
//! A [`Throttle`] runs its callback immediately on the first call and then
//! refuses to run it again until `interval` has elapsed since the last
//! accepted call. Refused calls are dropped; nothing is queued and there is
//! no trailing invocation.
//!
//! # Examples
//!
//! ```
//! use fieldwarden_scheduling::{MockTimeProvider, throttle};
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::time::Duration;
//!
//! let clock = MockTimeProvider::default();
//! let count = Arc::new(AtomicUsize::new(0));
//! let counter = count.clone();
//!
//! let limited = throttle(
//!     move |_: &str| {
//!         counter.fetch_add(1, Ordering::SeqCst);
//!     },
//!     Duration::from_millis(500),
//! )
//! .with_time_provider(Arc::new(clock.clone()));
//!
//! assert!(limited.call("a"));
//! clock.advance(Duration::from_millis(100));
//! assert!(!limited.call("b"));
//! clock.advance(Duration::from_millis(400));
//! assert!(limited.call("c"));
//! assert_eq!(count.load(Ordering::SeqCst), 2);
//! ```

use crate::time_provider::{SystemTimeProvider, TimeProvider};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// Immediate-or-drop rate limiter around a callback.
pub struct Throttle<A> {
	callback: Box<dyn Fn(A) + Send + Sync>,
	interval: Duration,
	/// Instant of the most recent accepted call
	last_invocation: Mutex<Option<Instant>>,
	clock: Arc<dyn TimeProvider>,
}

impl<A> Throttle<A> {
	/// Interval used by [`Throttle::with_default_interval`].
	pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(200);

	/// Wrap `callback` so that it runs at most once per `interval`.
	pub fn new<F>(callback: F, interval: Duration) -> Self
	where
		F: Fn(A) + Send + Sync + 'static,
	{
		Self {
			callback: Box::new(callback),
			interval,
			last_invocation: Mutex::new(None),
			clock: Arc::new(SystemTimeProvider::new()),
		}
	}

	/// Wrap `callback` with [`Throttle::DEFAULT_INTERVAL`].
	pub fn with_default_interval<F>(callback: F) -> Self
	where
		F: Fn(A) + Send + Sync + 'static,
	{
		Self::new(callback, Self::DEFAULT_INTERVAL)
	}

	/// Replace the clock used to judge eligibility.
	pub fn with_time_provider(mut self, clock: Arc<dyn TimeProvider>) -> Self {
		self.clock = clock;
		self
	}

	/// Offer a call to the throttle.
	///
	/// Runs the callback synchronously and returns `true` when at least
	/// `interval` has passed since the last accepted call (or when no call has
	/// been accepted yet). Returns `false` and drops `args` otherwise.
	pub fn call(&self, args: A) -> bool {
		let now = self.clock.now();
		{
			let mut last = self.last_invocation.lock();
			if let Some(previous) = *last
				&& now.saturating_duration_since(previous) < self.interval
			{
				tracing::trace!(
					elapsed_ms = now.saturating_duration_since(previous).as_millis() as u64,
					interval_ms = self.interval.as_millis() as u64,
					"throttled call dropped"
				);
				return false;
			}
			*last = Some(now);
		}
		// The lock is released so the callback may re-enter this throttle.
		(self.callback)(args);
		true
	}

	/// Forget the last accepted call; the next call runs unconditionally.
	pub fn reset(&self) {
		*self.last_invocation.lock() = None;
	}

	pub fn interval(&self) -> Duration {
		self.interval
	}
}

impl<A> fmt::Debug for Throttle<A> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Throttle")
			.field("interval", &self.interval)
			.field("last_invocation", &*self.last_invocation.lock())
			.finish_non_exhaustive()
	}
}

/// Build a [`Throttle`] around `callback`.
pub fn throttle<A, F>(callback: F, interval: Duration) -> Throttle<A>
where
	F: Fn(A) + Send + Sync + 'static,
{
	Throttle::new(callback, interval)
}
