//! Trailing-edge debounce.
//!
//! A [`Debounce`] postpones its callback until `delay` has passed without a
//! new call. A call supersedes the pending one unless that one is already
//! due, so a burst of calls produces a single invocation carrying the
//! arguments of the last call, while calls spaced at least `delay` apart all
//! run.
//!
//! Timers are tokio tasks sleeping on `tokio::time`, so [`Debounce::call`]
//! must be made from within a runtime.
//!
//! # Examples
//!
//! ```
//! use fieldwarden_scheduling::debounce;
//! use std::sync::{Arc, Mutex};
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), fieldwarden_scheduling::SchedulingError> {
//! let last = Arc::new(Mutex::new(None));
//! let sink = last.clone();
//! let search = debounce(
//!     move |query: String| *sink.lock().unwrap() = Some(query),
//!     Duration::from_millis(20),
//! );
//!
//! search.call("r".to_string())?;
//! search.call("ru".to_string())?;
//! search.call("rust".to_string())?;
//! tokio::time::sleep(Duration::from_millis(60)).await;
//!
//! assert_eq!(last.lock().unwrap().as_deref(), Some("rust"));
//! # Ok(())
//! # }
//! ```

use crate::{SchedulingError, SchedulingResult};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::AbortHandle;
use tokio::time::Instant;

/// Deadline offset used when `delay` overflows the clock.
const FAR_FUTURE: Duration = Duration::from_secs(86400 * 365 * 30);

/// One armed timer task.
struct ArmedTimer {
	handle: AbortHandle,
	deadline: Instant,
	/// Checked by the task under the pending lock before it fires.
	cancelled: Arc<AtomicBool>,
}

impl ArmedTimer {
	fn cancel(self) {
		self.cancelled.store(true, Ordering::Release);
		self.handle.abort();
	}
}

/// The outstanding timer of a debounce instance.
#[derive(Default)]
struct PendingTimer {
	/// Bumped on every arm and cancel; a timer only clears `armed` if its
	/// generation is still current when it fires.
	generation: u64,
	armed: Option<ArmedTimer>,
}

/// Quiet-period scheduler around a callback.
pub struct Debounce<A> {
	callback: Arc<dyn Fn(A) + Send + Sync>,
	delay: Duration,
	pending: Arc<Mutex<PendingTimer>>,
}

impl<A> Debounce<A> {
	/// Delay used by [`Debounce::with_default_delay`].
	pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

	/// Wrap `callback` so that it runs once `delay` after the last call.
	pub fn new<F>(callback: F, delay: Duration) -> Self
	where
		F: Fn(A) + Send + Sync + 'static,
	{
		Self {
			callback: Arc::new(callback),
			delay,
			pending: Arc::new(Mutex::new(PendingTimer::default())),
		}
	}

	/// Wrap `callback` with [`Debounce::DEFAULT_DELAY`].
	pub fn with_default_delay<F>(callback: F) -> Self
	where
		F: Fn(A) + Send + Sync + 'static,
	{
		Self::new(callback, Self::DEFAULT_DELAY)
	}

	/// Drop the pending invocation, if any.
	///
	/// Returns `true` when an invocation was pending.
	pub fn cancel(&self) -> bool {
		let mut pending = self.pending.lock();
		pending.generation = pending.generation.wrapping_add(1);
		match pending.armed.take() {
			Some(timer) => {
				timer.cancel();
				tracing::trace!(delay_ms = self.delay.as_millis() as u64, "debounce cancelled");
				true
			}
			None => false,
		}
	}

	/// Whether a timer is armed and has not fired yet.
	pub fn is_pending(&self) -> bool {
		self.pending.lock().armed.is_some()
	}

	pub fn delay(&self) -> Duration {
		self.delay
	}
}

impl<A: Send + 'static> Debounce<A> {
	/// Arm the timer with `args`, superseding any pending invocation.
	///
	/// A pending invocation whose deadline has already been reached is not
	/// superseded: it still runs with its own arguments. Calls spaced at least
	/// `delay` apart therefore each produce an invocation.
	///
	/// # Errors
	///
	/// Returns [`SchedulingError::NoRuntime`] when called outside a tokio
	/// runtime. The previously pending invocation is left untouched in that
	/// case.
	pub fn call(&self, args: A) -> SchedulingResult<()> {
		let runtime = Handle::try_current().map_err(|_| SchedulingError::NoRuntime)?;
		let now = Instant::now();

		let mut pending = self.pending.lock();
		if let Some(previous) = pending.armed.take() {
			if now >= previous.deadline {
				tracing::trace!("pending debounce already due");
			} else {
				previous.cancel();
				tracing::trace!("pending debounce superseded");
			}
		}
		pending.generation = pending.generation.wrapping_add(1);

		let generation = pending.generation;
		let deadline = now.checked_add(self.delay).unwrap_or_else(|| now + FAR_FUTURE);
		let cancelled = Arc::new(AtomicBool::new(false));
		let callback = Arc::clone(&self.callback);
		let state = Arc::clone(&self.pending);
		let task_cancelled = Arc::clone(&cancelled);
		let delay_ms = self.delay.as_millis() as u64;

		let task = runtime.spawn(async move {
			tokio::time::sleep_until(deadline).await;
			{
				let mut pending = state.lock();
				if task_cancelled.load(Ordering::Acquire) {
					return;
				}
				if pending.generation == generation {
					pending.armed = None;
				}
			}
			tracing::trace!(delay_ms, "debounce fired");
			callback(args);
		});
		pending.armed = Some(ArmedTimer {
			handle: task.abort_handle(),
			deadline,
			cancelled,
		});
		tracing::trace!(delay_ms, "debounce armed");

		Ok(())
	}
}

impl<A> Drop for Debounce<A> {
	fn drop(&mut self) {
		self.cancel();
	}
}

impl<A> fmt::Debug for Debounce<A> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Debounce")
			.field("delay", &self.delay)
			.field("pending", &self.is_pending())
			.finish_non_exhaustive()
	}
}

/// Build a [`Debounce`] around `callback`.
pub fn debounce<A, F>(callback: F, delay: Duration) -> Debounce<A>
where
	F: Fn(A) + Send + Sync + 'static,
{
	Debounce::new(callback, delay)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn recording_debounce(delay_ms: u64) -> (Debounce<u32>, Arc<Mutex<Vec<u32>>>) {
		let seen = Arc::new(Mutex::new(Vec::new()));
		let sink = seen.clone();
		let debounce = Debounce::new(
			move |value: u32| sink.lock().push(value),
			Duration::from_millis(delay_ms),
		);
		(debounce, seen)
	}

	async fn advance_ms(ms: u64) {
		tokio::time::sleep(Duration::from_millis(ms)).await;
	}

	#[rstest]
	#[tokio::test(start_paused = true)]
	async fn test_burst_collapses_to_last_call() {
		// Arrange
		let (debounce, seen) = recording_debounce(250);

		// Act
		for value in 0..5 {
			debounce.call(value).unwrap();
			advance_ms(100).await;
		}
		advance_ms(400).await;

		// Assert
		assert_eq!(*seen.lock(), vec![4]);
	}

	#[rstest]
	#[tokio::test(start_paused = true)]
	async fn test_spaced_calls_each_fire() {
		// Arrange
		let (debounce, seen) = recording_debounce(250);

		// Act
		for value in 0..3 {
			debounce.call(value).unwrap();
			advance_ms(300).await;
		}

		// Assert
		assert_eq!(*seen.lock(), vec![0, 1, 2]);
	}

	#[rstest]
	#[case::exactly_delay(250)]
	#[case::past_delay(251)]
	#[tokio::test(start_paused = true)]
	async fn test_calls_spaced_by_delay_each_fire(#[case] spacing_ms: u64) {
		// Arrange
		let (debounce, seen) = recording_debounce(250);

		// Act
		for value in 0..4 {
			debounce.call(value).unwrap();
			advance_ms(spacing_ms).await;
		}
		advance_ms(300).await;

		// Assert
		assert_eq!(*seen.lock(), vec![0, 1, 2, 3]);
		assert!(!debounce.is_pending());
	}

	#[rstest]
	#[tokio::test(start_paused = true)]
	async fn test_call_just_before_deadline_supersedes() {
		// Arrange
		let (debounce, seen) = recording_debounce(250);

		// Act
		debounce.call(1).unwrap();
		advance_ms(249).await;
		debounce.call(2).unwrap();
		advance_ms(300).await;

		// Assert
		assert_eq!(*seen.lock(), vec![2]);
	}

	#[rstest]
	#[tokio::test(start_paused = true)]
	async fn test_never_fires_without_quiet_period() {
		// Arrange
		let (debounce, seen) = recording_debounce(250);

		// Act
		for value in 0..20 {
			debounce.call(value).unwrap();
			advance_ms(200).await;
		}

		// Assert
		assert!(seen.lock().is_empty());
		assert!(debounce.is_pending());
	}

	#[rstest]
	#[tokio::test(start_paused = true)]
	async fn test_zero_delay_fires_asynchronously() {
		// Arrange
		let (debounce, seen) = recording_debounce(0);

		// Act
		debounce.call(7).unwrap();
		let fired_inline = !seen.lock().is_empty();
		advance_ms(1).await;

		// Assert
		assert!(!fired_inline);
		assert_eq!(*seen.lock(), vec![7]);
	}

	#[rstest]
	#[tokio::test(start_paused = true)]
	async fn test_cancel_discards_pending_invocation() {
		// Arrange
		let (debounce, seen) = recording_debounce(250);
		debounce.call(1).unwrap();
		assert!(debounce.is_pending());

		// Act
		let cancelled = debounce.cancel();
		advance_ms(500).await;

		// Assert
		assert!(cancelled);
		assert!(!debounce.is_pending());
		assert!(seen.lock().is_empty());
	}

	#[rstest]
	#[tokio::test(start_paused = true)]
	async fn test_drop_cancels_pending_invocation() {
		// Arrange
		let (debounce, seen) = recording_debounce(250);
		debounce.call(1).unwrap();

		// Act
		drop(debounce);
		advance_ms(500).await;

		// Assert
		assert!(seen.lock().is_empty());
	}

	#[rstest]
	#[tokio::test(start_paused = true)]
	async fn test_pending_flag_clears_after_firing() {
		// Arrange
		let (debounce, seen) = recording_debounce(250);

		// Act
		debounce.call(1).unwrap();
		advance_ms(300).await;

		// Assert
		assert!(!debounce.is_pending());
		assert_eq!(*seen.lock(), vec![1]);
		assert!(!debounce.cancel());
	}

	#[rstest]
	fn test_call_outside_runtime_is_an_error() {
		// Arrange
		let (debounce, _seen) = recording_debounce(250);

		// Act
		let result = debounce.call(1);

		// Assert
		assert!(matches!(result, Err(SchedulingError::NoRuntime)));
		assert!(!debounce.is_pending());
	}

	#[rstest]
	fn test_default_delay() {
		let debounce = Debounce::with_default_delay(|_: ()| {});
		assert_eq!(debounce.delay(), Duration::from_millis(300));
	}
}
