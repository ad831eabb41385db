//! Call-rate shaping for fieldwarden
//!
//! This crate provides the two scheduling primitives used to decide *when*
//! a side effect runs in response to a stream of calls:
//!
//! - [`Debounce`]: runs the callback once, `delay` after the last call
//! - [`Throttle`]: runs the callback immediately, then drops calls for `interval`
//!
//! Each instance owns its own timing state and must not be shared between
//! unrelated call sites.

pub mod debounce;
pub mod throttle;
pub mod time_provider;

pub use debounce::{Debounce, debounce};
pub use throttle::{Throttle, throttle};
pub use time_provider::{MockTimeProvider, SystemTimeProvider, TimeProvider};

/// Errors raised by the schedulers
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchedulingError {
	/// Debounce timers are tokio tasks and need an ambient runtime
	#[error("no tokio runtime is available to arm the debounce timer")]
	NoRuntime,
}

pub type SchedulingResult<T> = Result<T, SchedulingError>;
