//! Rate-shaping primitives.
//!
//! # Examples
//!
//! ```rust
//! use fieldwarden::scheduling::{Throttle, throttle};
//! use std::time::Duration;
//!
//! let log: Throttle<String> = throttle(|line| println!("{line}"), Duration::from_millis(500));
//! assert!(log.call("first".to_string()));
//! assert!(!log.call("second".to_string()));
//! ```

#[cfg(feature = "scheduling")]
pub use fieldwarden_scheduling::*;
