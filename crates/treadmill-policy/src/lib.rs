//! Injection policy for treadmill locomotion
//!
//! Every interception point in a host integration does the same thing: read
//! the value the host would have returned, merge in the treadmill value, and
//! return the result. This crate is that merge, as a pure and total
//! function.
//!
//! | Mode       | Treadmill active          | Treadmill idle            |
//! |------------|---------------------------|---------------------------|
//! | `Override` | treadmill value, active   | host value unchanged      |
//! | `Smart`    | treadmill value, active   | host value unchanged      |
//! | `Additive` | `clamp(host + treadmill)` | `clamp(host + treadmill)` |
//!
//! The treadmill is active when the largest component magnitude of its value
//! exceeds the activation threshold.
//!
//! # Example
//!
//! ```
//! use treadmill_config::InputMode;
//! use treadmill_policy::{ChannelState, Vec2, apply};
//!
//! let host = ChannelState::new(Vec2::new(0.2, 0.0), true);
//! let merged = apply(InputMode::Smart, host, Vec2::new(0.0, 0.8), true);
//! assert_eq!(merged.value, Vec2::new(0.0, 0.8));
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod policy;
pub mod value;

pub use policy::{InjectionPolicy, apply, apply_for_target, is_treadmill_active};
pub use value::{ChannelState, ChannelValue, Vec2};
