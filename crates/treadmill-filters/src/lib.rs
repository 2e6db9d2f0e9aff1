//! RT-Safe Signal Filters for Treadmill Locomotion
//!
//! This crate provides the pure, allocation-free primitives that turn raw
//! treadmill samples into locomotion input:
//!
//! - **Normalize**: map an unsigned 8-bit pad byte onto `[-1, 1]`
//! - **Deadzone**: suppress small deflections and rescale the remainder
//! - **Smoothing**: linear and circular exponential moving averages
//! - **Angle**: wrap ring angles into canonical ranges
//!
//! # RT Safety Guarantees
//!
//! - No heap allocations
//! - O(1) time complexity for all operations
//! - No syscalls or I/O
//!
//! # Example
//!
//! ```
//! use treadmill_filters::prelude::*;
//!
//! let x = normalize_pad_x(255);
//! let x = scale_and_clamp(apply_deadzone(x, 0.1), 1.5);
//! let mut smoothed = 0.0;
//! smoothed = ema(smoothed, x, 0.3);
//! assert!((smoothed - 0.3).abs() < 1e-6);
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod angle;
pub mod deadzone;
pub mod normalize;
pub mod prelude;
pub mod smoothing;

pub use angle::{wrap_degrees, wrap_signed_degrees};
pub use deadzone::{apply_deadzone, scale_and_clamp};
pub use normalize::{PAD_CENTER, normalize_pad_x, normalize_pad_y};
pub use smoothing::{circular_ema, ema};
