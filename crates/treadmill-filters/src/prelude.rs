//! Prelude for the treadmill filters crate.
//!
//! ```
//! use treadmill_filters::prelude::*;
//!
//! let yaw = circular_ema(350.0, 10.0, 0.5);
//! assert!(yaw.abs() < 1e-3 || (yaw - 360.0).abs() < 1e-3);
//! ```

pub use crate::angle::{wrap_degrees, wrap_signed_degrees};
pub use crate::deadzone::{apply_deadzone, scale_and_clamp};
pub use crate::normalize::{PAD_CENTER, normalize_pad_x, normalize_pad_y};
pub use crate::smoothing::{circular_ema, ema};
