//! Treadmill locomotion configuration
//!
//! This crate owns the tunables of the locomotion engine: signal shaping
//! (deadzone, speed multiplier, smoothing), the injection mode, which host
//! targets receive injected input, and which action names count as movement.
//!
//! A [`TreadmillConfig`] is immutable once loaded. Parsing and
//! [`TreadmillConfig::load`] validate their input. The fields are public and
//! the `with_*` builders do not validate, so a config assembled in code must
//! go through [`TreadmillConfig::validate`] before use; the engine does this
//! on construction.
//!
//! # Example
//!
//! ```
//! use treadmill_config::{InputMode, TreadmillConfig};
//!
//! let config = TreadmillConfig::from_json_str(r#"{ "inputMode": "additive", "deadzone": 0.2 }"#)?;
//! assert_eq!(config.input_mode, InputMode::Additive);
//! assert!((config.deadzone - 0.2).abs() < f32::EPSILON);
//! # Ok::<(), treadmill_config::ConfigError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod mode;
pub mod target;
pub mod types;
pub mod validation;

pub use mode::InputMode;
pub use target::{InjectionTarget, TargetSelector};
pub use types::*;
pub use validation::validate_config;

use thiserror::Error;

/// Errors raised while loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A numeric field is outside its accepted range.
    #[error("{field} value {value} is out of range, expected {expected}")]
    OutOfRange {
        /// Field name as written in the configuration file
        field: &'static str,
        /// The rejected value
        value: String,
        /// Human-readable description of the accepted range
        expected: &'static str,
    },

    /// The input mode name is not one of the known modes.
    #[error("Unknown input mode '{0}', expected one of: override, additive, smart")]
    UnknownInputMode(String),

    /// The configuration document is not valid JSON for this schema.
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration file could not be read.
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Create an out-of-range error for `field`.
    pub fn out_of_range(field: &'static str, value: impl ToString, expected: &'static str) -> Self {
        Self::OutOfRange {
            field,
            value: value.to_string(),
            expected,
        }
    }
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
