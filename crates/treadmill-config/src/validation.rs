//! Configuration validation

use crate::{ConfigError, ConfigResult, TreadmillConfig};

fn check_unit_open(field: &'static str, value: f32) -> ConfigResult<()> {
    if value.is_finite() && (0.0..1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::out_of_range(field, value, "[0, 1)"))
    }
}

/// Validate every tunable of `config`.
///
/// | Field                 | Accepted        |
/// |-----------------------|-----------------|
/// | `speedMultiplier`     | finite, `> 0`   |
/// | `deadzone`            | `[0, 1)`        |
/// | `smoothingFactor`     | `[0, 1]`        |
/// | `activationThreshold` | `[0, 1)`        |
/// | `baudRate`            | `> 0`           |
///
/// # Errors
///
/// Returns [`ConfigError::OutOfRange`] for the first offending field.
pub fn validate_config(config: &TreadmillConfig) -> ConfigResult<()> {
    if !config.speed_multiplier.is_finite() || config.speed_multiplier <= 0.0 {
        return Err(ConfigError::out_of_range(
            "speedMultiplier",
            config.speed_multiplier,
            "a finite value greater than 0",
        ));
    }

    check_unit_open("deadzone", config.deadzone)?;

    if !(config.smoothing_factor.is_finite() && (0.0..=1.0).contains(&config.smoothing_factor)) {
        return Err(ConfigError::out_of_range(
            "smoothingFactor",
            config.smoothing_factor,
            "[0, 1]",
        ));
    }

    check_unit_open("activationThreshold", config.activation_threshold)?;

    if config.baud_rate == 0 {
        return Err(ConfigError::out_of_range("baudRate", config.baud_rate, "greater than 0"));
    }

    Ok(())
}
