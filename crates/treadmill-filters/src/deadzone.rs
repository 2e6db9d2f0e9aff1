//! Per-axis deadzone and output scaling.

/// Apply a per-axis deadzone with rescaling.
///
/// Values with `|v| < deadzone` become `0.0`; the remainder is rescaled so
/// that the output still spans the full `[-1, 1]` range:
/// `sign(v) * (|v| - deadzone) / (1 - deadzone)`.
///
/// A deadzone of `1.0` or more swallows every input.
///
/// # RT Safety
///
/// - No heap allocations
/// - O(1) time complexity
///
/// ```
/// use treadmill_filters::apply_deadzone;
///
/// assert!(apply_deadzone(0.05, 0.1).abs() < f32::EPSILON);
/// assert!((apply_deadzone(1.0, 0.1) - 1.0).abs() < 1e-6);
/// assert!((apply_deadzone(-0.55, 0.1) + 0.5).abs() < 1e-6);
/// ```
#[inline]
pub fn apply_deadzone(value: f32, deadzone: f32) -> f32 {
    let magnitude = value.abs();
    if magnitude < deadzone || deadzone >= 1.0 {
        return 0.0;
    }
    let deadzone = deadzone.max(0.0);
    value.signum() * (magnitude - deadzone) / (1.0 - deadzone)
}

/// Multiply by `multiplier` and clamp to `[-1, 1]`.
///
/// ```
/// use treadmill_filters::scale_and_clamp;
///
/// assert!((scale_and_clamp(0.8, 1.5) - 1.0).abs() < f32::EPSILON);
/// assert!((scale_and_clamp(0.2, 1.5) - 0.3).abs() < 1e-6);
/// ```
#[inline]
pub fn scale_and_clamp(value: f32, multiplier: f32) -> f32 {
    (value * multiplier).clamp(-1.0, 1.0)
}
