//! Pad byte normalization.
//!
//! The treadmill pad reports each axis as an unsigned byte centred on
//! [`PAD_CENTER`]. The Y axis is inverted: hardware-down is forward.

/// Resting value of a pad axis byte.
pub const PAD_CENTER: u8 = 127;

const PAD_HALF_RANGE: f32 = 127.0;

#[inline]
fn centered(raw: u8) -> f32 {
    ((f32::from(raw) - f32::from(PAD_CENTER)) / PAD_HALF_RANGE).clamp(-1.0, 1.0)
}

/// Normalize the pad X byte onto `[-1, 1]`.
///
/// ```
/// use treadmill_filters::normalize_pad_x;
///
/// assert!((normalize_pad_x(255) - 1.0).abs() < f32::EPSILON);
/// assert!((normalize_pad_x(0) + 1.0).abs() < f32::EPSILON);
/// ```
#[inline]
pub fn normalize_pad_x(raw: u8) -> f32 {
    centered(raw)
}

/// Normalize the pad Y byte onto `[-1, 1]`, inverting so that a low byte
/// reads as forward (positive).
#[inline]
pub fn normalize_pad_y(raw: u8) -> f32 {
    -centered(raw)
}
