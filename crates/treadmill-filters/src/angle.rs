//! Angle wrapping helpers.
//!
//! Ring angles are expressed in degrees. The canonical stored form is
//! `[0, 360)`; differences between two headings use `(-180, 180]`.

/// Wrap an angle in degrees into `[0, 360)`.
///
/// Non-finite input yields `0.0`.
///
/// ```
/// use treadmill_filters::wrap_degrees;
///
/// assert!((wrap_degrees(-90.0) - 270.0).abs() < 1e-4);
/// assert!((wrap_degrees(720.0)).abs() < 1e-4);
/// ```
#[inline]
pub fn wrap_degrees(deg: f32) -> f32 {
    if !deg.is_finite() {
        return 0.0;
    }
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Wrap an angle difference in degrees into `(-180, 180]`.
///
/// Non-finite input yields `0.0`.
///
/// ```
/// use treadmill_filters::wrap_signed_degrees;
///
/// assert!((wrap_signed_degrees(350.0) + 10.0).abs() < 1e-4);
/// assert!((wrap_signed_degrees(-180.0) - 180.0).abs() < 1e-4);
/// ```
#[inline]
pub fn wrap_signed_degrees(deg: f32) -> f32 {
    let wrapped = wrap_degrees(deg);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}
