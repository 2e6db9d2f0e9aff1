//! Exponential smoothing for linear axes and circular headings.

use crate::angle::{wrap_degrees, wrap_signed_degrees};

/// One step of a linear exponential moving average.
///
/// Returns `alpha * sample + (1 - alpha) * previous`. `alpha = 1` tracks the
/// input exactly, `alpha = 0` holds the previous value.
///
/// ```
/// use treadmill_filters::ema;
///
/// assert!((ema(0.0, 1.0, 0.3) - 0.3).abs() < 1e-6);
/// ```
#[inline]
pub fn ema(previous: f32, sample: f32, alpha: f32) -> f32 {
    alpha * sample + (1.0 - alpha) * previous
}

/// One step of a circular exponential moving average over degrees.
///
/// The shortest signed difference between `sample` and `previous` is taken
/// in `(-180, 180]`, scaled by `alpha` and added to `previous`; the result
/// is wrapped into `[0, 360)`. A single step therefore never moves the
/// heading by more than `alpha * 180` degrees, and headings either side of
/// north blend through north instead of through south.
///
/// ```
/// use treadmill_filters::circular_ema;
///
/// let yaw = circular_ema(350.0, 10.0, 0.5);
/// assert!(yaw < 1e-3 || yaw > 359.999);
/// ```
#[inline]
pub fn circular_ema(previous: f32, sample: f32, alpha: f32) -> f32 {
    let diff = wrap_signed_degrees(sample - previous);
    wrap_degrees(previous + alpha * diff)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn ema_blends_toward_sample() {
        assert_abs_diff_eq!(ema(1.0, 0.0, 0.25), 0.75, epsilon = 1e-6);
        assert_abs_diff_eq!(ema(0.5, 0.5, 0.9), 0.5, epsilon = 1e-6);
    }

    #[test]
    fn ema_alpha_extremes() {
        assert_abs_diff_eq!(ema(0.2, 0.8, 1.0), 0.8, epsilon = 1e-6);
        assert_abs_diff_eq!(ema(0.2, 0.8, 0.0), 0.2, epsilon = 1e-6);
    }

    #[test]
    fn circular_ema_takes_short_way_round() {
        // 10 -> 350 is -20 degrees, half of that lands on 0
        let yaw = circular_ema(10.0, 350.0, 0.5);
        assert!(yaw < 1e-3 || yaw > 359.999, "got {yaw}");
    }

    #[test]
    fn circular_ema_from_zero_toward_east() {
        assert_abs_diff_eq!(circular_ema(0.0, 90.0, 0.3), 27.0, epsilon = 1e-4);
    }

    #[test]
    fn circular_ema_opposite_heading_moves_clockwise() {
        // A diff of exactly 180 stays +180 in (-180, 180]
        assert_abs_diff_eq!(circular_ema(0.0, 180.0, 0.5), 90.0, epsilon = 1e-4);
    }
}
