//! Orientation synthesis from the treadmill heading.

use serde::Serialize;

const MIN_NORM: f64 = 1e-4;

/// Unit quaternion `(w, x, y, z)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quaternion {
    /// Scalar part.
    pub w: f64,
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Quaternion {
    /// The identity rotation.
    pub const IDENTITY: Quaternion = Quaternion {
        w: 1.0,
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Rotation about the vertical axis for a heading in degrees.
    ///
    /// Headings grow clockwise seen from above, so the rotation is about
    /// `-Y`: `(cos(θ/2), 0, -sin(θ/2), 0)`.
    ///
    /// ```
    /// use treadmill_engine::Quaternion;
    ///
    /// let q = Quaternion::from_yaw_degrees(180.0);
    /// assert!(q.w.abs() < 1e-9);
    /// assert!((q.y + 1.0).abs() < 1e-9);
    /// ```
    pub fn from_yaw_degrees(yaw_deg: f32) -> Self {
        let (sin, cos) = (f64::from(yaw_deg).to_radians() * 0.5).sin_cos();
        Quaternion {
            w: cos,
            x: 0.0,
            y: -sin,
            z: 0.0,
        }
        .normalized()
    }

    /// Euclidean length.
    pub fn norm(&self) -> f64 {
        (self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Scale to unit length. Near-zero quaternions are returned unchanged.
    pub fn normalized(self) -> Self {
        let norm = self.norm();
        if norm < MIN_NORM {
            return self;
        }
        Quaternion {
            w: self.w / norm,
            x: self.x / norm,
            y: self.y / norm,
            z: self.z / norm,
        }
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn zero_heading_is_identity() {
        let q = Quaternion::from_yaw_degrees(0.0);
        assert_abs_diff_eq!(q.w, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(q.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn quarter_turn() {
        let q = Quaternion::from_yaw_degrees(90.0);
        let half = core::f64::consts::FRAC_1_SQRT_2;
        assert_abs_diff_eq!(q.w, half, epsilon = 1e-9);
        assert_abs_diff_eq!(q.x, 0.0);
        assert_abs_diff_eq!(q.y, -half, epsilon = 1e-9);
        assert_abs_diff_eq!(q.z, 0.0);
    }

    #[test]
    fn always_unit_length() {
        for yaw in [0.0, 13.5, 90.0, 179.9, 270.0, 359.99] {
            assert_abs_diff_eq!(Quaternion::from_yaw_degrees(yaw).norm(), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn near_zero_is_left_alone() {
        let tiny = Quaternion {
            w: 1e-6,
            x: 0.0,
            y: 0.0,
            z: 0.0,
        };
        assert_eq!(tiny.normalized(), tiny);
    }
}
