//! Direction diagnostics.
//!
//! Cross-checks where the headset actually moved against where the treadmill
//! says the user is walking. This is a diagnostic only: it reports and logs,
//! and never changes the treadmill state.
//!
//! The horizontal plane is `(x, z)` in a right-handed, Y-up frame. The pad
//! vector `(x, y)` is rotated by the smoothed heading onto that plane.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::state::TreadmillSnapshot;

/// Headset travel at or below this distance (metres) is ignored.
pub const MIN_HEADSET_TRAVEL_M: f64 = 0.05;
/// Expected-direction vectors at or below this length are ignored.
pub const MIN_EXPECTED_LENGTH: f64 = 0.01;
/// Deviations above this many degrees are mismatches.
pub const MISMATCH_THRESHOLD_DEG: f64 = 5.0;
/// The stateful validator logs one report every this many ticks.
pub const DIAGNOSTIC_LOG_INTERVAL: u64 = 50;

/// Horizontal headset position in world space, metres.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HeadsetSample {
    /// World X.
    pub x: f64,
    /// World Z.
    pub z: f64,
}

impl HeadsetSample {
    /// Create a sample.
    pub const fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }
}

/// Unit direction on the horizontal plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PlaneVector {
    /// X component.
    pub x: f64,
    /// Z component.
    pub z: f64,
}

impl PlaneVector {
    fn normalized(x: f64, z: f64, min_length: f64) -> Option<Self> {
        let length = x.hypot(z);
        (length > min_length).then(|| Self {
            x: x / length,
            z: z / length,
        })
    }

    fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.z * other.z
    }
}

/// Outcome of one direction check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectionVerdict {
    /// Headset moved within the threshold of the expected direction.
    Ok,
    /// Headset moved away from the expected direction.
    Mismatch,
}

/// Result of comparing actual and expected movement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionReport {
    /// Angle between actual and expected direction, degrees in `[0, 180]`.
    pub deviation_deg: f64,
    /// Normalized headset displacement.
    pub actual_dir: PlaneVector,
    /// Normalized rotated pad vector.
    pub expected_dir: PlaneVector,
    /// Whether the deviation is acceptable.
    pub verdict: DirectionVerdict,
}

/// Compare headset displacement from `previous` to `current` with the
/// direction implied by `state`.
///
/// Returns `None` when the headset moved no more than
/// [`MIN_HEADSET_TRAVEL_M`] or the pad is not deflected.
pub fn validate_direction(
    current: HeadsetSample,
    previous: HeadsetSample,
    state: &TreadmillSnapshot,
) -> Option<DirectionReport> {
    let actual_dir = PlaneVector::normalized(
        current.x - previous.x,
        current.z - previous.z,
        MIN_HEADSET_TRAVEL_M,
    )?;

    let (sin, cos) = f64::from(state.smoothed_yaw).to_radians().sin_cos();
    let pad_x = f64::from(state.smoothed_x);
    let pad_y = f64::from(state.smoothed_y);
    let expected_dir = PlaneVector::normalized(
        pad_x * cos - pad_y * sin,
        pad_x * sin + pad_y * cos,
        MIN_EXPECTED_LENGTH,
    )?;

    let deviation_deg = actual_dir.dot(expected_dir).clamp(-1.0, 1.0).acos().to_degrees();
    let verdict = if deviation_deg > MISMATCH_THRESHOLD_DEG {
        DirectionVerdict::Mismatch
    } else {
        DirectionVerdict::Ok
    };

    Some(DirectionReport {
        deviation_deg,
        actual_dir,
        expected_dir,
        verdict,
    })
}

/// Stateful direction checker driven once per pose tick.
///
/// Keeps the previous valid headset sample and logs one report every
/// [`DIAGNOSTIC_LOG_INTERVAL`] ticks.
#[derive(Debug, Clone, Default)]
pub struct DirectionValidator {
    previous: Option<HeadsetSample>,
    ticks: u64,
}

impl DirectionValidator {
    /// Create a validator with no history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ticks observed.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Process one pose tick. `headset` is `None` when the headset pose is
    /// not valid this tick; the stored sample is then kept.
    pub fn observe(
        &mut self,
        headset: Option<HeadsetSample>,
        state: &TreadmillSnapshot,
    ) -> Option<DirectionReport> {
        self.ticks = self.ticks.saturating_add(1);
        let current = headset?;
        let report = self
            .previous
            .replace(current)
            .and_then(|previous| validate_direction(current, previous, state));

        if let Some(report) = report
            && self.ticks.is_multiple_of(DIAGNOSTIC_LOG_INTERVAL)
        {
            log_report(&report, state);
        }
        report
    }

    /// Forget the stored headset sample.
    pub fn reset(&mut self) {
        self.previous = None;
    }
}

fn log_report(report: &DirectionReport, state: &TreadmillSnapshot) {
    match report.verdict {
        DirectionVerdict::Mismatch => warn!(
            deviation_deg = report.deviation_deg,
            actual_x = report.actual_dir.x,
            actual_z = report.actual_dir.z,
            expected_x = report.expected_dir.x,
            expected_z = report.expected_dir.z,
            yaw = state.smoothed_yaw,
            pad_x = state.smoothed_x,
            pad_y = state.smoothed_y,
            "Direction mismatch"
        ),
        DirectionVerdict::Ok => debug!(
            deviation_deg = report.deviation_deg,
            actual_x = report.actual_dir.x,
            actual_z = report.actual_dir.z,
            expected_x = report.expected_dir.x,
            expected_z = report.expected_dir.z,
            "Direction ok"
        ),
    }
}
