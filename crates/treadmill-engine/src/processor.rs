//! Raw sample processing.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::trace;
use treadmill_config::TreadmillConfig;
use treadmill_filters::prelude::*;

use crate::state::{TreadmillSnapshot, TreadmillState};

/// Every this many ingests a trace line with raw and smoothed values is
/// emitted.
pub const INGEST_LOG_INTERVAL: u64 = 100;

/// Milliseconds since the Unix epoch, saturating.
pub(crate) fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}

/// Converts raw hardware samples into the shared [`TreadmillState`].
///
/// Per sample:
///
/// 1. Normalize both pad bytes onto `[-1, 1]` (Y inverted).
/// 2. Apply the per-axis deadzone.
/// 3. Scale by the speed multiplier and clamp.
/// 4. Smooth X and Y with a linear EMA.
/// 5. Smooth the ring angle with a circular EMA.
/// 6. Stamp the time, bump the counter and mark the state active.
///
/// Ingest has no failure modes: out-of-range input is clamped and a
/// non-finite ring angle keeps the previous heading.
///
/// # RT Safety
///
/// - No heap allocations
/// - O(1) time complexity
/// - One short write-lock critical section
#[derive(Debug, Clone)]
pub struct SignalProcessor {
    state: Arc<TreadmillState>,
    deadzone: f32,
    speed_multiplier: f32,
    smoothing_factor: f32,
}

impl SignalProcessor {
    /// Create a processor writing into `state` with the tunables of `config`.
    pub fn new(config: &TreadmillConfig, state: Arc<TreadmillState>) -> Self {
        Self {
            state,
            deadzone: config.deadzone,
            speed_multiplier: config.speed_multiplier,
            smoothing_factor: config.smoothing_factor,
        }
    }

    /// The state this processor writes.
    pub fn state(&self) -> &Arc<TreadmillState> {
        &self.state
    }

    /// Ingest one sample stamped with the current wall-clock time.
    pub fn ingest(&self, ring_angle_deg: f32, pad_x: u8, pad_y: u8) -> TreadmillSnapshot {
        self.ingest_at(ring_angle_deg, pad_x, pad_y, now_ms())
    }

    /// Ingest one sample with an explicit timestamp in milliseconds.
    ///
    /// Returns the state as it was written.
    pub fn ingest_at(
        &self,
        ring_angle_deg: f32,
        pad_x: u8,
        pad_y: u8,
        timestamp_ms: u64,
    ) -> TreadmillSnapshot {
        let x = self.shape(normalize_pad_x(pad_x));
        let y = self.shape(normalize_pad_y(pad_y));
        let yaw = ring_angle_deg.is_finite().then(|| wrap_degrees(ring_angle_deg));
        let alpha = self.smoothing_factor;

        let snapshot = self.state.update(|state| {
            state.raw_x = x;
            state.raw_y = y;
            if let Some(yaw) = yaw {
                state.raw_yaw = yaw;
            }
            state.smoothed_x = ema(state.smoothed_x, x, alpha);
            state.smoothed_y = ema(state.smoothed_y, y, alpha);
            state.smoothed_yaw = circular_ema(state.smoothed_yaw, state.raw_yaw, alpha);
            state.last_update_ms = timestamp_ms;
            state.update_count = state.update_count.saturating_add(1);
            state.active = true;
            *state
        });

        if snapshot.update_count.is_multiple_of(INGEST_LOG_INTERVAL) {
            trace!(
                samples = snapshot.update_count,
                raw_x = snapshot.raw_x,
                raw_y = snapshot.raw_y,
                raw_yaw = snapshot.raw_yaw,
                smoothed_x = snapshot.smoothed_x,
                smoothed_y = snapshot.smoothed_y,
                smoothed_yaw = snapshot.smoothed_yaw,
                "Treadmill sample"
            );
        }

        snapshot
    }

    #[inline]
    fn shape(&self, normalized: f32) -> f32 {
        scale_and_clamp(apply_deadzone(normalized, self.deadzone), self.speed_multiplier)
    }
}
