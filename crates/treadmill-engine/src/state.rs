//! Shared treadmill state.
//!
//! The producer replaces the whole field group under one write lock and
//! readers copy it under a read lock, so a reader never observes half of
//! an ingest.

use parking_lot::RwLock;
use serde::Serialize;
use tracing::warn;
use treadmill_policy::Vec2;

/// One consistent copy of the treadmill state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreadmillSnapshot {
    /// Last pad X after deadzone, multiplier and clamp, in `[-1, 1]`.
    pub raw_x: f32,
    /// Last pad Y after deadzone, multiplier and clamp, in `[-1, 1]`.
    pub raw_y: f32,
    /// Last ring angle in `[0, 360)` degrees.
    pub raw_yaw: f32,
    /// Smoothed pad X.
    pub smoothed_x: f32,
    /// Smoothed pad Y.
    pub smoothed_y: f32,
    /// Circularly smoothed ring angle in `[0, 360)` degrees.
    pub smoothed_yaw: f32,
    /// True after a successful ingest until the device is reported lost.
    pub active: bool,
    /// Timestamp of the last ingest, milliseconds.
    pub last_update_ms: u64,
    /// Number of ingests so far.
    pub update_count: u64,
}

impl TreadmillSnapshot {
    /// The smoothed pad value as a 2D axis.
    pub fn movement(&self) -> Vec2 {
        Vec2::new(self.smoothed_x, self.smoothed_y)
    }

    /// The reader-facing view of this snapshot.
    pub fn smoothed(&self) -> SmoothedState {
        SmoothedState {
            x: self.smoothed_x,
            y: self.smoothed_y,
            yaw: self.smoothed_yaw,
            active: self.active,
            timestamp_ms: self.last_update_ms,
        }
    }
}

/// Smoothed state as seen by consumers.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SmoothedState {
    /// Smoothed lateral axis.
    pub x: f32,
    /// Smoothed forward axis.
    pub y: f32,
    /// Smoothed heading in degrees.
    pub yaw: f32,
    /// Whether the treadmill is live.
    pub active: bool,
    /// Timestamp of the last ingest, milliseconds.
    pub timestamp_ms: u64,
}

/// Owned, concurrently readable treadmill state.
///
/// Only [`SignalProcessor`](crate::SignalProcessor) writes smoothed fields.
#[derive(Debug, Default)]
pub struct TreadmillState {
    inner: RwLock<TreadmillSnapshot>,
}

impl TreadmillState {
    /// Create an inactive, zeroed state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy the current state.
    #[inline]
    pub fn snapshot(&self) -> TreadmillSnapshot {
        *self.inner.read()
    }

    /// Whether the treadmill is live.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.inner.read().active
    }

    /// Mutate the whole field group under a single write lock.
    pub(crate) fn update<R>(&self, f: impl FnOnce(&mut TreadmillSnapshot) -> R) -> R {
        let mut guard = self.inner.write();
        f(&mut guard)
    }

    /// Record that the hardware reader lost the device. The next ingest
    /// makes the state active again.
    pub fn mark_disconnected(&self) {
        let was_active = self.update(|state| std::mem::replace(&mut state.active, false));
        if was_active {
            warn!("Treadmill disconnected, injection paused");
        }
    }
}
