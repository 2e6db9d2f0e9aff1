//! Engine facade.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, info};
use treadmill_classifier::{ActionClassifier, ScalarAxis};
use treadmill_config::{ConfigResult, InjectionTarget, TreadmillConfig};
use treadmill_policy::{ChannelState, ChannelValue, InjectionPolicy, Vec2};

use crate::pose::Quaternion;
use crate::processor::SignalProcessor;
use crate::state::{SmoothedState, TreadmillSnapshot, TreadmillState};
use crate::validator::{DirectionReport, HeadsetSample, validate_direction};

/// Every this many injected reads a debug line is emitted.
pub const INJECTION_LOG_INTERVAL: u64 = 500;

/// The single owned engine shared by the hardware reader and every
/// interception point.
///
/// All methods take `&self`; wrap the engine in an [`Arc`] to share it.
#[derive(Debug)]
pub struct TreadmillEngine {
    config: TreadmillConfig,
    state: Arc<TreadmillState>,
    processor: SignalProcessor,
    classifier: ActionClassifier,
    policy: InjectionPolicy,
    injections: AtomicU64,
}

impl TreadmillEngine {
    /// Validate `config` and build an engine with an inactive state.
    ///
    /// # Errors
    ///
    /// Returns the validation error if any tunable is out of range.
    pub fn new(config: TreadmillConfig) -> ConfigResult<Self> {
        config.validate()?;
        let state = Arc::new(TreadmillState::new());
        let processor = SignalProcessor::new(&config, Arc::clone(&state));
        let classifier = ActionClassifier::from_config(&config);
        let policy = InjectionPolicy::from_config(&config);

        info!(
            enabled = config.enabled,
            mode = %config.input_mode,
            deadzone = config.deadzone,
            speed_multiplier = config.speed_multiplier,
            smoothing = config.smoothing_factor,
            patterns = config.action_patterns.len(),
            "Treadmill engine initialized"
        );

        Ok(Self {
            config,
            state,
            processor,
            classifier,
            policy,
            injections: AtomicU64::new(0),
        })
    }

    /// The configuration the engine was built with.
    pub fn config(&self) -> &TreadmillConfig {
        &self.config
    }

    /// Shared handle to the treadmill state.
    pub fn state(&self) -> Arc<TreadmillState> {
        Arc::clone(&self.state)
    }

    /// The movement action classifier.
    pub fn classifier(&self) -> &ActionClassifier {
        &self.classifier
    }

    /// The injection policy.
    pub fn policy(&self) -> &InjectionPolicy {
        &self.policy
    }

    /// Ingest one hardware sample stamped with the current time.
    pub fn ingest(&self, ring_angle_deg: f32, pad_x: u8, pad_y: u8) -> TreadmillSnapshot {
        self.processor.ingest(ring_angle_deg, pad_x, pad_y)
    }

    /// Ingest one hardware sample with an explicit timestamp.
    pub fn ingest_at(
        &self,
        ring_angle_deg: f32,
        pad_x: u8,
        pad_y: u8,
        timestamp_ms: u64,
    ) -> TreadmillSnapshot {
        self.processor
            .ingest_at(ring_angle_deg, pad_x, pad_y, timestamp_ms)
    }

    /// Record that the hardware reader lost the device.
    pub fn mark_disconnected(&self) {
        self.state.mark_disconnected();
    }

    /// Copy of the full state.
    pub fn snapshot(&self) -> TreadmillSnapshot {
        self.state.snapshot()
    }

    /// Current smoothed state.
    pub fn read_smoothed_state(&self) -> SmoothedState {
        self.state.snapshot().smoothed()
    }

    /// Whether `action_name` is a movement action.
    pub fn classify(&self, action_name: &str) -> bool {
        self.classifier.classify(action_name)
    }

    /// Whether intercepted reads currently receive treadmill input at all.
    pub fn is_injecting(&self) -> bool {
        self.config.enabled && self.state.is_active()
    }

    /// Merge the smoothed treadmill axis into a 2D host read.
    ///
    /// `target` identifies where the read came from; `None` means the call
    /// site does not know, and is always eligible.
    pub fn apply_policy(
        &self,
        current: ChannelState<Vec2>,
        target: Option<InjectionTarget<'_>>,
    ) -> ChannelState<Vec2> {
        self.inject(current, target, |snapshot| snapshot.movement())
    }

    /// Merge one treadmill axis into a one-dimensional host read.
    pub fn apply_scalar_policy(
        &self,
        axis: ScalarAxis,
        current: ChannelState<f32>,
        target: Option<InjectionTarget<'_>>,
    ) -> ChannelState<f32> {
        self.inject(current, target, |snapshot| match axis {
            ScalarAxis::X => snapshot.smoothed_x,
            ScalarAxis::Y => snapshot.smoothed_y,
        })
    }

    fn inject<V: ChannelValue>(
        &self,
        current: ChannelState<V>,
        target: Option<InjectionTarget<'_>>,
        select: impl FnOnce(&TreadmillSnapshot) -> V,
    ) -> ChannelState<V> {
        if !self.config.enabled {
            return current;
        }
        let snapshot = self.state.snapshot();
        if !snapshot.active || !self.policy.targets(target) {
            return current;
        }

        let treadmill = select(&snapshot);
        let merged = self.policy.evaluate(current, treadmill, target);
        if !self.policy.is_active(&treadmill) {
            return merged;
        }

        let count = self
            .injections
            .fetch_add(1, Ordering::Relaxed)
            .saturating_add(1);
        if count.is_multiple_of(INJECTION_LOG_INTERVAL) {
            debug!(
                injections = count,
                mode = %self.policy.mode(),
                x = snapshot.smoothed_x,
                y = snapshot.smoothed_y,
                "Injecting treadmill input"
            );
        }
        merged
    }

    /// Number of reads evaluated while the treadmill axis was above the
    /// activation threshold.
    pub fn injection_count(&self) -> u64 {
        self.injections.load(Ordering::Relaxed)
    }

    /// Compare headset displacement with the current treadmill direction.
    pub fn validate_direction(
        &self,
        current: HeadsetSample,
        previous: HeadsetSample,
    ) -> Option<DirectionReport> {
        validate_direction(current, previous, &self.state.snapshot())
    }

    /// Orientation for the smoothed heading.
    pub fn pose(&self) -> Quaternion {
        Quaternion::from_yaw_degrees(self.state.snapshot().smoothed_yaw)
    }

    /// Stop injecting: subsequent policy calls pass host values through
    /// until the next ingest.
    pub fn shutdown(&self) {
        self.state.update(|state| state.active = false);
        info!(
            injections = self.injection_count(),
            samples = self.state.snapshot().update_count,
            "Treadmill engine shut down"
        );
    }
}
