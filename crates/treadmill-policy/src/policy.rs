//! Merge policy.

use treadmill_config::{InjectionTarget, InputMode, TargetSelector, TreadmillConfig};

use crate::value::{ChannelState, ChannelValue};

/// Whether `value` is strong enough to count as treadmill movement.
#[inline]
pub fn is_treadmill_active<V: ChannelValue>(value: &V, threshold: f32) -> bool {
    value.magnitude() > threshold
}

/// Merge `treadmill` into the host's `current` value according to `mode`.
///
/// - `Override` and `Smart`: the treadmill value replaces the host value
///   while `treadmill_active`; otherwise `current` is returned unchanged.
/// - `Additive`: the clamped sum, active if either side is active.
///
/// Pure and total.
#[inline]
pub fn apply<V: ChannelValue>(
    mode: InputMode,
    current: ChannelState<V>,
    treadmill: V,
    treadmill_active: bool,
) -> ChannelState<V> {
    match mode {
        InputMode::Override | InputMode::Smart => {
            if treadmill_active {
                ChannelState::new(treadmill, true)
            } else {
                current
            }
        }
        InputMode::Additive => ChannelState::new(
            current.value.clamped_add(treadmill),
            current.active || treadmill_active,
        ),
    }
}

/// [`apply`] restricted by an optional target selector.
///
/// When both `selector` and `target` are given and the target is not
/// selected, `current` is returned unchanged whatever the mode.
#[inline]
pub fn apply_for_target<V: ChannelValue>(
    mode: InputMode,
    current: ChannelState<V>,
    treadmill: V,
    treadmill_active: bool,
    selector: Option<&TargetSelector>,
    target: Option<InjectionTarget<'_>>,
) -> ChannelState<V> {
    match (selector, target) {
        (Some(selector), Some(target)) if !selector.matches(target) => current,
        _ => apply(mode, current, treadmill, treadmill_active),
    }
}

/// The configured policy: mode, activation threshold and target filter.
#[derive(Debug, Clone, PartialEq)]
pub struct InjectionPolicy {
    mode: InputMode,
    activation_threshold: f32,
    selector: Option<TargetSelector>,
}

impl InjectionPolicy {
    /// Create a policy that injects into every target.
    pub fn new(mode: InputMode, activation_threshold: f32) -> Self {
        Self {
            mode,
            activation_threshold,
            selector: None,
        }
    }

    /// Build the policy described by `config`.
    pub fn from_config(config: &TreadmillConfig) -> Self {
        Self {
            mode: config.input_mode,
            activation_threshold: config.activation_threshold,
            selector: config.target_selector.clone(),
        }
    }

    /// Restrict injection to targets matching `selector`.
    pub fn with_selector(mut self, selector: TargetSelector) -> Self {
        self.selector = Some(selector);
        self
    }

    /// The merge mode.
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// The activation threshold.
    pub fn activation_threshold(&self) -> f32 {
        self.activation_threshold
    }

    /// Whether a read from `target` receives treadmill input. Reads that do
    /// not identify their target always do.
    pub fn targets(&self, target: Option<InjectionTarget<'_>>) -> bool {
        match (&self.selector, target) {
            (Some(selector), Some(target)) => selector.matches(target),
            _ => true,
        }
    }

    /// The target selector, if injection is restricted.
    pub fn selector(&self) -> Option<&TargetSelector> {
        self.selector.as_ref()
    }

    /// Whether `treadmill` exceeds this policy's activation threshold.
    pub fn is_active<V: ChannelValue>(&self, treadmill: &V) -> bool {
        is_treadmill_active(treadmill, self.activation_threshold)
    }

    /// Evaluate the policy for one intercepted read.
    ///
    /// A read from a target outside the selector gets `current` back
    /// unchanged, whatever the mode.
    pub fn evaluate<V: ChannelValue>(
        &self,
        current: ChannelState<V>,
        treadmill: V,
        target: Option<InjectionTarget<'_>>,
    ) -> ChannelState<V> {
        apply_for_target(
            self.mode,
            current,
            treadmill,
            self.is_active(&treadmill),
            self.selector.as_ref(),
            target,
        )
    }
}

impl Default for InjectionPolicy {
    fn default() -> Self {
        Self::from_config(&TreadmillConfig::default())
    }
}
