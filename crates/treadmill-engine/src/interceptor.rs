//! Host-agnostic interception contract.
//!
//! A host integration hooks its input entry points and forwards each event
//! here. The interceptor owns the per-instance action registry; the engine
//! owns the shared state and the policy.

use std::hash::Hash;
use std::sync::Arc;

use tracing::debug;
use treadmill_classifier::ActionRegistry;
use treadmill_config::InjectionTarget;
use treadmill_policy::{ChannelState, Vec2};

use crate::engine::TreadmillEngine;

/// Adapts host input events to the engine, keyed by the host's action
/// handle type `H`.
///
/// One interceptor lives per host instance (session, input system); call
/// [`reset`](ActionInterceptor::reset) when that instance is destroyed.
#[derive(Debug)]
pub struct ActionInterceptor<H> {
    engine: Arc<TreadmillEngine>,
    registry: ActionRegistry<H>,
}

impl<H: Eq + Hash> ActionInterceptor<H> {
    /// Create an interceptor classifying with the engine's patterns.
    pub fn new(engine: Arc<TreadmillEngine>) -> Self {
        let registry = ActionRegistry::new(engine.classifier().clone());
        Self { engine, registry }
    }

    /// The engine this interceptor feeds.
    pub fn engine(&self) -> &Arc<TreadmillEngine> {
        &self.engine
    }

    /// The per-instance action registry.
    pub fn registry(&self) -> &ActionRegistry<H> {
        &self.registry
    }

    /// The host created an action. Returns whether it is a movement action.
    pub fn on_action_created(&self, handle: H, name: &str) -> bool {
        self.registry.register(handle, name)
    }

    /// The host read a 2D action. Non-movement actions pass through.
    pub fn on_vector_read(
        &self,
        handle: &H,
        current: ChannelState<Vec2>,
        target: Option<InjectionTarget<'_>>,
    ) -> ChannelState<Vec2> {
        if !self.registry.is_movement(handle) {
            return current;
        }
        self.engine.apply_policy(current, target)
    }

    /// The host read a one-dimensional action. The treadmill axis is chosen
    /// from the action name when it was created.
    pub fn on_scalar_read(
        &self,
        handle: &H,
        current: ChannelState<f32>,
        target: Option<InjectionTarget<'_>>,
    ) -> ChannelState<f32> {
        match self.registry.movement_axis(handle) {
            Some(axis) => self.engine.apply_scalar_policy(axis, current, target),
            None => current,
        }
    }

    /// A legacy controller-state read for `device_index`. The first 2D axis
    /// of such a controller is always movement.
    pub fn on_controller_state(
        &self,
        device_index: u32,
        current: ChannelState<Vec2>,
    ) -> ChannelState<Vec2> {
        self.engine
            .apply_policy(current, Some(InjectionTarget::DeviceIndex(device_index)))
    }

    /// The host instance was destroyed: forget its actions.
    pub fn reset(&self) {
        let forgotten = self.registry.len();
        self.registry.clear();
        debug!(actions = forgotten, "Interceptor reset");
    }
}
