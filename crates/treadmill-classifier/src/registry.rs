//! Per-instance cache of classified host actions.
//!
//! Hosts create named actions once and then read them many times by handle.
//! The registry classifies each action when it is created so the read path
//! is a single map lookup.

use std::collections::HashMap;
use std::hash::Hash;

use parking_lot::RwLock;
use tracing::debug;

use crate::{ActionClassifier, ScalarAxis};

/// What the registry knows about one host action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionBinding {
    /// Action name as the host created it.
    pub name: String,
    /// Whether the action receives treadmill input.
    pub is_movement: bool,
    /// Treadmill axis used when the action is one-dimensional.
    pub scalar_axis: ScalarAxis,
}

impl ActionBinding {
    /// Classify `name` with `classifier`.
    pub fn classify(classifier: &ActionClassifier, name: &str) -> Self {
        Self {
            name: name.to_string(),
            is_movement: classifier.classify(name),
            scalar_axis: ScalarAxis::for_action_name(name),
        }
    }
}

/// Concurrent map from host action handle to [`ActionBinding`].
///
/// Entries live until [`clear`](ActionRegistry::clear) is called, which the
/// owner does when the host instance that created the actions is destroyed.
#[derive(Debug)]
pub struct ActionRegistry<H> {
    classifier: ActionClassifier,
    bindings: RwLock<HashMap<H, ActionBinding>>,
}

impl<H: Eq + Hash> ActionRegistry<H> {
    /// Create an empty registry classifying with `classifier`.
    pub fn new(classifier: ActionClassifier) -> Self {
        Self {
            classifier,
            bindings: RwLock::new(HashMap::new()),
        }
    }

    /// Classify and remember the action `name` under `handle`, replacing any
    /// previous entry. Returns whether it is a movement action.
    pub fn register(&self, handle: H, name: &str) -> bool {
        let binding = ActionBinding::classify(&self.classifier, name);
        let is_movement = binding.is_movement;
        if is_movement {
            debug!(action = name, axis = ?binding.scalar_axis, "Registered movement action");
        }
        self.bindings.write().insert(handle, binding);
        is_movement
    }

    /// The binding for `handle`, if it was registered.
    pub fn binding(&self, handle: &H) -> Option<ActionBinding> {
        self.bindings.read().get(handle).cloned()
    }

    /// Whether `handle` is a registered movement action. Unknown handles are
    /// not movement.
    pub fn is_movement(&self, handle: &H) -> bool {
        self.bindings
            .read()
            .get(handle)
            .is_some_and(|binding| binding.is_movement)
    }

    /// Scalar axis for `handle`, if registered as a movement action.
    pub fn movement_axis(&self, handle: &H) -> Option<ScalarAxis> {
        self.bindings
            .read()
            .get(handle)
            .filter(|binding| binding.is_movement)
            .map(|binding| binding.scalar_axis)
    }

    /// Number of registered actions.
    pub fn len(&self) -> usize {
        self.bindings.read().len()
    }

    /// Whether no actions are registered.
    pub fn is_empty(&self) -> bool {
        self.bindings.read().is_empty()
    }

    /// Forget every registered action.
    pub fn clear(&self) {
        self.bindings.write().clear();
    }

    /// The classifier used for new registrations.
    pub fn classifier(&self) -> &ActionClassifier {
        &self.classifier
    }
}

impl<H: Eq + Hash> Default for ActionRegistry<H> {
    fn default() -> Self {
        Self::new(ActionClassifier::default())
    }
}
