//! Injection target selection.
//!
//! Legacy hosts address controllers by device index; action-based hosts
//! address input sources by interaction-profile path such as
//! `/user/hand/left/input/thumbstick`.

use serde::{Deserialize, Serialize};

/// Restricts injection to a subset of host targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TargetSelector {
    /// Only the controller with this device index.
    DeviceIndex(u32),
    /// Only input sources whose path is in this list.
    Paths(Vec<String>),
}

/// The identity of the host target behind an intercepted read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectionTarget<'a> {
    /// A legacy controller device index.
    DeviceIndex(u32),
    /// An interaction-profile path.
    Path(&'a str),
}

impl TargetSelector {
    /// Whether `target` is selected.
    ///
    /// A target of a different kind than the selector never matches.
    ///
    /// ```
    /// use treadmill_config::{InjectionTarget, TargetSelector};
    ///
    /// let selector = TargetSelector::DeviceIndex(1);
    /// assert!(selector.matches(InjectionTarget::DeviceIndex(1)));
    /// assert!(!selector.matches(InjectionTarget::DeviceIndex(2)));
    /// ```
    pub fn matches(&self, target: InjectionTarget<'_>) -> bool {
        match (self, target) {
            (TargetSelector::DeviceIndex(index), InjectionTarget::DeviceIndex(candidate)) => {
                *index == candidate
            }
            (TargetSelector::Paths(paths), InjectionTarget::Path(candidate)) => {
                paths.iter().any(|path| path == candidate)
            }
            _ => false,
        }
    }
}
