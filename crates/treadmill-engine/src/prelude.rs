//! Prelude for the treadmill engine crate.
//!
//! Re-exports the engine types together with the policy and classifier
//! types that appear in its signatures.
//!
//! ```
//! use treadmill_engine::prelude::*;
//!
//! let engine = TreadmillEngine::new(TreadmillConfig::default())?;
//! let host = ChannelState::new(Vec2::new(0.1, 0.2), true);
//! assert_eq!(engine.apply_policy(host, None), host);
//! # Ok::<(), treadmill_config::ConfigError>(())
//! ```

pub use crate::engine::TreadmillEngine;
pub use crate::interceptor::ActionInterceptor;
pub use crate::pose::Quaternion;
pub use crate::processor::SignalProcessor;
pub use crate::state::{SmoothedState, TreadmillSnapshot, TreadmillState};
pub use crate::validator::{
    DirectionReport, DirectionValidator, DirectionVerdict, HeadsetSample, PlaneVector,
};
pub use treadmill_classifier::{ActionClassifier, ScalarAxis};
pub use treadmill_config::{InjectionTarget, InputMode, TargetSelector, TreadmillConfig};
pub use treadmill_policy::{ChannelState, InjectionPolicy, Vec2};
