//! Treadmill locomotion engine
//!
//! Turns raw treadmill samples (a ring angle plus a 2-axis pad) into a
//! smoothed shared state, and merges that state into whatever host input
//! reads are intercepted.
//!
//! # Architecture
//!
//! ```text
//! hardware reader ──ingest──▶ SignalProcessor ──▶ TreadmillState (shared)
//!                                                      │
//!        host reads ──▶ ActionInterceptor ──▶ TreadmillEngine::apply_policy
//!                                                      │
//!     headset poses ──▶ DirectionValidator  ◀──────────┘
//! ```
//!
//! One producer thread calls [`TreadmillEngine::ingest`]; any number of
//! reader threads call the read and policy methods concurrently.
//!
//! # Example
//!
//! ```
//! use treadmill_config::TreadmillConfig;
//! use treadmill_engine::TreadmillEngine;
//!
//! let engine = TreadmillEngine::new(TreadmillConfig::default())?;
//! engine.ingest_at(90.0, 255, 127, 1_000);
//!
//! let state = engine.read_smoothed_state();
//! assert!(state.active);
//! assert!((state.x - 0.3).abs() < 1e-6);
//! # Ok::<(), treadmill_config::ConfigError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod engine;
pub mod interceptor;
pub mod pose;
pub mod prelude;
pub mod processor;
pub mod state;
pub mod validator;

pub use engine::{INJECTION_LOG_INTERVAL, TreadmillEngine};
pub use interceptor::ActionInterceptor;
pub use pose::Quaternion;
pub use processor::{INGEST_LOG_INTERVAL, SignalProcessor};
pub use state::{SmoothedState, TreadmillSnapshot, TreadmillState};
pub use validator::{
    DirectionReport, DirectionValidator, DirectionVerdict, HeadsetSample, PlaneVector,
    validate_direction,
};
