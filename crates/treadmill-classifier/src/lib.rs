//! Action-name classification for treadmill injection
//!
//! Hosts identify input by name (`"/actions/main/in/Move"`,
//! `"LeftHand/Locomotion/Walk"`). This crate decides which of those names are
//! movement actions that should receive treadmill input, and which treadmill
//! axis a one-dimensional action reads.
//!
//! # Pattern grammar
//!
//! | Pattern   | Matches                     |
//! |-----------|-----------------------------|
//! | `move`    | exactly `move`              |
//! | `move*`   | names starting with `move`  |
//! | `*move`   | names ending with `move`    |
//! | `*move*`  | names containing `move`     |
//! | `*`       | everything                  |
//! | empty     | nothing                     |
//!
//! Matching ignores case.
//!
//! # Example
//!
//! ```
//! use treadmill_classifier::ActionClassifier;
//!
//! let classifier = ActionClassifier::default();
//! assert!(classifier.classify("LeftHand/Locomotion/Move"));
//! assert!(!classifier.classify("Jump"));
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod axis;
pub mod classifier;
pub mod pattern;
pub mod registry;

pub use axis::ScalarAxis;
pub use classifier::ActionClassifier;
pub use pattern::{ActionPattern, MatchKind};
pub use registry::{ActionBinding, ActionRegistry};
