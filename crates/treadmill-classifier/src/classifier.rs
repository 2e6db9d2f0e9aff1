//! Movement action classifier.

use treadmill_config::{DEFAULT_ACTION_PATTERNS, TreadmillConfig};

use crate::pattern::ActionPattern;

/// Decides whether an action name is a movement action.
///
/// Stateless after construction: patterns are parsed and lower-cased once,
/// and [`classify`](ActionClassifier::classify) is a pure function of the
/// name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionClassifier {
    patterns: Vec<ActionPattern>,
}

impl ActionClassifier {
    /// Build a classifier from wildcard patterns. Empty patterns are dropped.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            patterns: patterns
                .into_iter()
                .filter_map(|pattern| ActionPattern::parse(pattern.as_ref()))
                .collect(),
        }
    }

    /// Build a classifier from the configured movement patterns.
    pub fn from_config(config: &TreadmillConfig) -> Self {
        Self::new(&config.action_patterns)
    }

    /// True if `name` matches any pattern, ignoring case.
    pub fn classify(&self, name: &str) -> bool {
        if self.patterns.is_empty() {
            return false;
        }
        let lowered = name.to_lowercase();
        self.patterns
            .iter()
            .any(|pattern| pattern.matches_lowered(&lowered))
    }

    /// The parsed patterns, in configuration order.
    pub fn patterns(&self) -> &[ActionPattern] {
        &self.patterns
    }
}

impl Default for ActionClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_ACTION_PATTERNS)
    }
}
