//! Injection mode selection.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::ConfigError;

/// How treadmill input is merged into the value the host application read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Replace the host value while the treadmill is active.
    Override,
    /// Sum host and treadmill values, clamped to `[-1, 1]`.
    Additive,
    /// Treadmill wins while active, otherwise the host value passes through.
    #[default]
    Smart,
}

impl InputMode {
    /// All modes, in declaration order.
    pub const ALL: [InputMode; 3] = [InputMode::Override, InputMode::Additive, InputMode::Smart];

    /// Lowercase name used in configuration files and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            InputMode::Override => "override",
            InputMode::Additive => "additive",
            InputMode::Smart => "smart",
        }
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputMode {
    type Err = ConfigError;

    /// Parse a mode name, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        InputMode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ConfigError::UnknownInputMode(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for InputMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() -> Result<(), ConfigError> {
        assert_eq!("Override".parse::<InputMode>()?, InputMode::Override);
        assert_eq!("ADDITIVE".parse::<InputMode>()?, InputMode::Additive);
        assert_eq!(" smart ".parse::<InputMode>()?, InputMode::Smart);
        Ok(())
    }

    #[test]
    fn rejects_unknown_name() {
        let result = "turbo".parse::<InputMode>();
        assert!(matches!(result, Err(ConfigError::UnknownInputMode(ref name)) if name == "turbo"));
    }

    #[test]
    fn display_round_trips_through_from_str() -> Result<(), ConfigError> {
        for mode in InputMode::ALL {
            assert_eq!(mode.to_string().parse::<InputMode>()?, mode);
        }
        Ok(())
    }

    #[test]
    fn default_is_smart() {
        assert_eq!(InputMode::default(), InputMode::Smart);
    }
}
