//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult, InputMode, TargetSelector, validation::validate_config};

/// Default serial port of the treadmill peripheral.
pub const DEFAULT_COM_PORT: &str = "COM3";
/// Default serial baud rate of the treadmill peripheral.
pub const DEFAULT_BAUD_RATE: u32 = 115_200;
/// Default factor applied to pad deflection after the deadzone.
pub const DEFAULT_SPEED_MULTIPLIER: f32 = 1.5;
/// Default per-axis deadzone.
pub const DEFAULT_DEADZONE: f32 = 0.1;
/// Default EMA smoothing factor.
pub const DEFAULT_SMOOTHING_FACTOR: f32 = 0.3;
/// Default magnitude above which the treadmill counts as active.
pub const DEFAULT_ACTIVATION_THRESHOLD: f32 = 0.05;
/// Default movement action patterns.
pub const DEFAULT_ACTION_PATTERNS: [&str; 4] = ["*move*", "*locomotion*", "*walk*", "*thumbstick*"];
/// Debug-level default logging.
pub const DEFAULT_DEBUG_LOG: bool = true;

/// Engine configuration, immutable once loaded.
///
/// Deserialization accepts the camelCase key names used by existing
/// configuration files, including `smoothing` for [`smoothing_factor`] and
/// the legacy `targetControllerIndex` / `targetPaths` keys, and validates
/// the result.
///
/// [`smoothing_factor`]: TreadmillConfig::smoothing_factor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawTreadmillConfig")]
pub struct TreadmillConfig {
    /// Master switch; when false every intercepted read passes through.
    pub enabled: bool,
    /// Serial port, used by the hardware reader only.
    pub com_port: String,
    /// Serial baud rate, used by the hardware reader only.
    pub baud_rate: u32,
    /// Factor applied after the deadzone, before clamping.
    pub speed_multiplier: f32,
    /// Per-axis deadzone in `[0, 1)`.
    pub deadzone: f32,
    /// EMA factor in `[0, 1]`; 1 tracks raw input exactly.
    pub smoothing_factor: f32,
    /// Magnitude in `[0, 1)` above which the treadmill is active.
    pub activation_threshold: f32,
    /// How treadmill input merges with host input.
    pub input_mode: InputMode,
    /// Restricts injection to matching targets; `None` injects everywhere.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_selector: Option<TargetSelector>,
    /// Ordered wildcard patterns naming movement actions.
    pub action_patterns: Vec<String>,
    /// Selects debug-level default logging.
    pub debug_log: bool,
}

impl Default for TreadmillConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            com_port: DEFAULT_COM_PORT.to_string(),
            baud_rate: DEFAULT_BAUD_RATE,
            speed_multiplier: DEFAULT_SPEED_MULTIPLIER,
            deadzone: DEFAULT_DEADZONE,
            smoothing_factor: DEFAULT_SMOOTHING_FACTOR,
            activation_threshold: DEFAULT_ACTIVATION_THRESHOLD,
            input_mode: InputMode::default(),
            target_selector: None,
            action_patterns: DEFAULT_ACTION_PATTERNS.iter().map(|p| (*p).to_string()).collect(),
            debug_log: DEFAULT_DEBUG_LOG,
        }
    }
}

impl TreadmillConfig {
    /// Parse and validate a JSON document.
    ///
    /// Missing keys take their defaults and unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON,
    /// [`ConfigError::UnknownInputMode`] for an unrecognised mode name and
    /// [`ConfigError::OutOfRange`] for a field outside its accepted range.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let raw: RawTreadmillConfig = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    /// Read, parse and validate a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise the
    /// errors of [`TreadmillConfig::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns the [`serde_json::Error`] if serialization fails.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Check every field against its accepted range.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError::OutOfRange`] found.
    pub fn validate(&self) -> ConfigResult<()> {
        validate_config(self)
    }

    /// Set the injection mode.
    pub fn with_input_mode(mut self, mode: InputMode) -> Self {
        self.input_mode = mode;
        self
    }

    /// Set the deadzone.
    pub fn with_deadzone(mut self, deadzone: f32) -> Self {
        self.deadzone = deadzone;
        self
    }

    /// Set the speed multiplier.
    pub fn with_speed_multiplier(mut self, multiplier: f32) -> Self {
        self.speed_multiplier = multiplier;
        self
    }

    /// Set the smoothing factor.
    pub fn with_smoothing_factor(mut self, alpha: f32) -> Self {
        self.smoothing_factor = alpha;
        self
    }

    /// Set the activation threshold.
    pub fn with_activation_threshold(mut self, threshold: f32) -> Self {
        self.activation_threshold = threshold;
        self
    }

    /// Restrict injection to `selector`.
    pub fn with_target_selector(mut self, selector: TargetSelector) -> Self {
        self.target_selector = Some(selector);
        self
    }

    /// Replace the movement action patterns.
    pub fn with_action_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.action_patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    /// Enable or disable injection.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// On-disk shape of the configuration, before mode parsing, legacy key
/// resolution and validation.
#[derive(Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawTreadmillConfig {
    enabled: bool,
    com_port: String,
    baud_rate: u32,
    speed_multiplier: f32,
    deadzone: f32,
    #[serde(alias = "smoothing")]
    smoothing_factor: f32,
    activation_threshold: f32,
    input_mode: String,
    target_selector: Option<TargetSelector>,
    target_controller_index: Option<i64>,
    target_paths: Option<Vec<String>>,
    action_patterns: Vec<String>,
    debug_log: bool,
}

impl Default for RawTreadmillConfig {
    fn default() -> Self {
        let defaults = TreadmillConfig::default();
        Self {
            enabled: defaults.enabled,
            com_port: defaults.com_port,
            baud_rate: defaults.baud_rate,
            speed_multiplier: defaults.speed_multiplier,
            deadzone: defaults.deadzone,
            smoothing_factor: defaults.smoothing_factor,
            activation_threshold: defaults.activation_threshold,
            input_mode: defaults.input_mode.as_str().to_string(),
            target_selector: None,
            target_controller_index: None,
            target_paths: None,
            action_patterns: defaults.action_patterns,
            debug_log: defaults.debug_log,
        }
    }
}

impl RawTreadmillConfig {
    /// `targetSelector` wins, then a non-negative `targetControllerIndex`,
    /// then a non-empty `targetPaths`.
    fn resolve_target(&mut self) -> ConfigResult<Option<TargetSelector>> {
        if let Some(selector) = self.target_selector.take() {
            return Ok(Some(selector));
        }
        if let Some(index) = self.target_controller_index.filter(|index| *index >= 0) {
            let Ok(device) = u32::try_from(index) else {
                return Err(ConfigError::out_of_range(
                    "targetControllerIndex",
                    index,
                    "-1 or a device index",
                ));
            };
            return Ok(Some(TargetSelector::DeviceIndex(device)));
        }
        Ok(self
            .target_paths
            .take()
            .filter(|paths| !paths.is_empty())
            .map(TargetSelector::Paths))
    }
}

impl TryFrom<RawTreadmillConfig> for TreadmillConfig {
    type Error = ConfigError;

    fn try_from(mut raw: RawTreadmillConfig) -> Result<Self, Self::Error> {
        let target_selector = raw.resolve_target()?;
        let config = TreadmillConfig {
            enabled: raw.enabled,
            com_port: raw.com_port,
            baud_rate: raw.baud_rate,
            speed_multiplier: raw.speed_multiplier,
            deadzone: raw.deadzone,
            smoothing_factor: raw.smoothing_factor,
            activation_threshold: raw.activation_threshold,
            input_mode: raw.input_mode.parse()?,
            target_selector,
            action_patterns: raw.action_patterns,
            debug_log: raw.debug_log,
        };
        config.validate()?;
        Ok(config)
    }
}
