//! Sample replay command

use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::info;
use treadmill_engine::{
    DirectionValidator, DirectionVerdict, HeadsetSample, Quaternion, SmoothedState,
    TreadmillEngine,
};

use crate::commands::{LoadedConfig, resolve_config};
use crate::error::CliError;
use crate::output;

/// Spacing applied to samples recorded without a timestamp (100 Hz).
pub const DEFAULT_SAMPLE_INTERVAL_MS: u64 = 10;

/// One recorded hardware sample.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaySample {
    pub ring_angle: f32,
    pub pad_x: u8,
    pub pad_y: u8,
    #[serde(default)]
    pub timestamp_ms: Option<u64>,
    /// Headset position recorded on the same tick, if any.
    #[serde(default)]
    pub headset: Option<HeadsetSample>,
}

/// Smoothed state after one replayed sample.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayStep {
    pub index: usize,
    #[serde(flatten)]
    pub state: SmoothedState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<DirectionVerdict>,
}

/// Outcome of a whole replay.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaySummary {
    pub samples: usize,
    pub final_state: SmoothedState,
    pub pose: Quaternion,
    pub direction_checks: usize,
    pub direction_mismatches: usize,
}

/// Read and parse a samples file.
pub fn load_samples(path: &Path) -> Result<Vec<ReplaySample>, CliError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CliError::SamplesUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&contents)?)
}

/// Run `samples` through a fresh engine.
pub fn run(engine: &TreadmillEngine, samples: &[ReplaySample]) -> (Vec<ReplayStep>, ReplaySummary) {
    let mut validator = DirectionValidator::new();
    let mut steps = Vec::with_capacity(samples.len());
    let mut timestamp = 0u64;
    let mut direction_checks = 0usize;
    let mut direction_mismatches = 0usize;

    for (index, sample) in samples.iter().enumerate() {
        timestamp = sample
            .timestamp_ms
            .unwrap_or_else(|| timestamp.saturating_add(DEFAULT_SAMPLE_INTERVAL_MS));
        let snapshot = engine.ingest_at(sample.ring_angle, sample.pad_x, sample.pad_y, timestamp);

        let direction = sample
            .headset
            .and_then(|headset| validator.observe(Some(headset), &snapshot))
            .map(|report| report.verdict);
        if let Some(verdict) = direction {
            direction_checks = direction_checks.saturating_add(1);
            if verdict == DirectionVerdict::Mismatch {
                direction_mismatches = direction_mismatches.saturating_add(1);
            }
        }

        steps.push(ReplayStep {
            index,
            state: snapshot.smoothed(),
            direction,
        });
    }

    let summary = ReplaySummary {
        samples: samples.len(),
        final_state: engine.read_smoothed_state(),
        pose: engine.pose(),
        direction_checks,
        direction_mismatches,
    };
    (steps, summary)
}

/// Execute the replay command
pub fn execute(samples_path: &Path, loaded: LoadedConfig, summary_only: bool, json: bool) -> Result<()> {
    let config = resolve_config(loaded)?;
    let samples = load_samples(samples_path)?;
    let engine = TreadmillEngine::new(config).map_err(CliError::from)?;

    info!(samples = samples.len(), path = %samples_path.display(), "Replaying samples");
    let (steps, summary) = run(&engine, &samples);
    engine.shutdown();

    if summary_only {
        output::print_replay_summary(&summary, json)
    } else {
        output::print_replay(&steps, &summary, json)
    }
}
