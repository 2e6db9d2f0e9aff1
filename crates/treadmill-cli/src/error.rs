//! Error types for treadctl

use std::path::PathBuf;

use thiserror::Error;
use treadmill_config::ConfigError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error("Cannot read samples file {path:?}: {source}")]
    SamplesUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid samples file: {0}")]
    InvalidSamples(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code reported for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::SamplesUnreadable { .. } => 3,
            CliError::InvalidConfiguration(_) | CliError::InvalidSamples(_) => 4,
        }
    }
}
