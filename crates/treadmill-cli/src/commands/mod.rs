//! Command implementations for treadctl

pub mod check_config;
pub mod classify;
pub mod replay;

use std::path::PathBuf;

use clap::Subcommand;
use treadmill_config::{ConfigResult, TreadmillConfig};

use crate::error::CliError;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse and validate a configuration file and print the effective settings
    CheckConfig {
        /// Configuration file (JSON)
        file: PathBuf,
    },

    /// Feed recorded treadmill samples through the engine
    Replay {
        /// Samples file: a JSON array of {ringAngle, padX, padY, timestampMs?, headset?}
        samples: PathBuf,
        /// Configuration file (defaults apply when omitted)
        #[arg(short, long, env = "TREADCTL_CONFIG")]
        config: Option<PathBuf>,
        /// Print only the final state
        #[arg(short, long)]
        summary: bool,
    },

    /// Classify action names as movement or not
    Classify {
        /// Action names to classify
        #[arg(required = true)]
        names: Vec<String>,
        /// Configuration file (defaults apply when omitted)
        #[arg(short, long, env = "TREADCTL_CONFIG")]
        config: Option<PathBuf>,
    },
}

impl Commands {
    /// The configuration file this command reads, if any.
    pub fn config_path(&self) -> Option<&PathBuf> {
        match self {
            Commands::CheckConfig { file } => Some(file),
            Commands::Replay { config, .. } | Commands::Classify { config, .. } => config.as_ref(),
        }
    }
}

/// The configuration loaded up front by `main`, before logging starts.
pub type LoadedConfig = Option<ConfigResult<TreadmillConfig>>;

/// Resolve the pre-loaded configuration, falling back to defaults.
pub fn resolve_config(loaded: LoadedConfig) -> Result<TreadmillConfig, CliError> {
    match loaded {
        Some(result) => Ok(result?),
        None => Ok(TreadmillConfig::default()),
    }
}
