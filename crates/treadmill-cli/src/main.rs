//! treadctl - Treadmill Locomotion CLI
//!
//! Offline tooling for the treadmill locomotion engine: validate a
//! configuration file, replay recorded hardware samples through the engine,
//! and check which action names receive treadmill input.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod error;
mod output;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use treadmill_config::{DEFAULT_DEBUG_LOG, TreadmillConfig};

use crate::commands::{Commands, LoadedConfig};
use crate::error::CliError;

#[derive(Parser, Debug)]
#[command(name = "treadctl")]
#[command(about = "Treadmill locomotion CLI - check configuration and replay recorded samples")]
#[command(version)]
#[command(long_about = "
treadctl drives the treadmill locomotion engine offline. It validates
configuration files, replays recorded ring-angle and pad samples through
the same smoothing and injection code the runtime uses, and shows which
action names are treated as movement.

Use --json for machine-readable output suitable for scripting.
")]
struct Cli {
    /// Output format (human-readable or JSON)
    #[arg(
        long,
        global = true,
        help = "Output in JSON format for machine parsing"
    )]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

fn log_level(verbose: u8, debug_log: bool) -> &'static str {
    match verbose {
        0 if debug_log => "debug",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Whether the loaded config asks for debug-level default logging. With no
/// usable config the built-in default applies.
fn config_debug_log(loaded: &LoadedConfig) -> bool {
    match loaded {
        Some(Ok(config)) => config.debug_log,
        _ => DEFAULT_DEBUG_LOG,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded: LoadedConfig = cli.command.config_path().map(TreadmillConfig::load);
    let level = log_level(cli.verbose, config_debug_log(&loaded));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("treadctl={level},treadmill={level}").into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match execute_command(&cli, loaded) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }

            let exit_code = e.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(exit_code)
        }
    }
}

fn execute_command(cli: &Cli, loaded: LoadedConfig) -> Result<()> {
    match &cli.command {
        Commands::CheckConfig { .. } => commands::check_config::execute(loaded, cli.json),
        Commands::Replay {
            samples, summary, ..
        } => commands::replay::execute(samples, loaded, *summary, cli.json),
        Commands::Classify { names, .. } => commands::classify::execute(names, loaded, cli.json),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn parse_check_config() -> TestResult {
        let cli = Cli::try_parse_from(["treadctl", "check-config", "treadmill.json"])?;
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
        assert!(matches!(
            cli.command,
            Commands::CheckConfig { ref file } if file == &PathBuf::from("treadmill.json")
        ));
        Ok(())
    }

    #[test]
    fn parse_global_json_flag_after_subcommand() -> TestResult {
        let cli = Cli::try_parse_from(["treadctl", "classify", "Move", "--json"])?;
        assert!(cli.json);
        Ok(())
    }

    #[test]
    fn parse_replay_options() -> TestResult {
        let cli = Cli::try_parse_from([
            "treadctl", "-vv", "replay", "walk.json", "--config", "c.json", "--summary",
        ])?;
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Replay {
                samples,
                config,
                summary,
            } => {
                assert_eq!(samples, PathBuf::from("walk.json"));
                assert_eq!(config, Some(PathBuf::from("c.json")));
                assert!(summary);
            }
            other => return Err(format!("unexpected command {other:?}").into()),
        }
        Ok(())
    }

    #[test]
    fn classify_requires_a_name() {
        assert!(Cli::try_parse_from(["treadctl", "classify"]).is_err());
    }

    #[test]
    fn config_path_follows_command() -> TestResult {
        let cli = Cli::try_parse_from(["treadctl", "check-config", "a.json"])?;
        assert_eq!(cli.command.config_path(), Some(&PathBuf::from("a.json")));
        let cli = Cli::try_parse_from(["treadctl", "classify", "Move"])?;
        assert_eq!(cli.command.config_path(), None);
        Ok(())
    }

    #[test]
    fn missing_config_logs_like_empty_config() -> TestResult {
        let empty: LoadedConfig = Some(TreadmillConfig::from_json_str("{}"));
        assert_eq!(config_debug_log(&None), config_debug_log(&empty));
        assert_eq!(log_level(0, config_debug_log(&None)), "debug");

        let quiet: LoadedConfig = Some(TreadmillConfig::from_json_str(r#"{ "debugLog": false }"#));
        assert_eq!(log_level(0, config_debug_log(&quiet)), "warn");
        Ok(())
    }

    #[test]
    fn verbosity_maps_to_level() {
        assert_eq!(log_level(0, false), "warn");
        assert_eq!(log_level(0, true), "debug");
        assert_eq!(log_level(1, true), "info");
        assert_eq!(log_level(3, false), "trace");
    }
}
