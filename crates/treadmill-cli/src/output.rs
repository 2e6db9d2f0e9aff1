//! Output formatting for CLI responses

use anyhow::{Error, Result};
use colored::Colorize;
use serde_json::json;
use treadmill_config::{TargetSelector, TreadmillConfig};
use treadmill_engine::{DirectionVerdict, SmoothedState};

use crate::commands::classify::Classification;
use crate::commands::replay::{ReplayStep, ReplaySummary};
use crate::error::CliError;

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let error_json = json!({
        "success": false,
        "error": {
            "message": error.to_string(),
            "type": error_type_name(error)
        }
    });
    match serde_json::to_string_pretty(&error_json) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Failed to format error as JSON: {e}"),
    }
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

fn error_type_name(error: &Error) -> &'static str {
    match error.downcast_ref::<CliError>() {
        Some(CliError::InvalidConfiguration(_)) => "invalid_configuration",
        Some(CliError::SamplesUnreadable { .. }) => "samples_unreadable",
        Some(CliError::InvalidSamples(_)) => "invalid_samples",
        None => "error",
    }
}

/// Print the effective configuration
pub fn print_config(config: &TreadmillConfig, json: bool) -> Result<()> {
    if json {
        let output = json!({
            "success": true,
            "config": config
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", "Configuration OK".green().bold());
    println!("  Enabled:              {}", config.enabled);
    println!("  Input mode:           {}", config.input_mode);
    println!("  Speed multiplier:     {}", config.speed_multiplier);
    println!("  Deadzone:             {}", config.deadzone);
    println!("  Smoothing factor:     {}", config.smoothing_factor);
    println!("  Activation threshold: {}", config.activation_threshold);
    println!("  Target:               {}", describe_target(config.target_selector.as_ref()));
    println!("  Action patterns:      {}", config.action_patterns.join(", "));
    println!("  Serial port:          {} @ {} baud", config.com_port, config.baud_rate);
    println!("  Debug log:            {}", config.debug_log);
    Ok(())
}

fn describe_target(selector: Option<&TargetSelector>) -> String {
    match selector {
        None => "all".to_string(),
        Some(TargetSelector::DeviceIndex(index)) => format!("device {index}"),
        Some(TargetSelector::Paths(paths)) => paths.join(", "),
    }
}

/// Print action classifications
pub fn print_classifications(results: &[Classification], json: bool) -> Result<()> {
    if json {
        let output = json!({
            "success": true,
            "actions": results
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for result in results {
        if result.movement {
            println!(
                "  {} {} (scalar axis {})",
                result.name.bold(),
                "movement".green(),
                result.axis
            );
        } else {
            println!("  {} {}", result.name.bold(), "ignored".dimmed());
        }
    }
    Ok(())
}

fn format_state(state: &SmoothedState) -> String {
    format!(
        "t={}ms x={:+.3} y={:+.3} yaw={:.1} {}",
        state.timestamp_ms,
        state.x,
        state.y,
        state.yaw,
        if state.active { "active" } else { "inactive" }
    )
}

/// Print every replayed step followed by the summary
pub fn print_replay(steps: &[ReplayStep], summary: &ReplaySummary, json: bool) -> Result<()> {
    if json {
        let output = json!({
            "success": true,
            "steps": steps,
            "summary": summary
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for step in steps {
        let direction = match step.direction {
            Some(DirectionVerdict::Ok) => format!(" {}", "direction ok".green()),
            Some(DirectionVerdict::Mismatch) => format!(" {}", "direction mismatch".red()),
            None => String::new(),
        };
        println!("  #{:<5} {}{}", step.index, format_state(&step.state), direction);
    }
    print_summary_human(summary);
    Ok(())
}

/// Print only the replay summary
pub fn print_replay_summary(summary: &ReplaySummary, json: bool) -> Result<()> {
    if json {
        let output = json!({
            "success": true,
            "summary": summary
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }
    print_summary_human(summary);
    Ok(())
}

fn print_summary_human(summary: &ReplaySummary) {
    println!("{}", "Replay summary:".bold());
    println!("  Samples:     {}", summary.samples);
    println!("  Final state: {}", format_state(&summary.final_state));
    println!(
        "  Pose:        w={:.4} y={:.4}",
        summary.pose.w, summary.pose.y
    );
    if summary.direction_checks > 0 {
        println!(
            "  Direction:   {} checks, {} mismatches",
            summary.direction_checks, summary.direction_mismatches
        );
    }
}
