//! Configuration check command

use anyhow::Result;

use crate::commands::{LoadedConfig, resolve_config};
use crate::output;

/// Execute the check-config command
pub fn execute(loaded: LoadedConfig, json: bool) -> Result<()> {
    let config = resolve_config(loaded)?;
    output::print_config(&config, json)
}
