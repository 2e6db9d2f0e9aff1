//! Action classification command

use anyhow::Result;
use serde::Serialize;
use treadmill_classifier::{ActionBinding, ActionClassifier};

use crate::commands::{LoadedConfig, resolve_config};
use crate::output;

/// One classified action name.
#[derive(Debug, Serialize)]
pub struct Classification {
    pub name: String,
    pub movement: bool,
    pub axis: &'static str,
}

impl From<ActionBinding> for Classification {
    fn from(binding: ActionBinding) -> Self {
        Self {
            name: binding.name,
            movement: binding.is_movement,
            axis: binding.scalar_axis.as_str(),
        }
    }
}

/// Execute the classify command
pub fn execute(names: &[String], loaded: LoadedConfig, json: bool) -> Result<()> {
    let config = resolve_config(loaded)?;
    let classifier = ActionClassifier::from_config(&config);
    let results: Vec<Classification> = names
        .iter()
        .map(|name| ActionBinding::classify(&classifier, name).into())
        .collect();
    output::print_classifications(&results, json)
}
