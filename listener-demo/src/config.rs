//! Scenario file loading and parsing

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Built-in scenario, used when no `--scenario` file is given
const DEFAULT_SCENARIO: &str = include_str!("../scenarios/default.toml");

/// A scenario: named listeners plus the steps to run against one registry
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub listeners: Vec<ListenerConfig>,
    #[serde(default)]
    pub steps: Vec<StepConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListenerConfig {
    /// Unique label used by steps to refer to this listener
    pub name: String,
    /// Printed when the listener fires (defaults to the label)
    pub message: Option<String>,
}

impl ListenerConfig {
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StepConfig {
    pub action: StepAction,
    pub event: String,
    /// Listener label, required for `add` and `remove`
    pub listener: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepAction {
    Add,
    Remove,
    Dispatch,
}

impl StepAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepAction::Add => "add",
            StepAction::Remove => "remove",
            StepAction::Dispatch => "dispatch",
        }
    }
}

/// Load a scenario from a TOML file
pub fn load_config(path: &Path) -> Result<ScenarioConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read scenario file: {:?}", path))?;

    let config: ScenarioConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse scenario file: {:?}", path))?;

    Ok(config)
}

/// The built-in reference scenario
pub fn default_config() -> Result<ScenarioConfig> {
    toml::from_str(DEFAULT_SCENARIO).context("Failed to parse built-in scenario")
}
