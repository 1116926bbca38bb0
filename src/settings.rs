//! Key bindings and display preferences
//!
//! Loaded from an optional JSON document; missing fields fall back to the
//! defaults. Settings are never written back.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Keys (lower-cased `KeyboardEvent.key` values) bound to each action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub up: Vec<String>,
    pub down: Vec<String>,
    pub left: Vec<String>,
    pub right: Vec<String>,
    /// Feed a carried shard into the hub
    pub process: Vec<String>,
    /// Start a new game
    pub reset: Vec<String>,
}

fn keys(names: &[&str]) -> Vec<String> {
    names.iter().map(|k| k.to_string()).collect()
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            up: keys(&["arrowup", "w"]),
            down: keys(&["arrowdown", "s"]),
            left: keys(&["arrowleft", "a"]),
            right: keys(&["arrowright", "d"]),
            process: keys(&["e", " "]),
            reset: keys(&["r"]),
        }
    }
}

impl KeyBindings {
    /// Bindings are matched case-insensitively
    pub fn normalized(mut self) -> Self {
        for list in [
            &mut self.up,
            &mut self.down,
            &mut self.left,
            &mut self.right,
            &mut self.process,
            &mut self.reset,
        ] {
            for key in list.iter_mut() {
                *key = key.to_lowercase();
            }
        }
        self
    }
}

/// Optional visual aids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    /// Outline each radar's reach
    pub sweep_outlines: bool,
    /// Show the processing prompt under the hub
    pub hub_prompt: bool,
    /// Print each shard's key cost on it
    pub shard_costs: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            sweep_outlines: true,
            hub_prompt: true,
            shard_costs: true,
        }
    }
}

/// Player preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub keys: KeyBindings,
    pub display: DisplayOptions,
}

impl Settings {
    /// Parse settings JSON; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.keys = settings.keys.normalized();
        Ok(settings)
    }

    /// Read and parse a settings file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Parse `json` if present, logging and falling back to defaults on error
    pub fn from_json_or_default(json: Option<&str>) -> Self {
        match json.map(Self::from_json) {
            Some(Ok(settings)) => {
                log::info!("Loaded settings");
                settings
            }
            Some(Err(e)) => {
                log::warn!("Ignoring settings: {}", e);
                Self::default()
            }
            None => Self::default(),
        }
    }
}
