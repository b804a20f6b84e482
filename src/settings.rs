use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A TP-Link bulb to set up. Without a name the bulb's own alias is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TplinkBulbConfig {
    pub host: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub mount_lutron_lights: Option<bool>,
    pub mount_tplink_bulbs: Option<bool>,
    #[serde(default)]
    pub tplink_bulbs: Vec<TplinkBulbConfig>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            mount_lutron_lights: Some(true),
            mount_tplink_bulbs: Some(true),
            tplink_bulbs: vec![],
        }
    }
}

impl Settings {
    /// Reads settings from a JSON file. A missing or unreadable file falls back
    /// to the defaults, a malformed one is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Settings::default());
        };
        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content)
                .with_context(|| format!("Invalid settings file {}", path.display())),
            Err(e) => {
                warn!(
                    "Failed to read settings file {}, using default settings: {e}",
                    path.display()
                );
                Ok(Settings::default())
            }
        }
    }
}
