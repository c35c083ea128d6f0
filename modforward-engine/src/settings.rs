//! Patch settings.
//!
//! Loaded once at startup and passed by reference to the [`crate::Patcher`].
//! The JSON field names match the settings file users already have
//! (`BaseMods`, `PreferredOverrideOrder`).

use crate::{EngineError, EngineResult};
use modforward_types::ModKey;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The base module that must be present in every load order.
pub const MASTER_BASE_MOD: &str = "Skyrim.esm";

/// Base modules used when the settings file does not name any.
pub const DEFAULT_BASE_MODS: [&str; 5] = [
    "Skyrim.esm",
    "Update.esm",
    "Dawnguard.esm",
    "HearthFires.esm",
    "Dragonborn.esm",
];

/// User configuration for a patch run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatchSettings {
    /// Modules whose records define the canonical editor-id space.
    ///
    /// Kept as raw file names: an entry that does not parse only drops
    /// that one base module, it does not reject the whole file.
    #[serde(rename = "BaseMods")]
    pub base_mods: Vec<String>,

    /// Modules whose overrides get forwarded, highest priority first.
    /// Modules not listed here never win.
    #[serde(rename = "PreferredOverrideOrder")]
    pub preferred_override_order: Vec<ModKey>,
}

impl Default for PatchSettings {
    fn default() -> Self {
        Self {
            base_mods: DEFAULT_BASE_MODS.iter().map(|s| (*s).to_string()).collect(),
            preferred_override_order: Vec::new(),
        }
    }
}

impl PatchSettings {
    /// Parses settings from JSON text. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> EngineResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads settings from a JSON file.
    pub fn load(path: &Path) -> EngineResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| EngineError::SettingsIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Sets the preferred override order, highest priority first.
    pub fn with_preferred_order(mut self, order: impl IntoIterator<Item = ModKey>) -> Self {
        self.preferred_override_order = order.into_iter().collect();
        self
    }

    /// Replaces the configured base modules.
    pub fn with_base_mods<S: Into<String>>(mut self, mods: impl IntoIterator<Item = S>) -> Self {
        self.base_mods = mods.into_iter().map(Into::into).collect();
        self
    }
}
