//! File adapters for the `modforward` binary.
//!
//! The load order and the patch are exchanged as JSON: an array of
//! modules, lowest priority first, each shaped like
//! `{ "mod_key": "Skyrim.esm", "spells": [...], "books": [...] }`.

use anyhow::{Context, Result, bail};
use modforward_engine::PatchSettings;
use modforward_model::{LoadOrder, Module};
use modforward_types::ModKey;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Patch module name used when none is given.
pub const DEFAULT_PATCH_NAME: &str = "ModForwardPatch.esp";

/// Parses a load order from JSON text.
pub fn parse_load_order(json: &str) -> Result<LoadOrder> {
    let modules: Vec<Module> = serde_json::from_str(json).context("invalid load order JSON")?;
    Ok(LoadOrder::from_modules(modules)?)
}

/// Reads a load order file.
pub fn load_load_order(path: &Path) -> Result<LoadOrder> {
    let text = fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;
    let load_order = parse_load_order(&text)?;
    info!(path = %path.display(), modules = load_order.len(), "load order read");
    Ok(load_order)
}

/// Reads settings from `path`, or returns the defaults when there is none.
pub fn load_settings(path: Option<&Path>) -> Result<PatchSettings> {
    match path {
        Some(path) => {
            let settings = PatchSettings::load(path)?;
            debug!(
                base_mods = settings.base_mods.len(),
                preferred = settings.preferred_override_order.len(),
                "settings read"
            );
            Ok(settings)
        }
        None => {
            info!("no settings file given, using defaults");
            Ok(PatchSettings::default())
        }
    }
}

/// Creates the empty patch module.
///
/// The name must not collide with a module already in the load order.
pub fn new_patch(load_order: &LoadOrder, name: &ModKey) -> Result<Module> {
    if load_order.contains(name) {
        bail!("patch module {name} is already part of the load order");
    }
    Ok(Module::new(name.clone()))
}

/// `<patch-name>.json` in the current directory.
pub fn default_output(patch_name: &ModKey) -> PathBuf {
    PathBuf::from(format!("{patch_name}.json"))
}

/// Writes the patch as pretty-printed JSON.
pub fn write_patch(path: &Path, patch: &Module) -> Result<()> {
    let json = serde_json::to_string_pretty(patch)?;
    fs::write(path, json).with_context(|| format!("cannot write {}", path.display()))?;
    Ok(())
}
