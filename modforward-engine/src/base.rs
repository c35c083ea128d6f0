//! The base modules that define the canonical editor-id space.

use crate::settings::MASTER_BASE_MOD;
use crate::{EngineError, EngineResult, PatchSettings, RecordIndex};
use modforward_model::{LoadOrder, MajorRecord, Module};
use modforward_types::ModKey;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Base modules found in a load order, master first.
#[derive(Debug)]
pub struct BaseSet<'a> {
    modules: Vec<&'a Module>,
    keys: HashSet<ModKey>,
}

impl<'a> BaseSet<'a> {
    /// Collects the base modules named by `settings` from `load_order`.
    ///
    /// The master module must be present. Configured entries that do not
    /// parse or are not loaded are skipped with a warning; they still count
    /// as base modules for override detection when they parse. Each module
    /// is indexed once, however often it is listed.
    pub fn build(load_order: &'a LoadOrder, settings: &PatchSettings) -> EngineResult<Self> {
        let master = ModKey::parse(MASTER_BASE_MOD).map_err(modforward_model::ModelError::from)?;
        let master_module = load_order
            .get(&master)
            .ok_or_else(|| EngineError::MissingMasterBase(master.clone()))?;

        let mut modules = vec![master_module];
        let mut keys = HashSet::from([master]);

        for raw in &settings.base_mods {
            let mod_key = match ModKey::parse(raw) {
                Ok(mod_key) => mod_key,
                Err(e) => {
                    warn!(entry = %raw, "ignoring base module: {}", e);
                    continue;
                }
            };
            if !keys.insert(mod_key.clone()) {
                continue;
            }
            match load_order.get(&mod_key) {
                Some(module) => modules.push(module),
                None => warn!(module = %mod_key, "base module not in load order"),
            }
        }

        debug!(count = modules.len(), "base modules indexed");
        Ok(Self { modules, keys })
    }

    /// One editor-id index per base module, in base order.
    pub fn indices<K: MajorRecord>(&self) -> Vec<RecordIndex<'a, K>> {
        self.modules.iter().map(|&module| RecordIndex::build(module)).collect()
    }

    /// Every configured base module key, loaded or not.
    pub fn keys(&self) -> &HashSet<ModKey> {
        &self.keys
    }

    /// Base modules present in the load order, master first.
    pub fn modules(&self) -> &[&'a Module] {
        &self.modules
    }
}
