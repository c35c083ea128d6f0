//! Priority resolution.
//!
//! Picks, for every editor id, the version from the module ranked highest in
//! the user's preferred override order. Load-order position plays no part:
//! the preferred order is the only ranking, and unlisted modules never win.

use indexmap::IndexMap;
use modforward_model::{LoadOrder, MajorRecord, ModContext};
use modforward_types::ModKey;
use std::collections::HashMap;
use tracing::debug;

use crate::OverridePair;

/// The record chosen for one editor id.
///
/// `effective` is empty straight out of [`resolve`]; the idempotence filter
/// fills it with whatever the load order currently resolves the id to.
#[derive(Debug)]
pub struct WinningOverride<'a, K> {
    pub mod_key: &'a ModKey,
    pub record: &'a K,
    pub effective: Option<ModContext<'a, K>>,
}

impl<K> Clone for WinningOverride<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for WinningOverride<'_, K> {}

impl<'a, K> WinningOverride<'a, K> {
    pub fn new(mod_key: &'a ModKey, record: &'a K) -> Self {
        Self {
            mod_key,
            record,
            effective: None,
        }
    }
}

impl<'a, K: MajorRecord> WinningOverride<'a, K> {
    /// The winner as an override of the currently effective record, once known.
    ///
    /// Both sides are attributed to the module that defined the record's
    /// form key, not the module that supplied this version of it.
    pub fn as_pair(&self) -> Option<OverridePair<'a, K>> {
        self.effective.map(|effective| OverridePair {
            original_mod: effective.record.form_key().mod_key(),
            overriding_mod: self.record.form_key().mod_key(),
            original: effective.record,
            overriding: self.record,
        })
    }
}

/// Winners keyed by editor id, in the order they were claimed.
pub type Winners<'a, K> = IndexMap<&'a str, WinningOverride<'a, K>>;

/// Resolves one winner per editor id from `priority` (highest first).
///
/// Entries of `priority` missing from the load order, or contributing no
/// keyed records of kind `K`, are skipped. Within a module the first record
/// carrying an id claims it.
pub fn resolve<'a, K: MajorRecord>(
    load_order: &'a LoadOrder,
    priority: &[ModKey],
) -> Winners<'a, K> {
    let mut contributions: HashMap<&'a ModKey, Vec<&'a K>> = HashMap::new();
    for module in load_order {
        let records: Vec<&K> = module
            .records::<K>()
            .iter()
            .filter(|r| r.editor_id().is_some())
            .collect();
        if !records.is_empty() {
            contributions.insert(&module.mod_key, records);
        }
    }

    let mut winners: Winners<'a, K> = IndexMap::new();
    for wanted in priority {
        let Some(module) = load_order.get(wanted) else {
            debug!(kind = %K::KIND, module = %wanted, "preferred module not in load order");
            continue;
        };
        let Some(records) = contributions.get(&module.mod_key) else {
            continue;
        };
        for &record in records {
            let Some(editor_id) = record.editor_id() else {
                continue;
            };
            winners
                .entry(editor_id)
                .or_insert_with(|| WinningOverride::new(&module.mod_key, record));
        }
    }

    winners
}
