//! Override detection against the base modules.
//!
//! A record overrides a base record when it comes from a non-base module
//! and carries an editor id that one of the base indices knows. The
//! results are informational: they feed the first report and nothing else.

use crate::RecordIndex;
use modforward_model::{MajorRecord, ModContext};
use modforward_types::ModKey;
use std::collections::HashSet;
use tracing::debug;

/// A base record and a record from another module that shares its editor id.
#[derive(Debug)]
pub struct OverridePair<'a, K> {
    pub original_mod: &'a ModKey,
    pub overriding_mod: &'a ModKey,
    pub original: &'a K,
    pub overriding: &'a K,
}

impl<K> Clone for OverridePair<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for OverridePair<'_, K> {}

impl<'a, K> OverridePair<'a, K> {
    pub fn new(original: ModContext<'a, K>, overriding: ModContext<'a, K>) -> Self {
        Self {
            original_mod: original.mod_key,
            overriding_mod: overriding.mod_key,
            original: original.record,
            overriding: overriding.record,
        }
    }
}

/// Finds every contributing record that overrides a base record.
///
/// `contributing` is walked in order; for each record outside `base_mods`
/// that passes `filter` and has an editor id, one pair is emitted per base
/// index resolving that id. Records failing the filter are not reported.
pub fn scan<'a, K: MajorRecord>(
    base_indices: &[RecordIndex<'a, K>],
    base_mods: &HashSet<ModKey>,
    contributing: &[ModContext<'a, K>],
    filter: Option<&dyn Fn(&K) -> bool>,
) -> Vec<OverridePair<'a, K>> {
    let mut pairs = Vec::new();

    for context in contributing {
        if base_mods.contains(context.mod_key) {
            continue;
        }
        if let Some(filter) = filter
            && !filter(context.record)
        {
            continue;
        }
        let Some(editor_id) = context.record.editor_id() else {
            continue;
        };
        for index in base_indices {
            if let Some(original) = index.get(editor_id) {
                debug!(
                    kind = %K::KIND,
                    editor_id,
                    original = %original.mod_key,
                    overriding = %context.mod_key,
                    "override detected"
                );
                pairs.push(OverridePair::new(original, *context));
            }
        }
    }

    pairs
}
