//! Editor-id index over one base module.

use modforward_model::{MajorRecord, ModContext, Module};
use modforward_types::ModKey;
use std::collections::HashMap;

/// Lookup from editor id to record for a single module and kind.
///
/// Records without an editor id are left out. If a module defines the same
/// editor id twice, the first record keeps the slot.
#[derive(Debug)]
pub struct RecordIndex<'a, K> {
    mod_key: &'a ModKey,
    records: HashMap<&'a str, &'a K>,
}

impl<'a, K: MajorRecord> RecordIndex<'a, K> {
    /// Indexes the records of kind `K` in `module`.
    pub fn build(module: &'a Module) -> Self {
        Self::from_records(&module.mod_key, module.records::<K>())
    }

    /// Indexes an explicit record sequence attributed to `mod_key`.
    pub fn from_records(mod_key: &'a ModKey, records: impl IntoIterator<Item = &'a K>) -> Self {
        let mut map = HashMap::new();
        for record in records {
            if let Some(editor_id) = record.editor_id() {
                map.entry(editor_id).or_insert(record);
            }
        }
        Self {
            mod_key,
            records: map,
        }
    }

    /// The module this index was built from.
    pub fn mod_key(&self) -> &'a ModKey {
        self.mod_key
    }

    /// Resolves an editor id to its record in this module.
    pub fn get(&self, editor_id: &str) -> Option<ModContext<'a, K>> {
        self.records
            .get(editor_id)
            .map(|record| ModContext::new(self.mod_key, *record))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
