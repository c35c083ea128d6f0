use crate::{Book, MajorRecord, Spell};
use modforward_types::ModKey;
use serde::{Deserialize, Serialize};

/// One plugin file: a key plus its records, grouped per kind.
///
/// A group behaves like a set keyed by form key. [`Module::set_record`]
/// replaces an existing record with the same form key in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub mod_key: ModKey,
    #[serde(default)]
    pub spells: Vec<Spell>,
    #[serde(default)]
    pub books: Vec<Book>,
}

impl Module {
    /// Creates an empty module.
    pub fn new(mod_key: ModKey) -> Self {
        Self {
            mod_key,
            spells: Vec::new(),
            books: Vec::new(),
        }
    }

    /// Records of kind `K`, in the order the module defines them.
    pub fn records<K: MajorRecord>(&self) -> &[K] {
        K::group(self)
    }

    /// Inserts a record into its group, replacing one with the same form key.
    pub fn set_record<K: MajorRecord>(&mut self, record: K) {
        let group = K::group_mut(self);
        match group.iter_mut().find(|r| r.form_key() == record.form_key()) {
            Some(existing) => *existing = record,
            None => group.push(record),
        }
    }

    /// Total number of records across all groups.
    pub fn len(&self) -> usize {
        self.spells.len() + self.books.len()
    }

    /// True if the module carries no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
