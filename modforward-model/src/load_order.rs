//! Ordered modules and record contexts.
//!
//! A [`LoadOrder`] lists modules lowest priority first: a module later in
//! the list overrides anything earlier. "Priority order" is the same list
//! reversed.

use crate::{MajorRecord, ModelError, ModelResult, Module};
use modforward_types::{FormKey, ModKey};
use std::collections::HashSet;

/// A record together with the module that supplied it.
#[derive(Debug)]
pub struct ModContext<'a, K> {
    pub mod_key: &'a ModKey,
    pub record: &'a K,
}

impl<K> Clone for ModContext<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for ModContext<'_, K> {}

impl<'a, K> ModContext<'a, K> {
    pub fn new(mod_key: &'a ModKey, record: &'a K) -> Self {
        Self { mod_key, record }
    }
}

/// Modules in load order, each key present at most once.
#[derive(Debug, Clone, Default)]
pub struct LoadOrder {
    modules: Vec<Module>,
}

impl LoadOrder {
    /// Creates an empty load order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a load order from modules listed lowest priority first.
    pub fn from_modules(modules: impl IntoIterator<Item = Module>) -> ModelResult<Self> {
        let mut load_order = Self::new();
        for module in modules {
            load_order.push(module)?;
        }
        Ok(load_order)
    }

    /// Appends a module at the highest priority.
    pub fn push(&mut self, module: Module) -> ModelResult<()> {
        if self.contains(&module.mod_key) {
            return Err(ModelError::DuplicateModule(module.mod_key));
        }
        self.modules.push(module);
        Ok(())
    }

    /// Looks up a module by key.
    pub fn get(&self, mod_key: &ModKey) -> Option<&Module> {
        self.modules.iter().find(|m| &m.mod_key == mod_key)
    }

    /// True if the module is part of this load order.
    pub fn contains(&self, mod_key: &ModKey) -> bool {
        self.get(mod_key).is_some()
    }

    /// Position of a module, 0 being the lowest priority.
    pub fn position(&self, mod_key: &ModKey) -> Option<usize> {
        self.modules.iter().position(|m| &m.mod_key == mod_key)
    }

    /// Module at a load-order position, 0 being the lowest priority.
    pub fn module_at(&self, position: usize) -> Option<&Module> {
        self.modules.get(position)
    }

    /// Modules lowest priority first.
    pub fn iter(&self) -> std::slice::Iter<'_, Module> {
        self.modules.iter()
    }

    /// Modules highest priority first.
    pub fn priority_order(&self) -> impl Iterator<Item = &Module> {
        self.modules.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// The winning version of every record of kind `K`.
    ///
    /// For each distinct form key, yields the context from the highest
    /// priority module that defines it. Results come in priority order,
    /// and within one module in the module's own record order.
    pub fn winning_contexts<K: MajorRecord>(&self) -> Vec<ModContext<'_, K>> {
        let mut seen: HashSet<&FormKey> = HashSet::new();
        let mut winners = Vec::new();
        for module in self.priority_order() {
            for record in module.records::<K>() {
                if seen.insert(record.form_key()) {
                    winners.push(ModContext::new(&module.mod_key, record));
                }
            }
        }
        winners
    }
}

impl<'a> IntoIterator for &'a LoadOrder {
    type Item = &'a Module;
    type IntoIter = std::slice::Iter<'a, Module>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
