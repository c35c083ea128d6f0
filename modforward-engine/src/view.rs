//! The load order's own view of which record is in effect.
//!
//! [`ResolvedView`] is the seam to whatever decides "what is active right
//! now". [`LinkCache`] is the stock implementation: the highest-priority
//! module defining an editor id wins, like the game itself.

use modforward_model::{LoadOrder, MajorRecord, ModContext};
use modforward_types::RecordKind;
use std::collections::HashMap;

/// Resolves editor ids to the record currently in effect.
pub trait ResolvedView {
    /// Returns the effective record of kind `K` for `editor_id`, if any.
    fn resolve<K: MajorRecord>(&self, editor_id: &str) -> Option<ModContext<'_, K>>;
}

/// Editor-id lookup over a whole load order.
///
/// Positions are recorded per kind at construction; resolving is a single
/// hash lookup followed by two slice indexes.
#[derive(Debug)]
pub struct LinkCache<'a> {
    load_order: &'a LoadOrder,
    positions: HashMap<RecordKind, HashMap<&'a str, (usize, usize)>>,
}

impl<'a> LinkCache<'a> {
    /// Builds the cache for the kinds the patcher forwards.
    pub fn new(load_order: &'a LoadOrder) -> Self {
        let mut cache = Self {
            load_order,
            positions: HashMap::new(),
        };
        cache.index_kind::<modforward_model::Spell>();
        cache.index_kind::<modforward_model::Book>();
        cache
    }

    fn index_kind<K: MajorRecord + 'a>(&mut self) {
        let load_order = self.load_order;
        let positions = self.positions.entry(K::KIND).or_default();
        // Highest priority first, so the first claim is the winner.
        for (module_pos, module) in load_order.iter().enumerate().rev() {
            for (record_pos, record) in module.records::<K>().iter().enumerate() {
                if let Some(editor_id) = record.editor_id() {
                    positions
                        .entry(editor_id)
                        .or_insert((module_pos, record_pos));
                }
            }
        }
    }

    /// The load order this cache was built from.
    pub fn load_order(&self) -> &'a LoadOrder {
        self.load_order
    }
}

impl ResolvedView for LinkCache<'_> {
    fn resolve<K: MajorRecord>(&self, editor_id: &str) -> Option<ModContext<'_, K>> {
        let &(module_pos, record_pos) = self.positions.get(&K::KIND)?.get(editor_id)?;
        let module = self.load_order.module_at(module_pos)?;
        let record = module.records::<K>().get(record_pos)?;
        Some(ModContext::new(&module.mod_key, record))
    }
}
