use crate::{ModelResult, Module};
use modforward_types::{FormKey, RecordKind};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::Debug;

/// The capabilities the override engine needs from a record kind.
///
/// Every stage of the pipeline is generic over this trait instead of
/// being written once per kind. Kind-specific filtering (e.g. "only spell
/// tomes") is passed to the stages as a predicate, not encoded here.
pub trait MajorRecord: Clone + Debug + Serialize + DeserializeOwned {
    /// The kind this type represents.
    const KIND: RecordKind;

    /// Global identity of the record.
    fn form_key(&self) -> &FormKey;

    /// Natural key used to correlate records across modules.
    fn editor_id(&self) -> Option<&str>;

    /// In-game display name, if the kind has one and it is set.
    fn name(&self) -> Option<&str>;

    /// This kind's group inside a module.
    fn group(module: &Module) -> &[Self];

    /// Mutable access to this kind's group inside a module.
    fn group_mut(module: &mut Module) -> &mut Vec<Self>;

    /// Produces an independent copy suitable for insertion into a patch.
    ///
    /// The copy keeps the form key; it shares nothing with `self`.
    fn deep_copy(&self) -> ModelResult<Self> {
        Ok(self.clone())
    }

    /// Human-readable label: editor id (or form key) plus the display name.
    fn label(&self) -> String {
        let mut label = match self.editor_id() {
            Some(id) => id.to_string(),
            None => self.form_key().to_string(),
        };
        if let Some(name) = self.name() {
            label.push_str(&format!(" (a.k.a {name})"));
        }
        label
    }
}
