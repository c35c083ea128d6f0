use crate::{MajorRecord, Module};
use modforward_types::{FormKey, RecordKind};
use serde::{Deserialize, Serialize};

/// A spell record.
///
/// Only identity, editor id and name are interpreted. Everything else the
/// record carries (effects, costs, flags) rides along in `payload` and is
/// copied verbatim into a patch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spell {
    pub form_key: FormKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl Spell {
    /// Creates a spell with no editor id, name or payload.
    pub fn new(form_key: FormKey) -> Self {
        Self {
            form_key,
            editor_id: None,
            name: None,
            payload: serde_json::Value::Null,
        }
    }

    pub fn with_editor_id(mut self, editor_id: impl Into<String>) -> Self {
        self.editor_id = Some(editor_id.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }
}

impl MajorRecord for Spell {
    const KIND: RecordKind = RecordKind::Spell;

    fn form_key(&self) -> &FormKey {
        &self.form_key
    }

    fn editor_id(&self) -> Option<&str> {
        self.editor_id.as_deref()
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn group(module: &Module) -> &[Self] {
        &module.spells
    }

    fn group_mut(module: &mut Module) -> &mut Vec<Self> {
        &mut module.spells
    }
}
