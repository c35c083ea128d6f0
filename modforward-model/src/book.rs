use crate::{MajorRecord, Module};
use modforward_types::{FormKey, RecordKind};
use serde::{Deserialize, Serialize};

/// What reading a book teaches the player.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "value")]
pub enum BookTeaches {
    #[default]
    Nothing,
    /// Raises a skill, by skill name.
    Skill(String),
    /// Teaches the referenced spell. Books of this sort are spell tomes.
    Spell(FormKey),
}

/// A book record.
///
/// `teaches` is the one kind-specific field the patcher looks at: only
/// spell tomes take part in override detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub form_key: FormKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub teaches: BookTeaches,
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl Book {
    /// Creates a book that teaches nothing.
    pub fn new(form_key: FormKey) -> Self {
        Self {
            form_key,
            editor_id: None,
            name: None,
            teaches: BookTeaches::Nothing,
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

    pub fn with_teaches(mut self, teaches: BookTeaches) -> Self {
        self.teaches = teaches;
        self
    }

    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }

    /// True if reading this book teaches a spell.
    pub fn is_spell_tome(&self) -> bool {
        matches!(self.teaches, BookTeaches::Spell(_))
    }

    /// The spell this tome teaches, if it is one.
    pub fn taught_spell(&self) -> Option<&FormKey> {
        match &self.teaches {
            BookTeaches::Spell(spell) => Some(spell),
            _ => None,
        }
    }
}

impl MajorRecord for Book {
    const KIND: RecordKind = RecordKind::Book;

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
        &module.books
    }

    fn group_mut(module: &mut Module) -> &mut Vec<Self> {
        &mut module.books
    }
}
