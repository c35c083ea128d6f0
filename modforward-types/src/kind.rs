use std::fmt;

/// The record groups the patcher knows how to forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordKind {
    Spell,
    Book,
}

impl RecordKind {
    /// Returns the display name, e.g. `Spell`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Spell => "Spell",
            Self::Book => "Book",
        }
    }

    /// Returns the section banner used in reports, e.g. `SPELL OVERRIDES`.
    #[must_use]
    pub const fn banner(&self) -> &'static str {
        match self {
            Self::Spell => "SPELL OVERRIDES",
            Self::Book => "BOOK OVERRIDES",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
