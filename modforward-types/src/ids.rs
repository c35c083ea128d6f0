//! Identifier types used throughout modforward.
//!
//! A [`ModKey`] names a module file; a [`FormKey`] names a record by the
//! module that first defined it plus a 24-bit local id.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Largest local id a [`FormKey`] can carry (24 bits).
pub const MAX_LOCAL_ID: u32 = 0x00FF_FFFF;

/// The file type of a module, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ModType {
    /// `.esm`
    Master,
    /// `.esp`
    Plugin,
    /// `.esl`
    Light,
}

impl ModType {
    /// Returns the file extension without the leading dot.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Master => "esm",
            Self::Plugin => "esp",
            Self::Light => "esl",
        }
    }

    fn from_extension(ext: &str) -> Option<Self> {
        if ext.eq_ignore_ascii_case("esm") {
            Some(Self::Master)
        } else if ext.eq_ignore_ascii_case("esp") {
            Some(Self::Plugin)
        } else if ext.eq_ignore_ascii_case("esl") {
            Some(Self::Light)
        } else {
            None
        }
    }
}

/// Unique identifier for a module in a load order.
///
/// Two keys are equal when their types match and their names match
/// ignoring ASCII case, mirroring how the game treats plugin file names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModKey {
    name: String,
    mod_type: ModType,
}

impl ModKey {
    /// Creates a mod key from a bare name and a type.
    pub fn new(name: impl Into<String>, mod_type: ModType) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self { name, mod_type })
    }

    /// Parses a mod key from a file name such as `Skyrim.esm`.
    pub fn parse(file_name: &str) -> Result<Self> {
        let trimmed = file_name.trim();
        let (name, ext) = trimmed
            .rsplit_once('.')
            .ok_or_else(|| Error::InvalidModKey(format!("missing extension in '{trimmed}'")))?;
        let mod_type = ModType::from_extension(ext)
            .ok_or_else(|| Error::InvalidModKey(format!("unknown extension in '{trimmed}'")))?;
        Self::new(name, mod_type)
    }

    /// Returns the name without extension.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the module type.
    #[must_use]
    pub const fn mod_type(&self) -> ModType {
        self.mod_type
    }

    /// Returns the full file name, e.g. `Skyrim.esm`.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.to_string()
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::InvalidModKey("empty module name".into()));
    }
    if name.contains(['/', '\\', ':']) {
        return Err(Error::InvalidModKey(format!(
            "module name '{name}' contains a path separator"
        )));
    }
    Ok(())
}

impl PartialEq for ModKey {
    fn eq(&self, other: &Self) -> bool {
        self.mod_type == other.mod_type && self.name.eq_ignore_ascii_case(&other.name)
    }
}

impl Eq for ModKey {}

impl Hash for ModKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for b in self.name.bytes() {
            state.write_u8(b.to_ascii_lowercase());
        }
        self.mod_type.hash(state);
    }
}

impl fmt::Display for ModKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.name, self.mod_type.extension())
    }
}

impl FromStr for ModKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ModKey {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<ModKey> for String {
    fn from(key: ModKey) -> Self {
        key.to_string()
    }
}

/// Global identity of a record: the module that introduced it plus a
/// local id unique within that module.
///
/// Overrides of an existing record keep its form key; a record a module
/// adds itself carries that module's key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FormKey {
    mod_key: ModKey,
    id: u32,
}

impl FormKey {
    /// Creates a form key. Fails if `id` does not fit in 24 bits.
    pub fn new(mod_key: ModKey, id: u32) -> Result<Self> {
        if id > MAX_LOCAL_ID {
            return Err(Error::InvalidFormKey(format!(
                "local id {id:#X} exceeds {MAX_LOCAL_ID:#X}"
            )));
        }
        Ok(Self { mod_key, id })
    }

    /// Parses a form key in `XXXXXX:Module.ext` form.
    pub fn parse(s: &str) -> Result<Self> {
        let (id, mod_key) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| Error::InvalidFormKey(format!("missing ':' in '{s}'")))?;
        let id = u32::from_str_radix(id, 16)
            .map_err(|e| Error::InvalidFormKey(format!("bad local id in '{s}': {e}")))?;
        let mod_key =
            ModKey::parse(mod_key).map_err(|e| Error::InvalidFormKey(format!("{s}: {e}")))?;
        Self::new(mod_key, id)
    }

    /// Returns the module that introduced this record.
    #[must_use]
    pub const fn mod_key(&self) -> &ModKey {
        &self.mod_key
    }

    /// Returns the local id.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }
}

impl fmt::Display for FormKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06X}:{}", self.id, self.mod_key)
    }
}

impl FromStr for FormKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for FormKey {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<FormKey> for String {
    fn from(key: FormKey) -> Self {
        key.to_string()
    }
}
