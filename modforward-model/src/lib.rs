//! Record model for modforward.
//!
//! Defines the data the override engine works over:
//! - [`Spell`] and [`Book`]: the two record kinds that get forwarded
//! - [`MajorRecord`]: the capability set the engine is generic over
//!   (identity, natural key, display name, deep copy, group access)
//! - [`Module`]: one plugin file's records, grouped per kind
//! - [`LoadOrder`] and [`ModContext`]: ordered modules and "which module
//!   supplied this record"
//!
//! Reading modules from disk is not this crate's job; callers build
//! [`Module`]s from whatever storage they use (the CLI reads JSON).

mod book;
mod error;
mod load_order;
mod module;
mod record;
mod spell;

pub use book::{Book, BookTeaches};
pub use error::{ModelError, ModelResult};
pub use load_order::{LoadOrder, ModContext};
pub use module::Module;
pub use record::MajorRecord;
pub use spell::Spell;
