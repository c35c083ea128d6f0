//! Core identifier types for modforward.
//!
//! This crate defines the identities every other crate in the workspace
//! speaks in:
//! - [`ModKey`]: a module file (`Skyrim.esm`, `SomeMod.esp`)
//! - [`FormKey`]: a record's global identity (origin module + local id)
//! - [`RecordKind`]: the record groups the patcher forwards
//!
//! Record payloads, modules and load orders live in `modforward-model`.

mod ids;
mod kind;

pub use ids::{FormKey, ModKey, ModType, MAX_LOCAL_ID};
pub use kind::RecordKind;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when parsing identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid mod key: {0}")]
    InvalidModKey(String),

    #[error("invalid form key: {0}")]
    InvalidFormKey(String),
}
