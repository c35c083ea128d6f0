//! Error types for the record model.

use modforward_types::{FormKey, ModKey};
use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur while building or copying model data.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The same module appears twice in a load order.
    #[error("duplicate module in load order: {0}")]
    DuplicateModule(ModKey),

    /// A record could not be deep-copied.
    #[error("failed to copy record {form_key}: {reason}")]
    CopyFailed { form_key: FormKey, reason: String },

    /// Identifier parse error.
    #[error(transparent)]
    Types(#[from] modforward_types::Error),
}
