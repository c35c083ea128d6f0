//! Error types for the override engine.

use modforward_model::ModelError;
use modforward_types::{ModKey, RecordKind};
use std::path::PathBuf;
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that abort a patch run.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The mandatory base module is not in the load order.
    #[error("mandatory base module {0} is not in the load order")]
    MissingMasterBase(ModKey),

    /// Settings file could not be read.
    #[error("cannot read settings file {}: {source}", path.display())]
    SettingsIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings could not be parsed.
    #[error("invalid settings: {0}")]
    SettingsParse(#[from] serde_json::Error),

    /// Writing the report failed.
    #[error("report output failed: {0}")]
    Report(#[from] std::io::Error),

    /// Copying a winner into the patch failed; nothing of this kind was written.
    #[error("emitting {kind} records failed: {source}")]
    Emit {
        kind: RecordKind,
        #[source]
        source: ModelError,
    },

    /// Model error.
    #[error("model error: {0}")]
    Model(#[from] ModelError),
}
