//! Error types shared by the core modules.

use thiserror::Error;

/// Failure of the key-value persistence provider. Callers treat these as best-effort.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage serialize: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("storage file {path} is corrupt")]
    Corrupt { path: String },
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Whole-form failure reported by a submit collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("submission rejected: {0}")]
    Rejected(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown theme {0:?}")]
pub struct ParseThemeError(pub String);
