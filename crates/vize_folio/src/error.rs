//! Error types for loading documentation inputs.
//!
//! Building a document never fails; only reading inputs from disk or JSON can.

use std::path::PathBuf;

/// Errors raised while loading components or overlays.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

pub type FolioResult<T> = Result<T, FolioError>;
