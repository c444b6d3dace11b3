use std::path::PathBuf;

use thiserror::Error;

/// Failures of a durable key/value backend.
///
/// Malformed cart payloads are not errors: they read as an empty cart.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to access storage file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode storage payload")]
    Encode(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;
