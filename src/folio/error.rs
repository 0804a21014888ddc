use thiserror::Error;

/// Failures surfaced by the library.
///
/// A missing page is not an error: lookups return `Option`.
#[derive(Error, Debug)]
pub enum FolioError {
    /// The store could not be opened (missing permissions, corrupt table,
    /// schema from a newer version).
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// A mutating operation failed after the store was opened.
    #[error("Write failed: {0}")]
    Write(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, FolioError>;
