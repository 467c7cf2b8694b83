use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdrError {
    #[error("Record directory unavailable ({}): {source}", path.display())]
    StoreUnavailable { path: PathBuf, source: io::Error },

    #[error("A title is required when creating a new record")]
    MissingTitle,

    #[error("Could not read record {}: {source}", path.display())]
    RecordUnreadable { path: PathBuf, source: io::Error },

    #[error("Could not write record {}: {source}", path.display())]
    RecordWriteFailed { path: PathBuf, source: io::Error },

    #[error("Could not write index {}: {source}", path.display())]
    IndexWriteFailed { path: PathBuf, source: io::Error },

    #[error("Could not remove old record {}: {source}", path.display())]
    CleanupFailed { path: PathBuf, source: io::Error },

    #[error("Invalid record number: {0:?}")]
    InvalidNumber(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, AdrError>;
