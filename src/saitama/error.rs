use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SaitamaError {
    #[error("Config directory unavailable: {0}")]
    DirectoryUnavailable(String),

    #[error("Problems file {path} is corrupt: {source}")]
    CorruptStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Import file {path} could not be parsed: {source}")]
    CorruptImport {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid problem at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to replace {path}: {source}")]
    Replace {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Backup failed: {0}")]
    Backup(String),

    #[error("Problem not found: {0}")]
    ProblemNotFound(String),

    #[error("Problem ID '{0}' already exists")]
    DuplicateId(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, SaitamaError>;
