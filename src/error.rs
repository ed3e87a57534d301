//! Error types

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures that abort a build run.
///
/// Content problems (missing frontmatter, missing fields) are never errors;
/// they fall back to defaults inside the record builders.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to create directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read directory {path:?}: {source}")]
    ReadDir {
        path: PathBuf,
        source: walkdir::Error,
    },

    #[error("Failed to read {path:?}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path:?}: {source}")]
    WriteIndex {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize index: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid config {path:?}: {source}")]
    Config {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Collation unavailable for locale {locale:?}: {message}")]
    Collation { locale: String, message: String },

    #[error("Index {path:?} is unavailable: {message}")]
    IndexUnavailable { path: PathBuf, message: String },
}
