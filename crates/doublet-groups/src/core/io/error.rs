use crate::core::models::error::FormatError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("File I/O error for '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error for '{path}': {source}", path = path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Malformed content in '{path}': {source}", path = path.display())]
    Format {
        path: PathBuf,
        source: FormatError,
    },

    #[error("Directory traversal failed: {0}")]
    Walk(#[from] walkdir::Error),
}
