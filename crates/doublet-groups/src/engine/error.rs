use super::config::ConfigError;
use crate::core::io::error::IoError;
use crate::core::models::error::FormatError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Io(#[from] IoError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("No result table found for structure '{structure_id}' (looked in {searched})")]
    MissingTable {
        structure_id: String,
        searched: String,
    },
}
