use doublet_groups::core::io::error::IoError;
use doublet_groups::engine::error::EngineError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] EngineError),

    /// A required setting is missing or inconsistent. Reported together with
    /// the usage text.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<IoError> for CliError {
    fn from(e: IoError) -> Self {
        CliError::Core(EngineError::Io(e))
    }
}

impl CliError {
    pub fn is_usage_error(&self) -> bool {
        matches!(self, CliError::Config(_))
    }
}
