mod artifacts;
mod logging;

pub use artifacts::{OutputFormat, read_input, write_json, write_records};
pub use logging::init_logging;

use thiserror::Error;

use crate::workspace::WorkspaceError;

/// Errors raised while reading inputs, writing outputs or installing logging.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("workspace error: {0}")]
    Workspace(#[from] WorkspaceError),
    #[error("logging error: {0}")]
    Logging(String),
}

/// Result type for registry operations.
pub type RegistryResult<T> = std::result::Result<T, RegistryError>;
