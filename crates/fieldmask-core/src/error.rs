use thiserror::Error;

/// Core error type shared across fieldmask crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The request payload does not have the expected shape.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    /// The request payload is not valid JSON.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for results returned by fieldmask crates.
pub type Result<T> = std::result::Result<T, Error>;
