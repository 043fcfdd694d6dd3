use thiserror::Error;

/// Errors emitted by the masking engine.
#[derive(Debug, Error)]
pub enum MaskError {
    /// A `none` rule needed a reference record past the end of the reference batch.
    #[error("no reference record for index {index} (reference batch has {available} records)")]
    Alignment { index: usize, available: usize },
    #[error("invalid options: {0}")]
    InvalidOptions(String),
    #[error("request error: {0}")]
    Request(#[from] fieldmask_core::Error),
}
