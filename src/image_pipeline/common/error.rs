use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Resource unavailable: {0}")]
    ResourceUnavailable(String),

    #[error("Frame size mismatch: expected {expected} bytes, read {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("Degenerate frame: every sample equals {0}")]
    DegenerateFrame(u16),

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
