use thiserror::Error;

/// Errors at the input boundary. The scoring core itself is total and never
/// fails for documented inputs; these arise only while reading and parsing
/// caller-supplied files.
#[derive(Error, Debug)]
pub enum CropCycleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, CropCycleError>;
