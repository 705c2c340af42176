use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrubError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unsupported file format: {0} (use .csv or .json)")]
    UnsupportedFormat(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, ScrubError>;
