use crate::types::RecordIdError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Errors raised while fetching or decoding the vault item list.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed item list: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("vault unavailable: {0}")]
    Unavailable(String),
}

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("invalid record id: {0}")]
    InvalidRecordId(#[from] RecordIdError),
}
