use thiserror::Error;

/// Errors from decoding protocol values
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoreError {
    #[error("Unknown check-in type {0:?}, expected 0, 1 or 2")]
    UnknownCheckinType(String),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
