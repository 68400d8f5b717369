use thiserror::Error;

use crate::xml::ParseError;

/// Request building and response extraction errors
#[derive(Error, Debug)]
pub enum ProtoError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unexpected cardinality: expected {expected} row(s), found {found}")]
    UnexpectedCardinality { expected: usize, found: usize },

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error(transparent)]
    ParseError(#[from] ParseError),

    #[error("XML write error: {0}")]
    WriteError(#[from] quick_xml::Error),
}

pub type ProtoResult<T> = std::result::Result<T, ProtoError>;
