//! Error types for STL import

use thiserror::Error;

/// Result type for STL operations
pub type StlResult<T> = Result<T, StlError>;

/// Errors that can occur while importing an STL mesh
#[derive(Error, Debug)]
pub enum StlError {
    #[error("Failed to read STL file: {0}")]
    ReadError(String),

    #[error("Malformed facet: {0}")]
    MalformedFacet(String),

    #[error("Failed to parse STL file: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
