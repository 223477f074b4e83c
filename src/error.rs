//! @ai:module:intent Define error types for module documentation extraction
//! @ai:module:layer domain
//! @ai:module:public_api Error, Result
//! @ai:module:stateless true

use std::path::PathBuf;
use thiserror::Error;

/// @ai:intent Unified error type for all tcmodhelp operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed option key at line {line}: `{text}` (expected `<name> <type>`, found {tokens} token(s))")]
    MalformedOptionKey {
        line: usize,
        text: String,
        tokens: usize,
    },

    #[error("{0}")]
    MissingSelection(&'static str),

    #[error("{0} analysis is not yet supported")]
    Unsupported(&'static str),

    #[error("Invalid configuration in {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
