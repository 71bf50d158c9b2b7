//! Error types for json-gostruct.
//!
//! Every failure is fatal: the CLI prints the message and exits non-zero
//! without writing any output.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Input Errors
    // ============================================================================
    #[error("file '{}' not found", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read '{origin}': {source}")]
    Read {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in '{origin}': {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON pointer '{pointer}' does not resolve in '{origin}'")]
    Pointer { pointer: String, origin: String },

    #[error("jq filter failed: {message}")]
    Jq { message: String },

    // ============================================================================
    // Inference Errors
    // ============================================================================
    #[error("JSON must be an object or a non-empty array of objects, found {found}")]
    Shape { found: String },

    #[error("invalid root type name '{name}'")]
    RootName { name: String },

    // ============================================================================
    // Output Errors
    // ============================================================================
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize schema: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
