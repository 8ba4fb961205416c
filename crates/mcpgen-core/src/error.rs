use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a generation run before anything is written.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read spec {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse spec {} as JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Why a `$ref` could not be followed. Never fatal: the referencing entry is skipped.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("unsupported reference: {0}")]
    Unsupported(String),

    #[error("reference target not found: {0}")]
    NotFound(String),

    #[error("circular reference detected: {0}")]
    Circular(String),

    #[error("malformed reference target {reference}: {source}")]
    Malformed {
        reference: String,
        #[source]
        source: serde_json::Error,
    },
}
