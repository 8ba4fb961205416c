pub mod lenient;
pub mod operation;
pub mod parameter;
pub mod ref_resolve;
pub mod server;
pub mod spec;

use std::fs;
use std::path::Path;

use crate::error::LoadError;
use spec::OpenApiDocument;

/// Read and parse an OpenAPI document from disk.
pub fn load_spec(path: &Path) -> Result<OpenApiDocument, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let doc = from_json(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!(
        "loaded {}: {} path(s), {} server(s)",
        path.display(),
        doc.paths.len(),
        doc.servers.len()
    );
    Ok(doc)
}

/// Parse an OpenAPI document from JSON.
///
/// Only well-formedness is checked. Anything that is valid JSON yields a
/// document; parts that do not have the expected shape are treated as absent.
pub fn from_json(input: &str) -> Result<OpenApiDocument, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(input)?;
    Ok(OpenApiDocument::from_value(value))
}
