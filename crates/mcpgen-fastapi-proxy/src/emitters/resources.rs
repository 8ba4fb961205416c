//! MCP resource manifest (`resources.json`).
//!
//! Every GET operation is also readable as a resource at `api://<path>`.

use mcpgen_core::ir::{HttpMethod, IrSpec, OperationDescriptor};
use serde::Serialize;

use crate::error::GeneratorError;

const URI_SCHEME: &str = "api://";
const MIME_TYPE: &str = "application/json";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResourceDefinition {
    uri: String,
    name: String,
    description: String,
    mime_type: &'static str,
}

/// Emit the resource manifest as pretty-printed JSON.
pub fn emit_resources(ir: &IrSpec) -> Result<String, GeneratorError> {
    let resources: Vec<ResourceDefinition> = ir
        .operations
        .iter()
        .filter(|op| op.method == HttpMethod::Get)
        .map(resource_definition)
        .collect();
    serde_json::to_string_pretty(&resources)
        .map(|json| json + "\n")
        .map_err(|source| GeneratorError::Serialize {
            artifact: "resources.json",
            source,
        })
}

fn resource_definition(op: &OperationDescriptor) -> ResourceDefinition {
    let subject = match op.summary.as_deref().or(op.description.as_deref()) {
        Some(text) => lowercase_first(text.trim()),
        None => format!("{} {}", op.method.as_str(), op.path),
    };

    ResourceDefinition {
        uri: format!("{URI_SCHEME}{}", op.path),
        name: format!("{}_resource", op.identifier),
        description: format!("Access to {subject}"),
        mime_type: MIME_TYPE,
    }
}

fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
