//! MCP tool manifest (`tools.json`).
//!
//! One tool per operation, named after the handler in `server.py`, with a
//! JSON Schema describing the arguments the handler accepts.

use heck::ToTitleCase;
use indexmap::IndexMap;
use mcpgen_core::ir::{HttpMethod, IrSpec, OperationDescriptor};
use mcpgen_core::parse::parameter::ParameterLocation;
use serde::Serialize;

use crate::error::GeneratorError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ToolDefinition {
    name: String,
    title: String,
    description: String,
    method: &'static str,
    path: String,
    input_schema: InputSchema,
}

#[derive(Debug, Serialize)]
struct InputSchema {
    #[serde(rename = "type")]
    schema_type: &'static str,
    properties: IndexMap<String, Property>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    required: Vec<String>,
}

#[derive(Debug, Serialize)]
struct Property {
    #[serde(rename = "type")]
    schema_type: &'static str,
    description: String,
}

/// Emit the tool manifest as pretty-printed JSON.
pub fn emit_tools(ir: &IrSpec) -> Result<String, GeneratorError> {
    let tools: Vec<ToolDefinition> = ir.operations.iter().map(tool_definition).collect();
    serde_json::to_string_pretty(&tools)
        .map(|json| json + "\n")
        .map_err(|source| GeneratorError::Serialize {
            artifact: "tools.json",
            source,
        })
}

fn tool_definition(op: &OperationDescriptor) -> ToolDefinition {
    let description = op
        .summary
        .as_deref()
        .or(op.description.as_deref())
        .map(str::to_string)
        .unwrap_or_else(|| format!("{} {}", op.method.as_str(), op.path));

    ToolDefinition {
        name: op.identifier.clone(),
        title: op.identifier.to_title_case(),
        description,
        method: op.method.as_str(),
        path: op.path.clone(),
        input_schema: input_schema(op),
    }
}

fn input_schema(op: &OperationDescriptor) -> InputSchema {
    let mut properties = IndexMap::new();
    let mut required = Vec::new();

    for param in &op.path_params {
        properties.insert(
            param.name.clone(),
            string_property(param.description.as_deref(), ParameterLocation::Path),
        );
        required.push(param.name.clone());
    }

    for param in &op.forwarded_params {
        if properties.contains_key(&param.name) {
            continue;
        }
        properties.insert(
            param.name.clone(),
            string_property(param.description.as_deref(), param.location),
        );
        if param.required {
            required.push(param.name.clone());
        }
    }

    if matches!(op.method, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch) {
        properties.entry("data".to_string()).or_insert(Property {
            schema_type: "object",
            description: "JSON request body".to_string(),
        });
    }

    InputSchema {
        schema_type: "object",
        properties,
        required,
    }
}

/// A string argument, described by its declaration or else by where it is declared.
fn string_property(description: Option<&str>, location: ParameterLocation) -> Property {
    let description = match description {
        Some(text) => text.to_string(),
        None => format!("{} parameter", location.as_str()),
    };
    Property {
        schema_type: "string",
        description,
    }
}
