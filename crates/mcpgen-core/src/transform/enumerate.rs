use crate::ir::HttpMethod;
use crate::parse::operation::Operation;
use crate::parse::parameter::{Parameter, ParameterOrRef};
use crate::parse::ref_resolve::RefResolver;
use crate::parse::spec::{OpenApiDocument, PathItem};

/// One `(path, method, operation)` entry of the document.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumeratedOperation<'a> {
    pub path: &'a str,
    pub method: HttpMethod,
    pub operation: Operation,
    /// Effective parameters: path-level ones merged with the operation's own,
    /// references resolved.
    pub parameters: Vec<Parameter>,
}

/// Walk every operation of the document in source order.
///
/// Paths come in the order they appear in the document, and methods within a path
/// likewise. Path-item keys that are not HTTP methods (`parameters`,
/// `summary`, `servers`, extensions, ...) are skipped.
pub fn iter_operations(doc: &OpenApiDocument) -> impl Iterator<Item = EnumeratedOperation<'_>> {
    let resolver = RefResolver::new(&doc.components);
    doc.paths.iter().flat_map(move |(path, item)| {
        let shared = resolve_all(&resolver, &item.shared_parameters(), path);
        operations_of(path, item)
            .map(|(method, operation)| {
                let own = resolve_all(&resolver, &operation.parameters, path);
                EnumeratedOperation {
                    path: path.as_str(),
                    method,
                    parameters: merge_parameters(&shared, own),
                    operation,
                }
            })
            .collect::<Vec<_>>()
    })
}

fn operations_of<'a>(
    path: &'a str,
    item: &'a PathItem,
) -> impl Iterator<Item = (HttpMethod, Operation)> + 'a {
    item.entries.iter().filter_map(move |(key, value)| {
        match HttpMethod::from_key(key) {
            Some(method) => Some((method, Operation::from_value(value))),
            None => {
                log::debug!("{path}: skipping non-method key `{key}`");
                None
            }
        }
    })
}

fn resolve_all(
    resolver: &RefResolver<'_>,
    params: &[ParameterOrRef],
    path: &str,
) -> Vec<Parameter> {
    params
        .iter()
        .filter_map(|p| match resolver.resolve_parameter(p) {
            Ok(param) => Some(param),
            Err(e) => {
                log::warn!("{path}: skipping parameter: {e}");
                None
            }
        })
        .collect()
}

/// Path-level parameters first, minus those the operation redeclares; then
/// the operation's own, in declaration order.
fn merge_parameters(shared: &[Parameter], own: Vec<Parameter>) -> Vec<Parameter> {
    let mut merged: Vec<Parameter> = shared
        .iter()
        .filter(|s| !own.iter().any(|o| o.same_slot(s)))
        .cloned()
        .collect();
    merged.extend(own);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;
    use crate::parse::parameter::ParameterLocation;

    fn pairs(json: &str) -> Vec<(String, HttpMethod)> {
        let doc = parse::from_json(json).unwrap();
        iter_operations(&doc)
            .map(|op| (op.path.to_string(), op.method))
            .collect()
    }

    #[test]
    fn test_source_order_preserved() {
        let found = pairs(
            r#"{"paths": {
                "/z": {"post": {}, "get": {}},
                "/a": {"delete": {}, "patch": {}}
            }}"#,
        );
        assert_eq!(
            found,
            vec![
                ("/z".to_string(), HttpMethod::Post),
                ("/z".to_string(), HttpMethod::Get),
                ("/a".to_string(), HttpMethod::Delete),
                ("/a".to_string(), HttpMethod::Patch),
            ]
        );
    }

    #[test]
    fn test_non_method_keys_skipped() {
        let found = pairs(
            r#"{"paths": {"/alive": {
                "summary": "Liveness",
                "parameters": [],
                "get": {"operationId": "alive"},
                "x-internal": true,
                "servers": []
            }}}"#,
        );
        assert_eq!(found, vec![("/alive".to_string(), HttpMethod::Get)]);
    }

    #[test]
    fn test_method_keys_case_insensitive() {
        let found = pairs(r#"{"paths": {"/x": {"GET": {}}}}"#);
        assert_eq!(found, vec![("/x".to_string(), HttpMethod::Get)]);
    }

    #[test]
    fn test_missing_paths_yields_nothing() {
        assert!(pairs(r#"{"openapi": "3.0.0"}"#).is_empty());
        assert!(pairs(r#"{"paths": 5}"#).is_empty());
        assert!(pairs("[]").is_empty());
    }

    #[test]
    fn test_non_object_operation_is_empty() {
        let doc = parse::from_json(r#"{"paths": {"/x": {"get": "oops"}}}"#).unwrap();
        let ops: Vec<_> = iter_operations(&doc).collect();
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].operation, Operation::default());
        assert!(ops[0].parameters.is_empty());
    }

    #[test]
    fn test_path_level_parameters_merged() {
        let doc = parse::from_json(
            r#"{"paths": {"/km/{id}/files": {
                "parameters": [
                    {"name": "id", "in": "path", "required": true},
                    {"name": "limit", "in": "query", "description": "shared"}
                ],
                "get": {"parameters": [
                    {"name": "limit", "in": "query", "description": "own"},
                    {"name": "offset", "in": "query"}
                ]}
            }}}"#,
        )
        .unwrap();
        let op = iter_operations(&doc).next().unwrap();
        let names: Vec<_> = op.parameters.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["id", "limit", "offset"]);
        assert_eq!(op.parameters[0].location, ParameterLocation::Path);
        assert_eq!(op.parameters[1].description.as_deref(), Some("own"));
    }

    #[test]
    fn test_parameter_refs_resolved_and_dangling_skipped() {
        let doc = parse::from_json(
            r##"{
                "components": {"parameters": {
                    "Limit": {"name": "limit", "in": "query"}
                }},
                "paths": {"/x": {"get": {"parameters": [
                    {"$ref": "#/components/parameters/Limit"},
                    {"$ref": "#/components/parameters/Missing"},
                    {"in": "query"}
                ]}}}
            }"##,
        )
        .unwrap();
        let op = iter_operations(&doc).next().unwrap();
        let names: Vec<_> = op.parameters.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["limit"]);
    }
}
