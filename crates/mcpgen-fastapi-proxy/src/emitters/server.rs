use mcpgen_core::config::ProxyConfig;
use mcpgen_core::ir::{IrSpec, OperationDescriptor};
use minijinja::context;

use crate::error::GeneratorError;
use crate::python::url_fstring;

use super::render;

/// Emit `server.py`, the FastAPI proxy with one handler per operation.
pub fn emit_server(ir: &IrSpec, config: &ProxyConfig) -> Result<String, GeneratorError> {
    let operations: Vec<minijinja::Value> =
        ir.operations.iter().map(build_operation_context).collect();

    render(
        "server.py",
        include_str!("../../templates/server.py.j2"),
        context! {
            title => ir.info.title,
            base_url => ir.base_url,
            access_key_env => config.access_key_env,
            auth_header => config.auth_header,
            auth_scheme => config.auth_scheme,
            timeout_secs => config.timeout_secs,
            operations => operations,
        },
    )
}

fn build_operation_context(op: &OperationDescriptor) -> minijinja::Value {
    let path_params: Vec<minijinja::Value> = op
        .path_params
        .iter()
        .map(|param| {
            context! {
                name => param.name,
                ident => param.ident,
                needs_alias => param.ident != param.name,
            }
        })
        .collect();

    context! {
        name => op.identifier,
        method => op.method.as_str(),
        http_method => op.method.as_lower(),
        path => op.path,
        summary => op.summary,
        path_params => path_params,
        url => url_fstring(op),
    }
}

#[cfg(test)]
mod tests {
    use mcpgen_core::parse;
    use mcpgen_core::transform::{TransformOptions, transform_with_options};

    use super::*;
    use crate::python::RESERVED;

    fn server_for(json: &str) -> String {
        let options = TransformOptions {
            reserved: RESERVED.iter().map(|s| s.to_string()).collect(),
        };
        let ir = transform_with_options(&parse::from_json(json).unwrap(), &options);
        emit_server(&ir, &ProxyConfig::default()).unwrap()
    }

    #[test]
    fn test_prologue() {
        let out = server_for(r#"{"servers": [{"url": "https://api.example.com"}]}"#);
        assert!(out.starts_with("# Generated by mcpgen. Do not edit.\n"));
        assert!(out.contains("BASE_URL = \"https://api.example.com\"\n"));
        assert!(out.contains("ACCESS_KEY_ENV = \"KM_ACCESS_KEY\"\n"));
        assert!(out.contains("AUTH_HEADER = \"X-KM-AccessKey\"\n"));
        assert!(out.contains("return {AUTH_HEADER: f\"{AUTH_SCHEME} {token}\"}\n"));
        assert!(out.contains("async with httpx.AsyncClient(timeout=TIMEOUT_SECONDS) as client:"));
        assert!(!out.contains("@app."));
        assert!(out.ends_with("        return resp.text\n"));
    }

    #[test]
    fn test_ping_handler() {
        let out = server_for(
            r#"{"servers": [{"url": "https://api.example.com"}],
                "paths": {"/ping": {"get": {"operationId": "ping"}}}}"#,
        );
        let expected = r#"

@app.get("/ping", operation_id="ping")
async def ping(
    data: Annotated[dict[str, Any] | None, Body()] = None,
    query: dict[str, str] = Depends(query_params),
    client: httpx.AsyncClient = Depends(get_client),
) -> Any:
    url = f"{BASE_URL}/ping"
    resp = await client.request("GET", url, headers=get_headers(), params=query, json=data)
    return decode(resp)
"#;
        assert!(out.ends_with(expected), "unexpected handler:\n{out}");
        assert_eq!(out.matches("@app.").count(), 1);
    }

    #[test]
    fn test_path_params_in_signature_and_url() {
        let out = server_for(
            r#"{"paths": {"/v1/knowledge-models/{knowledge_model_id}/files/{file_id}": {"delete": {
                "operationId": "delete_file",
                "summary": "Delete a file",
                "parameters": [
                    {"name": "knowledge_model_id", "in": "path", "required": true},
                    {"name": "file_id", "in": "path", "required": true},
                    {"name": "force", "in": "query"}
                ]
            }}}}"#,
        );
        assert!(out.contains(concat!(
            "@app.delete(\"/v1/knowledge-models/{knowledge_model_id}/files/{file_id}\", ",
            "operation_id=\"delete_file\", summary=\"Delete a file\")\n",
        )));
        assert!(out.contains(
            "async def delete_file(\n    knowledge_model_id: str,\n    file_id: str,\n    data:"
        ));
        assert!(out.contains(
            "url = f\"{BASE_URL}/v1/knowledge-models/{knowledge_model_id}/files/{file_id}\"\n"
        ));
        assert!(out.contains("client.request(\"DELETE\", url,"));
        assert!(!out.contains("force"));
    }

    #[test]
    fn test_aliased_and_reserved_params() {
        let out = server_for(
            r#"{"paths": {"/x/{file-id}/{client}": {"get": {
                "operationId": "class",
                "parameters": [
                    {"name": "file-id", "in": "path", "required": true},
                    {"name": "client", "in": "path", "required": true}
                ]
            }}}}"#,
        );
        assert!(out.contains("async def class_2(\n"));
        assert!(out.contains("    file_id: Annotated[str, Path(alias=\"file-id\")],\n"));
        assert!(out.contains("    client_2: Annotated[str, Path(alias=\"client\")],\n"));
        assert!(out.contains("url = f\"{BASE_URL}/x/{file_id}/{client_2}\"\n"));
    }

    #[test]
    fn test_undeclared_placeholder_left_literal() {
        let out =
            server_for(r#"{"paths": {"/items/{item_id}": {"get": {"operationId": "get_item"}}}}"#);
        assert!(out.contains("@app.get(\"/items/{item_id}\", operation_id=\"get_item\")\n"));
        assert!(out.contains("url = f\"{BASE_URL}/items/{{item_id}}\"\n"));
    }

    #[test]
    fn test_handlers_follow_enumeration_order() {
        let out = server_for(
            r#"{"paths": {
                "/b": {"post": {"operationId": "second"}, "get": {"operationId": "third"}},
                "/a": {"get": {"operationId": "fourth"}},
                "/0": {"put": {"operationId": "first"}}
            }}"#,
        );
        let needles = [
            "async def second(",
            "async def third(",
            "async def fourth(",
            "async def first(",
        ];
        let positions: Vec<usize> = needles
            .iter()
            .map(|needle| out.find(needle).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_builtin_names_are_not_shadowed() {
        let out = server_for(
            r#"{"paths": {
                "/a": {"get": {"operationId": "dict"}},
                "/b/{str}": {"get": {
                    "operationId": "ValueError",
                    "parameters": [{"name": "str", "in": "path", "required": true}]
                }},
                "/c": {"get": {"operationId": "b"}}
            }}"#,
        );
        assert!(out.contains("async def dict_2(\n"));
        assert!(out.contains("async def ValueError_2(\n"));
        assert!(out.contains("    str_2: Annotated[str, Path(alias=\"str\")],\n"));
        assert!(!out.contains("async def dict("));
        assert!(out.contains("async def b(\n"));
    }
}
