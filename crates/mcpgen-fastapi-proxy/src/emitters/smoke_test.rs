use mcpgen_core::config::ProxyConfig;
use mcpgen_core::ir::IrSpec;
use minijinja::context;

use crate::error::GeneratorError;

use super::render;

/// Emit `test_endpoints.py`.
///
/// The script re-reads the OpenAPI document it is given at run time, so only
/// the upstream base URL and auth settings are baked in.
pub fn emit_smoke_test(ir: &IrSpec, config: &ProxyConfig) -> Result<String, GeneratorError> {
    render(
        "test_endpoints.py",
        include_str!("../../templates/test_endpoints.py.j2"),
        context! {
            base_url => ir.base_url,
            access_key_env => config.access_key_env,
            auth_header => config.auth_header,
            auth_scheme => config.auth_scheme,
            timeout_secs => config.timeout_secs,
        },
    )
}

#[cfg(test)]
mod tests {
    use mcpgen_core::parse;
    use mcpgen_core::transform::transform;

    use super::*;

    #[test]
    fn test_smoke_test_constants() {
        let ir = transform(
            &parse::from_json(r#"{"servers": [{"url": "https://api.example.com/"}]}"#).unwrap(),
        );
        let out = emit_smoke_test(&ir, &ProxyConfig::default()).unwrap();
        assert!(out.starts_with("\"\"\"Smoke test generated by mcpgen."));
        assert!(out.contains("BASE_URL = \"https://api.example.com\"\n"));
        assert!(out.contains("AUTH_SCHEME = \"Bearer\"\n"));
        assert!(out.contains("TIMEOUT_SECONDS = 30\n"));
        assert!(out.contains("resp = client.get(BASE_URL + path)\n"));
        assert!(out.contains("if len(sys.argv) != 2:"));
    }

    #[test]
    fn test_required_check_sees_shared_and_referenced_parameters() {
        let ir = transform(&parse::from_json("{}").unwrap());
        let out = emit_smoke_test(&ir, &ProxyConfig::default()).unwrap();
        assert!(out.contains("PARAMETERS_PREFIX = \"#/components/parameters/\"\n"));
        assert!(out.contains("as_list(item.get(\"parameters\"))"));
        assert!(out.contains(
            "if any(p.get(\"required\") is True for p in effective_parameters(spec, item, op)):\n"
        ));
        assert!(!out.contains("op.get(\"required\")"));
    }

    #[test]
    fn test_smoke_test_custom_config() {
        let config = ProxyConfig {
            access_key_env: "PETS_TOKEN".to_string(),
            auth_header: "Authorization".to_string(),
            auth_scheme: "Token".to_string(),
            timeout_secs: 5,
        };
        let ir = transform(&parse::from_json("{}").unwrap());
        let out = emit_smoke_test(&ir, &config).unwrap();
        assert!(out.contains("BASE_URL = \"\"\n"));
        assert!(out.contains("ACCESS_KEY_ENV = \"PETS_TOKEN\"\n"));
        assert!(out.contains("AUTH_HEADER = \"Authorization\"\n"));
        assert!(out.contains("TIMEOUT_SECONDS = 5\n"));
    }
}
