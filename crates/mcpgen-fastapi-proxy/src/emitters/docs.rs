use mcpgen_core::config::ProxyConfig;
use mcpgen_core::ir::IrSpec;
use minijinja::context;

use crate::error::GeneratorError;

use super::render;

/// Emit `README.md` with setup steps and one bullet per endpoint.
pub fn emit_readme(ir: &IrSpec, config: &ProxyConfig) -> Result<String, GeneratorError> {
    let operations: Vec<minijinja::Value> = ir
        .operations
        .iter()
        .map(|op| {
            context! {
                method => op.method.as_str(),
                path => op.path,
                summary => op.summary.as_deref().map(single_line).unwrap_or_default(),
            }
        })
        .collect();

    render(
        "README.md",
        include_str!("../../templates/README.md.j2"),
        context! {
            title => ir.info.title,
            version => ir.info.version,
            access_key_env => config.access_key_env,
            operations => operations,
        },
    )
}

/// Collapse runs of whitespace so a multi-line summary stays on its bullet.
fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
